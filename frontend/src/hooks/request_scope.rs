use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use yew::prelude::*;

#[derive(Default)]
struct InFlight {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Futures bound to one owner. Aborting the scope drops every bound future
/// that has not finished, so no result reaches an owner that is gone.
#[derive(Clone, Default)]
pub struct RequestScope {
    in_flight: Rc<RefCell<InFlight>>,
}

impl RequestScope {
    /// Resolves to `None` when the scope was aborted first.
    pub fn bind<F>(&self, fut: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut in_flight = self.in_flight.borrow_mut();
            let id = in_flight.next_id;
            in_flight.next_id += 1;
            in_flight.handles.insert(id, handle);
            id
        };

        let in_flight = Rc::clone(&self.in_flight);
        async move {
            let output = Abortable::new(fut, registration).await.ok();
            in_flight.borrow_mut().handles.remove(&id);
            output
        }
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let bound = self.bind(fut);
        wasm_bindgen_futures::spawn_local(async move {
            bound.await;
        });
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.borrow().handles.len()
    }

    pub fn abort_all(&self) {
        let handles: Vec<_> = self
            .in_flight
            .borrow_mut()
            .handles
            .drain()
            .map(|(_, handle)| handle)
            .collect();

        for handle in handles {
            handle.abort();
        }
    }
}

/// A [`RequestScope`] aborted when the calling component unmounts.
#[hook]
pub fn use_request_scope() -> RequestScope {
    let scope = use_state(RequestScope::default);

    {
        let scope = (*scope).clone();
        use_effect_with_deps(move |_| move || scope.abort_all(), ());
    }

    (*scope).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some_eq};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    #[test]
    fn finished_future_delivers_and_leaves_the_scope() {
        let scope = RequestScope::default();

        let bound = scope.bind(async { 41 + 1 });
        assert_eq!(scope.in_flight(), 1);

        assert_some_eq!(block_on(bound), 42);
        assert_eq!(scope.in_flight(), 0);
    }

    #[test]
    fn aborted_future_never_delivers() {
        let scope = RequestScope::default();
        let (tx, rx) = oneshot::channel::<&str>();
        let delivered = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let delivered = Rc::clone(&delivered);
            let bound = scope.bind(rx);
            pool.spawner()
                .spawn_local(async move {
                    if let Some(Ok(body)) = bound.await {
                        *delivered.borrow_mut() = Some(body);
                    }
                })
                .unwrap();
        }
        pool.run_until_stalled();

        scope.abort_all();
        let _ = tx.send("late response");
        pool.run();

        assert_none!(delivered.borrow().as_ref());
        assert_eq!(scope.in_flight(), 0);
    }

    #[test]
    fn abort_only_touches_unfinished_futures() {
        let scope = RequestScope::default();

        let done = block_on(scope.bind(async { "done" }));
        let (_tx, rx) = oneshot::channel::<()>();
        let waiting = scope.bind(rx);

        scope.abort_all();

        assert_some_eq!(done, "done");
        assert_none!(block_on(waiting));
    }
}
