use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Runs a task once after a delay.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler {
    type Pending;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Browser timers, `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

// Non-positive delays still go through the scheduler, just without a wait
fn clamp_delay(delay_ms: i32) -> u32 {
    u32::try_from(delay_ms).unwrap_or(0)
}

struct Settled<T> {
    value: T,
    armed: bool,
    listener: Option<Rc<dyn Fn(T)>>,
}

/// Trailing snapshot of a value that only moves after the source has been
/// quiet for the whole delay.
///
/// Every [`push`](Debouncer::push) drops the previous pending task, so at most
/// one timer is outstanding, and dropping the debouncer cancels it.
pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    settled: Rc<RefCell<Settled<T>>>,
    pending: Option<S::Pending>,
}

impl<T, S> Debouncer<T, S>
where
    T: Clone + 'static,
    S: Scheduler,
{
    pub fn new(initial: T, delay_ms: i32, scheduler: S) -> Self {
        Self {
            scheduler,
            delay_ms: clamp_delay(delay_ms),
            settled: Rc::new(RefCell::new(Settled {
                value: initial,
                armed: false,
                listener: None,
            })),
            pending: None,
        }
    }

    /// Called with the new snapshot every time a scheduled update lands.
    pub fn on_settle<F>(self, listener: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        self.settled.borrow_mut().listener = Some(Rc::new(listener));
        self
    }

    pub fn push(&mut self, value: T) {
        self.cancel();

        let settled = Rc::clone(&self.settled);
        let task = Box::new(move || {
            let listener = {
                let mut settled = settled.borrow_mut();
                settled.value = value.clone();
                settled.armed = false;
                settled.listener.clone()
            };

            if let Some(listener) = listener {
                listener(value);
            }
        });

        self.settled.borrow_mut().armed = true;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, task));
    }

    /// Takes effect from the next push.
    pub fn set_delay(&mut self, delay_ms: i32) {
        self.delay_ms = clamp_delay(delay_ms);
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn value(&self) -> T {
        self.settled.borrow().value.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.settled.borrow().armed
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.settled.borrow_mut().armed = false;
    }
}

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// A change of either argument restarts the wait, unmounting the owner
/// cancels the outstanding timer.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: i32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state_eq(|| value.clone());

    let debouncer = {
        let settled = settled.clone();
        let initial = value.clone();
        use_mut_ref(move || {
            Debouncer::new(initial, delay_ms, TimeoutScheduler).on_settle(move |v| settled.set(v))
        })
    };

    use_effect_with_deps(
        move |(value, delay_ms)| {
            {
                let mut debouncer = debouncer.borrow_mut();
                debouncer.set_delay(*delay_ms);
                debouncer.push(value.clone());
            }

            move || debouncer.borrow_mut().cancel()
        },
        (value, delay_ms),
    );

    (*settled).clone()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::rc::Weak;

    struct Scheduled {
        id: u64,
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Timeline {
        now: u64,
        next_id: u64,
        tasks: Vec<Scheduled>,
    }

    /// Virtual clock, tasks only run inside `advance`.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        timeline: Rc<RefCell<Timeline>>,
    }

    pub(crate) struct ManualPending {
        id: u64,
        timeline: Weak<RefCell<Timeline>>,
    }

    impl Drop for ManualPending {
        fn drop(&mut self) {
            if let Some(timeline) = self.timeline.upgrade() {
                timeline.borrow_mut().tasks.retain(|s| s.id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Pending = ManualPending;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualPending {
            let mut timeline = self.timeline.borrow_mut();
            let id = timeline.next_id;
            timeline.next_id += 1;
            let due = timeline.now + u64::from(delay_ms);
            timeline.tasks.push(Scheduled { id, due, task });

            ManualPending {
                id,
                timeline: Rc::downgrade(&self.timeline),
            }
        }
    }

    impl ManualScheduler {
        pub(crate) fn now(&self) -> u64 {
            self.timeline.borrow().now
        }

        pub(crate) fn outstanding(&self) -> usize {
            self.timeline.borrow().tasks.len()
        }

        pub(crate) fn advance(&self, ms: u64) {
            let target = self.now() + ms;

            loop {
                let next = {
                    let mut timeline = self.timeline.borrow_mut();
                    let earliest = timeline
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.due <= target)
                        .min_by_key(|(_, s)| (s.due, s.id))
                        .map(|(i, _)| i);

                    earliest.map(|i| {
                        let scheduled = timeline.tasks.remove(i);
                        timeline.now = scheduled.due;
                        scheduled.task
                    })
                };

                match next {
                    Some(task) => task(),
                    None => break,
                }
            }

            self.timeline.borrow_mut().now = target;
        }
    }

    type Changes<T> = Rc<RefCell<Vec<(u64, T)>>>;

    fn recording<T: Clone + 'static>(
        initial: T,
        delay_ms: i32,
    ) -> (Debouncer<T, ManualScheduler>, ManualScheduler, Changes<T>) {
        let scheduler = ManualScheduler::default();
        let changes: Changes<T> = Rc::default();

        let debouncer = {
            let clock = scheduler.clone();
            let changes = Rc::clone(&changes);
            Debouncer::new(initial, delay_ms, scheduler.clone())
                .on_settle(move |v| changes.borrow_mut().push((clock.now(), v)))
        };

        (debouncer, scheduler, changes)
    }

    #[test]
    fn typing_settles_once_on_the_last_keystroke() {
        let (mut debouncer, clock, changes) = recording(String::new(), 500);

        debouncer.push("a".into());
        clock.advance(100);
        debouncer.push("ab".into());
        clock.advance(100);
        debouncer.push("abc".into());

        clock.advance(499);
        assert!(changes.borrow().is_empty());
        assert_eq!(debouncer.value(), "");
        assert!(debouncer.is_pending());

        clock.advance(1);
        assert_eq!(*changes.borrow(), vec![(700, "abc".to_owned())]);
        assert_eq!(debouncer.value(), "abc");
        assert!(!debouncer.is_pending());

        clock.advance(5_000);
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn burst_of_updates_never_leaks_intermediate_values() {
        let (mut debouncer, clock, changes) = recording(0u32, 250);

        for n in 1..=20 {
            debouncer.push(n);
            clock.advance(249);
        }
        assert!(changes.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*changes.borrow(), vec![(20 * 249 + 1, 20)]);
    }

    #[test]
    fn single_update_fires_after_exactly_the_delay() {
        let (mut debouncer, clock, changes) = recording("initial", 500);

        debouncer.push("value");
        clock.advance(500);

        assert_eq!(*changes.borrow(), vec![(500, "value")]);
    }

    #[test]
    fn non_positive_delay_fires_without_waiting() {
        for delay in [0, -1, i32::MIN] {
            let (mut debouncer, clock, changes) = recording(false, delay);
            assert_eq!(debouncer.delay_ms(), 0);

            debouncer.push(true);
            assert!(changes.borrow().is_empty());

            clock.advance(0);
            assert_eq!(*changes.borrow(), vec![(0, true)]);
        }
    }

    #[test]
    fn only_one_timer_is_outstanding() {
        let (mut debouncer, clock, _changes) = recording(0, 100);

        debouncer.push(1);
        debouncer.push(2);
        debouncer.push(3);

        assert_eq!(clock.outstanding(), 1);
    }

    #[test]
    fn dropping_the_owner_cancels_the_pending_update() {
        let (mut debouncer, clock, changes) = recording("idle", 300);

        debouncer.push("typed");
        drop(debouncer);
        assert_eq!(clock.outstanding(), 0);

        clock.advance(1_000);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn cancel_keeps_the_last_settled_value() {
        let (mut debouncer, clock, changes) = recording(1, 100);

        debouncer.push(2);
        clock.advance(100);
        debouncer.push(3);
        debouncer.cancel();
        clock.advance(1_000);

        assert_eq!(debouncer.value(), 2);
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn new_delay_applies_to_the_next_push() {
        let (mut debouncer, clock, changes) = recording(0, 100);

        debouncer.set_delay(1_000);
        debouncer.push(7);
        clock.advance(999);
        assert!(changes.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*changes.borrow(), vec![(1_000, 7)]);
    }
}
