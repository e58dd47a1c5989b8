use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::imports::*;
use crate::components::ErrorMessage;
use crate::hooks::RequestScope;

/// What a demo page shows below its buttons.
///
/// Starting a new action clears the error but keeps the previous result on
/// screen until the new one arrives. Only the latest started action may
/// report, anything an older one sends afterwards is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub loading: bool,
    pub error: Option<AttrValue>,
    pub result: AttrValue,
    generation: u64,
}

/// Every action variant names the run it belongs to.
pub enum OutcomeAction {
    Started(u64),
    Progressed(u64, AttrValue),
    Succeeded(u64, AttrValue),
    Failed(u64, AttrValue),
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Tag for a new run, never 0 so it never matches an idle outcome.
pub fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

impl Default for Outcome {
    fn default() -> Self {
        Self::idle("")
    }
}

impl Outcome {
    pub fn idle(result: impl Into<AttrValue>) -> Self {
        Self {
            loading: false,
            error: None,
            result: result.into(),
            generation: 0,
        }
    }
}

impl Reducible for Outcome {
    type Action = OutcomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            OutcomeAction::Started(generation) => Outcome {
                loading: true,
                error: None,
                result: self.result.clone(),
                generation,
            },
            OutcomeAction::Progressed(generation, _)
            | OutcomeAction::Succeeded(generation, _)
            | OutcomeAction::Failed(generation, _)
                if generation != self.generation =>
            {
                return self;
            }
            OutcomeAction::Progressed(generation, partial) => Outcome {
                loading: true,
                error: None,
                result: partial,
                generation,
            },
            OutcomeAction::Succeeded(generation, result) => Outcome {
                loading: false,
                error: None,
                result,
                generation,
            },
            OutcomeAction::Failed(generation, error) => Outcome {
                loading: false,
                error: Some(error),
                result: self.result.clone(),
                generation,
            },
        };
        next.into()
    }
}

/// Reports intermediate results of a running action.
pub type Progress = Box<dyn Fn(String)>;

/// Runs `action` inside `scope`, reflecting its progress in `outcome`.
pub fn run_action<Fut, E>(outcome: UseReducerDispatcher<Outcome>, scope: &RequestScope, action: Fut)
where
    Fut: Future<Output = Result<String, E>> + 'static,
    E: Display + 'static,
{
    run_with_progress(outcome, scope, |_| action)
}

/// Like [`run_action`], the action also gets a [`Progress`] reporter.
pub fn run_with_progress<A, Fut, E>(
    outcome: UseReducerDispatcher<Outcome>,
    scope: &RequestScope,
    action: A,
) where
    A: FnOnce(Progress) -> Fut,
    Fut: Future<Output = Result<String, E>> + 'static,
    E: Display + 'static,
{
    let generation = next_generation();
    outcome.dispatch(OutcomeAction::Started(generation));

    let progress: Progress = {
        let outcome = outcome.clone();
        Box::new(move |partial| {
            outcome.dispatch(OutcomeAction::Progressed(generation, partial.into()))
        })
    };
    let action = action(progress);

    scope.spawn(async move {
        match action.await {
            Ok(result) => outcome.dispatch(OutcomeAction::Succeeded(generation, result.into())),
            Err(e) => {
                console::error!(format!("action failed: {e}"));
                outcome.dispatch(OutcomeAction::Failed(generation, e.to_string().into()));
            }
        }
    });
}

/// Shows a result computed on the spot, superseding any running action.
pub fn show(outcome: &UseReducerDispatcher<Outcome>, result: impl Into<AttrValue>) {
    let generation = next_generation();
    outcome.dispatch(OutcomeAction::Started(generation));
    outcome.dispatch(OutcomeAction::Succeeded(generation, result.into()));
}

/// Click handler that starts an action against the page's outcome.
pub fn on_click<F>(
    outcome: &UseReducerHandle<Outcome>,
    scope: &RequestScope,
    start: F,
) -> Callback<MouseEvent>
where
    F: Fn(UseReducerDispatcher<Outcome>, &RequestScope) + 'static,
{
    let dispatcher = outcome.dispatcher();
    let scope = scope.clone();
    Callback::from(move |_| start(dispatcher.clone(), &scope))
}

#[derive(Properties, PartialEq)]
pub struct OutcomePanelProps {
    pub outcome: Outcome,
}

#[styled_component]
pub fn OutcomePanel(props: &OutcomePanelProps) -> Html {
    let Outcome {
        loading,
        error,
        result,
        ..
    } = &props.outcome;

    let panel = css!(
        "
            margin-top: 1em;
            padding: 1em;
            border-radius: 8px;
            border: 1px solid currentColor;
            overflow-x: auto;
        "
    );

    html! {
        <div>
            if *loading {
                <p>{ "Loading..." }</p>
            }
            if let Some(error) = error {
                <ErrorMessage message={ error.clone() }/>
            }
            if !result.is_empty() {
                <pre class={ panel }>{ result.clone() }</pre>
            }
        </div>
    }
}
