use std::convert::Infallible;

use crate::components::imports::*;
use crate::components::{
    on_click, run_action, run_with_progress, ActionButton, Outcome, OutcomePanel,
};
use crate::hooks::use_request_scope;
use crate::promises::{self, OperationFailed, SIMULATED_DELAY_MS};

const IDLE_TEXT: &str = "Click any button to see Promise examples in action!";

fn succeed() -> impl std::future::Future<Output = Result<String, OperationFailed>> {
    promises::simulate(true, SIMULATED_DELAY_MS)
}

#[function_component]
pub fn PromisesPage() -> Html {
    let outcome = use_reducer(|| Outcome::idle(IDLE_TEXT));
    let scope = use_request_scope();

    let basic = on_click(&outcome, &scope, |outcome, scope| {
        run_action(outcome, scope, promises::simulate(false, SIMULATED_DELAY_MS))
    });

    let chain = on_click(&outcome, &scope, |outcome, scope| {
        run_with_progress(outcome, scope, |progress| promises::chain(succeed, progress))
    });

    let all = on_click(&outcome, &scope, |outcome, scope| {
        run_action(outcome, scope, promises::all(succeed, 3))
    });

    let sequential = on_click(&outcome, &scope, |outcome, scope| {
        run_with_progress(outcome, scope, |progress| {
            promises::sequential(succeed, progress)
        })
    });

    let race = on_click(&outcome, &scope, |outcome, scope| {
        let race = promises::race(
            promises::delayed("Fast operation (1s)", 1_000),
            promises::delayed("Slow operation (3s)", 3_000),
        );
        run_action(outcome, scope, async move { Ok::<_, Infallible>(race.await) })
    });

    html! {
        <div>
            <h1>{ "Promises and Futures" }</h1>

            <section>
                <h2>{ "What are futures?" }</h2>
                <p>
                    { "A future is a value that is not ready yet. It either resolves with a " }
                    { "result or fails with an error, and can be chained, joined or raced " }
                    { "with other futures." }
                </p>
            </section>

            <section>
                <h2>{ "Interactive Examples" }</h2>
                <ActionButton onclick={ basic } disabled={ outcome.loading }>{ "Basic future (with error)" }</ActionButton>
                <ActionButton onclick={ chain } disabled={ outcome.loading }>{ "Chaining" }</ActionButton>
                <ActionButton onclick={ all } disabled={ outcome.loading }>{ "Join all" }</ActionButton>
                <ActionButton onclick={ sequential } disabled={ outcome.loading }>{ "Async/Await" }</ActionButton>
                <ActionButton onclick={ race } disabled={ outcome.loading }>{ "Race" }</ActionButton>

                <OutcomePanel outcome={ (*outcome).clone() }/>
            </section>
        </div>
    }
}
