use std::rc::Rc;

use interfacing::User;

use crate::api::{pretty, DemoApi};
use crate::array_methods::{
    cities_starting_with, city_counts, contacts_in_cities_containing,
    first_with_email_containing, summaries,
};
use crate::components::imports::*;
use crate::components::{show as show_outcome, ActionButton, ErrorMessage, Outcome, OutcomePanel};
use crate::hooks::use_request_scope;

#[derive(Clone, PartialEq)]
enum Users {
    Loading,
    Loaded(Rc<Vec<User>>),
    Failed(AttrValue),
}

#[function_component]
pub fn ArrayMethodsPage() -> Html {
    match use_conf() {
        Ok(conf) => html! {
            <div>
                <h1>{ "Iterator Methods" }</h1>
                <p>
                    { "The classic array methods map, filter, find and reduce, " }
                    { "applied to users fetched from the demo API." }
                </p>
                <Examples api={ DemoApi::from_conf(&conf) }/>
            </div>
        },
        Err(e) => html! { <ErrorMessage message={ e.to_string() }/> },
    }
}

#[derive(Properties, PartialEq)]
struct ExamplesProps {
    api: DemoApi,
}

fn show<F>(outcome: &UseReducerHandle<Outcome>, users: &Rc<Vec<User>>, f: F) -> Callback<MouseEvent>
where
    F: Fn(&[User]) -> String + 'static,
{
    let dispatcher = outcome.dispatcher();
    let users = Rc::clone(users);
    Callback::from(move |_| show_outcome(&dispatcher, f(&users)))
}

#[function_component]
fn Examples(props: &ExamplesProps) -> Html {
    let users = use_state(|| Users::Loading);
    let outcome = use_reducer(Outcome::default);
    let scope = use_request_scope();

    {
        let users = users.clone();
        use_effect_with_deps(
            move |api: &DemoApi| {
                let api = api.clone();
                scope.spawn(async move {
                    match api.users().await {
                        Ok(loaded) => {
                            console::log!(format!("loaded {} users", loaded.len()));
                            users.set(Users::Loaded(Rc::new(loaded)));
                        }
                        Err(e) => {
                            console::error!(format!("users: {e}"));
                            users.set(Users::Failed(e.to_string().into()));
                        }
                    }
                });
                || ()
            },
            props.api.clone(),
        );
    }

    let buttons = match &*users {
        Users::Loading => html! { <p>{ "Loading users data..." }</p> },
        Users::Failed(e) => html! { <ErrorMessage message={ e.clone() }/> },
        Users::Loaded(loaded) => {
            let map = show(&outcome, loaded, |users| pretty(&summaries(users)));
            let filter = show(&outcome, loaded, |users| {
                pretty(&cities_starting_with(users, 's'))
            });
            let find = show(&outcome, loaded, |users| {
                pretty(&first_with_email_containing(users, ".biz"))
            });
            let chaining = show(&outcome, loaded, |users| {
                pretty(&contacts_in_cities_containing(users, 's'))
            });
            let reduce = show(&outcome, loaded, |users| pretty(&city_counts(users)));

            html! {
                <div>
                    <ActionButton onclick={ map }>{ "map() Example" }</ActionButton>
                    <ActionButton onclick={ filter }>{ "filter() Example" }</ActionButton>
                    <ActionButton onclick={ find }>{ "find() Example" }</ActionButton>
                    <ActionButton onclick={ chaining }>{ "Method Chaining" }</ActionButton>
                    <ActionButton onclick={ reduce }>{ "reduce() Example" }</ActionButton>
                </div>
            }
        }
    };

    html! {
        <section>
            <h2>{ "Interactive Examples with Real Data" }</h2>
            { buttons }
            <OutcomePanel outcome={ (*outcome).clone() }/>
        </section>
    }
}
