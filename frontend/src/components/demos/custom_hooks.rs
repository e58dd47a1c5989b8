use crate::components::imports::*;
use crate::components::{ActionButton, ErrorMessage};
use crate::hooks::{use_debounce, use_persisted, UsePersistedHandle};

const RESULTS_PER_SEARCH: usize = 3;

/// Stand-in for a search backend, nothing is searched for an empty term.
pub fn search_results(term: &str) -> Vec<String> {
    if term.is_empty() {
        return Vec::new();
    }

    (1..=RESULTS_PER_SEARCH)
        .map(|n| format!("Result {n} for \"{term}\""))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub name_key: AttrValue,
    pub search_key: AttrValue,
    pub debounce_ms: i32,
}

fn persist_input(
    handle: UsePersistedHandle<String>,
    write_error: UseStateHandle<Option<AttrValue>>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match handle.set(input.value()) {
            Ok(()) => write_error.set(None),
            Err(e) => {
                console::warn!(format!("input not saved: {e}"));
                write_error.set(Some(e.to_string().into()));
            }
        }
    })
}

#[function_component]
pub fn CustomHooksDemo(props: &Props) -> Html {
    let name = use_persisted(props.name_key.clone(), String::new());
    let search = use_persisted(props.search_key.clone(), String::new());
    let debounced = use_debounce(search.value().clone(), props.debounce_ms);
    let write_error = use_state(|| None::<AttrValue>);

    let results = use_memo(|term| search_results(term), debounced.clone());

    let name_oninput = persist_input(name.clone(), write_error.clone());
    let search_oninput = persist_input(search.clone(), write_error.clone());

    let clear = {
        let (name, search, write_error) = (name.clone(), search.clone(), write_error.clone());
        Callback::from(move |_: MouseEvent| {
            match name.clear().and_then(|()| search.clear()) {
                Ok(()) => write_error.set(None),
                Err(e) => {
                    console::warn!(format!("saved values not cleared: {e}"));
                    write_error.set(Some(e.to_string().into()));
                }
            }
        })
    };

    let results = match results.is_empty() {
        true => html! { <p>{ "No results" }</p> },
        false => html! {
            <ul>
                { for results.iter().map(|result| html! { <li>{ result }</li> }) }
            </ul>
        },
    };

    html! {
        <div>
            if let Some(e) = &*write_error {
                <ErrorMessage message={ e.clone() }/>
            }

            <div>
                <h3>{ "Persisted state" }</h3>
                <input type="text" value={ name.value().clone() } oninput={ name_oninput }
                    placeholder="Enter your name"/>
                <p>{ format!("Your name ({}) is saved in local storage. Try refreshing the page!", name.value()) }</p>
            </div>

            <div>
                <h3>{ "Debounced search" }</h3>
                <input type="text" value={ search.value().clone() } oninput={ search_oninput }
                    placeholder="Type to search..."/>
                <p>{ format!("Immediate value: {}", search.value()) }</p>
                <p>{ format!("Debounced value: {debounced}") }</p>
                <h4>{ "Search Results:" }</h4>
                { results }
            </div>

            <ActionButton onclick={ clear }>{ "Clear saved values" }</ActionButton>
        </div>
    }
}
