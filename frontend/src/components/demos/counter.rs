use crate::components::imports::*;
use crate::components::ActionButton;

#[function_component]
pub fn Counter() -> Html {
    let count = use_state(|| 0_i64);
    let text = use_state(String::new);

    let increment = {
        let count = count.clone();
        Callback::from(move |_| count.set(*count + 1))
    };
    let decrement = {
        let count = count.clone();
        Callback::from(move |_| count.set(*count - 1))
    };
    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    html! {
        <div>
            <p>{ format!("Count: {}", *count) }</p>
            <ActionButton onclick={ increment }>{ "Increment" }</ActionButton>
            <ActionButton onclick={ decrement }>{ "Decrement" }</ActionButton>

            <div>
                <input type="text" value={ (*text).clone() } {oninput} placeholder="Type something..."/>
                <p>{ format!("You typed: {}", *text) }</p>
            </div>
        </div>
    }
}
