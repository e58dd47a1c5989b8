use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub message: AttrValue,
}

#[styled_component]
pub fn ErrorMessage(props: &ErrorProps) -> Html {
    let message = &props.message;

    let css = css! {"
        color: rgb(248 83 20);
    "};

    html! {<p class={css}>{ "Error: " }{ message }</p>}
}
