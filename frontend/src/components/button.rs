use crate::components::imports::*;
use crate::components::ErrorMessage;

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component]
pub fn ActionButton(props: &ActionButtonProps) -> Html {
    let palette = match use_theme() {
        Ok(theme) => theme.palette(),
        Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
    };

    let button_bg_color = &palette.button_bg_color;
    let button_text_color = &palette.button_text_color;

    let style = css!(
        "
            background-color: ${button_bg_color};
            color: ${button_text_color};
            padding: 10px 20px;
            margin: 0 0.5em 0.5em 0;
            border: none;
            border-radius: 4px;
            cursor: pointer;

            :disabled {
                opacity: 0.5;
                cursor: default;
            }
        ",
        button_bg_color = button_bg_color,
        button_text_color = button_text_color,
    );

    html! {
        <button class={ style } onclick={ props.onclick.clone() } disabled={ props.disabled }>
            { for props.children.iter() }
        </button>
    }
}
