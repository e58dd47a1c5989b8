use super::theme_ctx::{ThemeCtx, ThemeCtxSub};
use crate::components::ctx::ContextError;
use crate::components::imports::*;
use crate::components::ErrorMessage;

// Circle in the right corner with absolute position
pub struct ThemeToggle {
    theme_ctx: Result<ThemeCtxSub, ContextError>,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme_ctx = match &self.theme_ctx {
            Ok(theme_ctx) => theme_ctx.as_ref(),
            Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
        };

        let onclick = ctx.link().callback(move |_| Self::Message::ToggleTheme);

        let palette = theme_ctx.palette();
        let toggle_border_color = &palette.box_border_color;
        let toggle_fill_color = &palette.text_color;
        let toggle_style = css!(
            "
                user-select: none;
                position: absolute; right: 15px; top: 15px;
                outline: 5px solid ${toggle_border_color};
                background-color: ${toggle_fill_color};
                height: 2em; width: 2em;
                border-radius: 100%;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            ",
            toggle_border_color = toggle_border_color,
            toggle_fill_color = toggle_fill_color,
        );

        html! {
            <div {onclick} class={ toggle_style } title={ format!("Switch to {} theme", theme_ctx.theme.toggle()) }/>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match (&mut self.theme_ctx, msg) {
            (Ok(theme_ctx), Self::Message::ThemeContextUpdate(ctx)) => {
                theme_ctx.set(ctx);
                true
            }
            (Ok(theme_ctx), Self::Message::ToggleTheme) => {
                theme_ctx.as_ref().toggle();
                false
            }
            (Err(_), _) => false,
        }
    }
}
