use crate::components::ctx::ContextError;
use crate::components::imports::*;
use crate::components::{ActionButton, ErrorMessage};

/// Reads the theme through a context subscription, the way struct
/// components consume it.
pub struct ThemeDemo {
    theme_ctx: Result<ThemeCtxSub, ContextError>,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for ThemeDemo {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Msg::ThemeContextUpdate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match (&mut self.theme_ctx, msg) {
            (Ok(theme_ctx), Msg::ThemeContextUpdate(ctx)) => {
                theme_ctx.set(ctx);
                true
            }
            (Err(_), _) => false,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let theme_ctx = match &self.theme_ctx {
            Ok(theme_ctx) => theme_ctx.as_ref(),
            Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
        };

        let palette = theme_ctx.palette();
        let bg_color = &palette.bg_color;
        let text_color = &palette.text_color;
        let container = css!(
            "
                background-color: ${bg_color};
                color: ${text_color};
                padding: 20px;
                border-radius: 8px;
                transition: all 0.3s ease;
            ",
            bg_color = bg_color,
            text_color = text_color,
        );

        let onclick = {
            let theme_ctx = theme_ctx.clone();
            Callback::from(move |_| theme_ctx.toggle())
        };

        html! {
            <div class={ container }>
                <p>{ format!("Current theme: {}", theme_ctx.theme) }</p>
                <ActionButton {onclick}>{ "Toggle Theme" }</ActionButton>
                <p>{ "This component uses the theme context. Try toggling the theme!" }</p>
            </div>
        }
    }
}
