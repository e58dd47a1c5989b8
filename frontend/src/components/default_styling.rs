use crate::components::ctx::ContextError;
use crate::components::imports::*;
use crate::components::ErrorMessage;

pub struct DefaultStyling {
    theme_ctx: Result<ThemeCtxSub, ContextError>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for DefaultStyling {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let palette = match &self.theme_ctx {
            Ok(theme_ctx) => theme_ctx.as_ref().palette(),
            Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
        };

        let bg_color = &palette.bg_color;
        let text_color = &palette.text_color;

        let global_style = css!(
            "
                body {
                    margin: 0;
                    font-family: sans-serif;
                    background-color: ${bg_color};
                    color: ${text_color};
                    transition: all 0.3s ease;
                }

                pre {
                    white-space: pre-wrap;
                    word-break: break-word;
                }
            ",
            bg_color = bg_color,
            text_color = text_color,
        );

        html! {
            <>
                <Global css={global_style}/>
                { for ctx.props().children.iter() }
            </>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match (&mut self.theme_ctx, msg) {
            (Ok(theme_ctx), Self::Message::ThemeContextUpdate(ctx)) => {
                console::log!("WithTheme context updated from DefaultStyling");
                theme_ctx.set(ctx);
                true
            }
            (Err(_), _) => false,
        }
    }
}
