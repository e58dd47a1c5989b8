use std::rc::Rc;

use super::themes::{Palette, Theme};
use crate::components::ctx::{require_ctx, ContextError};
use crate::components::imports::*;
use crate::hooks::{default_store, KeyValueStore, PersistedValue};

/// What a theme consumer receives: the current theme and the way to flip it.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeCtx {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

impl ThemeCtx {
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn toggle(&self) {
        self.on_toggle.emit(());
    }
}

/// Theme for function components. Fails outside of [`WithTheme`].
#[hook]
pub fn use_theme() -> Result<ThemeCtx, ContextError> {
    require_ctx(use_context::<ThemeCtx>(), "use_theme", "WithTheme")
}

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after a toggle
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeCtx> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeCtx {
        &self.ctx
    }
}

impl ThemeCtxSub {
    /// Theme for struct components, `f` maps every change into a message.
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Result<Self, ContextError>
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = require_ctx(
            ctx.link().context(ctx.link().callback(f)),
            std::any::type_name::<COMP>(),
            "WithTheme",
        )?;

        Ok(Self { ctx, _ctx_handle })
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }
}

type RememberedTheme = PersistedValue<Theme, Rc<dyn KeyValueStore>>;

fn remember_theme(store: Rc<dyn KeyValueStore>, key: &str, initial: Theme) -> RememberedTheme {
    let remembered = PersistedValue::load(store, key, initial);
    if let Some(e) = remembered.load_error() {
        console::warn!(format!("stored theme ignored: {e}"));
    }
    remembered
}

pub struct WithTheme {
    theme: Theme,
    on_toggle: Callback<()>,
    remembered: Option<RememberedTheme>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub initial: Theme,
    /// Keep the choice in local storage across reloads.
    #[prop_or_default]
    pub remember: bool,
    #[prop_or(AttrValue::Static(Theme::STORAGE_KEY))]
    pub storage_key: AttrValue,
}

pub enum Msg {
    Toggle,
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let initial = ctx.props().initial;
        let remember = ctx.props().remember;

        let remembered = remember
            .then(|| remember_theme(default_store(), &ctx.props().storage_key, initial));

        let theme = remembered
            .as_ref()
            .map(|remembered| *remembered.get())
            .unwrap_or(initial);

        Self {
            theme,
            on_toggle: ctx.link().callback(|_| Msg::Toggle),
            remembered,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme_ctx = ThemeCtx {
            theme: self.theme,
            on_toggle: self.on_toggle.clone(),
        };

        html! {
            <ContextProvider<ThemeCtx> context={ theme_ctx }>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::Toggle => {
                self.theme = self.theme.toggle();
                console::log!(format!("theme toggled to {}", self.theme));

                if let Some(remembered) = self.remembered.as_mut() {
                    if let Err(e) = remembered.set(self.theme) {
                        console::warn!(format!("failed to remember theme: {e}"));
                    }
                }
                true
            }
        }
    }
}
