pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::theme_ctx::{use_theme, ThemeCtx, ThemeCtxSub, WithTheme};
    pub use super::themes::{Palette, Theme};
}
