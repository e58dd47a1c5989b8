mod counter;
mod custom_hooks;
mod effects;
mod theme_demo;

pub use counter::Counter;
pub use custom_hooks::CustomHooksDemo;
pub use effects::EffectsDemo;
pub use theme_demo::ThemeDemo;
