pub mod imports;

mod button;
pub mod ctx;
mod default_styling;
mod demos;
mod error_msg;
mod outcome;
pub mod pages;
mod sidebar;
pub mod theme;

pub use button::ActionButton;
pub use default_styling::DefaultStyling;
pub use error_msg::ErrorMessage;
pub use outcome::{on_click, run_action, run_with_progress, show, Outcome, OutcomePanel};
pub use sidebar::Sidebar;
