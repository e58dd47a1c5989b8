pub use crate::components::theme::prelude::*;
pub use crate::conf::{use_conf, Conf};
pub use crate::router::Route;

pub use gloo_console as console;
pub use serde::{Deserialize, Serialize};
pub use stylist::yew::{styled_component, Global};
pub use web_sys::HtmlInputElement;

pub use stylist::css;
pub use yew::prelude::*;
pub use yew_router::prelude::*;
