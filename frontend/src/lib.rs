pub mod api;
pub mod app;
pub mod array_methods;
pub mod components;
pub mod conf;
pub mod hooks;
pub mod promises;
pub mod router;
pub mod switch;
