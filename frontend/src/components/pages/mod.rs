mod array_methods;
mod home;
mod hooks;
mod http_client;
mod not_found;
mod promises;

pub use array_methods::ArrayMethodsPage;
pub use home::HomePage;
pub use hooks::HooksPage;
pub use http_client::HttpClientPage;
pub use not_found::NotFoundPage;
pub use promises::PromisesPage;
