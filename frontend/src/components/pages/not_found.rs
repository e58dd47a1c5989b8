use crate::components::imports::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div>
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={ Route::Home }>{ "Back to the home page" }</Link<Route>>
        </div>
    }
}
