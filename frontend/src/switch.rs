use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::pages::*;

    match routes {
        Route::NotFound => html! { <NotFoundPage/> },
        Route::Home => html! { <HomePage/> },
        Route::Hooks => html! {
            <HooksPage on_title={ Callback::from(crate::hooks::set_document_title) }/>
        },
        Route::Promises => html! { <PromisesPage/> },
        Route::HttpClient => html! { <HttpClientPage/> },
        Route::ArrayMethods => html! { <ArrayMethodsPage/> },
    }
}
