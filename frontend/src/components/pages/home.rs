use crate::components::imports::*;

#[styled_component]
pub fn HomePage() -> Html {
    let card = css!(
        "
            padding: 1.5em;
            margin-bottom: 1em;
            border: 1px solid currentColor;
            border-radius: 8px;
            max-width: 56em;

            a {
                color: inherit;
            }
        "
    );

    let links = Route::NAVIGATION
        .iter()
        .filter(|(route, _)| *route != Route::Home)
        .map(|(route, label)| {
            html! {
                <li key={ route.to_path() }>
                    <Link<Route> to={ *route }>{ *label }</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div>
            <h1>{ "Welcome to the Hooks Showcase" }</h1>

            <div class={ card.clone() }>
                <h2>{ "Getting Started" }</h2>
                <p>
                    { "Interactive examples of front-end patterns written with Yew. " }
                    { "Use the sidebar to explore state, effects, context, futures, " }
                    { "HTTP requests and iterator methods." }
                </p>
            </div>

            <div class={ card }>
                <h2>{ "Quick Links" }</h2>
                <ul>{ links }</ul>
            </div>
        </div>
    }
}
