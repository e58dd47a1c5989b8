use crate::components::imports::*;
use crate::components::ErrorMessage;

#[styled_component]
pub fn Sidebar() -> Html {
    let current = use_route::<Route>();
    let palette = match use_theme() {
        Ok(theme) => theme.palette(),
        Err(e) => return html! { <ErrorMessage message={ e.to_string() }/> },
    };

    let border_color = &palette.box_border_color;
    let active_bg = &palette.contrast_bg_color;

    let nav = css!(
        "
            width: 220px;
            padding: 2em 1em;
            border-right: 1px solid ${border_color};

            ul {
                list-style: none;
                padding: 0;
                margin: 0;
            }

            a {
                display: block;
                padding: 0.6em 1em;
                border-radius: 6px;
                color: inherit;
                text-decoration: none;
            }

            a.active {
                font-weight: bold;
                background-color: ${active_bg};
            }
        ",
        border_color = border_color,
        active_bg = active_bg,
    );

    let items = Route::NAVIGATION
        .iter()
        .map(|(route, label)| {
            let classes = classes!((current == Some(*route)).then_some("active"));
            html! {
                <li key={ route.to_path() }>
                    <Link<Route> to={ *route } {classes}>{ *label }</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={ nav }>
            <ul>{ items }</ul>
        </nav>
    }
}
