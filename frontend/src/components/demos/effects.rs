use gloo_events::EventListener;

use crate::api;
use crate::components::imports::*;
use crate::components::{ActionButton, ErrorMessage};
use crate::hooks::{use_request_scope, TitleSync};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub conf: Conf,
    /// Receives the page title whenever the count changes.
    pub on_title: Callback<AttrValue>,
}

#[derive(Clone, PartialEq)]
enum GithubName {
    Loading,
    Loaded(AttrValue),
    Failed(AttrValue),
}

fn window_width() -> u32 {
    gloo_utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default() as u32
}

#[function_component]
pub fn EffectsDemo(props: &Props) -> Html {
    let width = use_state_eq(window_width);
    let count = use_state(|| 0_u32);
    let github_name = use_state(|| GithubName::Loading);
    let scope = use_request_scope();
    let title = {
        let on_title = props.on_title.clone();
        use_mut_ref(move || TitleSync::new(on_title))
    };

    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                console::log!("EffectsDemo mounted");
                let listener = EventListener::new(&gloo_utils::window(), "resize", move |_| {
                    width.set(window_width())
                });

                move || {
                    drop(listener);
                    console::log!("EffectsDemo unmounted");
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |count| {
            title.borrow_mut().sync(format!("Count is {count}").into());
            || ()
        },
        *count,
    );

    {
        let github_name = github_name.clone();
        use_effect_with_deps(
            move |conf: &Conf| {
                let conf = conf.clone();
                scope.spawn(async move {
                    match api::github_user(&conf).await {
                        Ok(user) => github_name.set(GithubName::Loaded(
                            user.display_name().to_owned().into(),
                        )),
                        Err(e) => {
                            console::error!(format!("github user: {e}"));
                            github_name.set(GithubName::Failed(e.to_string().into()));
                        }
                    }
                });
                || ()
            },
            props.conf.clone(),
        );
    }

    let increment = {
        let count = count.clone();
        Callback::from(move |_| count.set(*count + 1))
    };

    let github = match &*github_name {
        GithubName::Loading => html! { <p>{ "GitHub User Data: Loading..." }</p> },
        GithubName::Loaded(name) => html! { <p>{ format!("GitHub User Data: {name}") }</p> },
        GithubName::Failed(e) => html! { <ErrorMessage message={ e.clone() }/> },
    };

    html! {
        <div>
            <div>
                <p>{ format!("Window width: {}px", *width) }</p>
                <p>{ "Try resizing your window!" }</p>
            </div>

            <div>
                <p>{ format!("Count: {}", *count) }</p>
                <ActionButton onclick={ increment }>{ "Increment (Check the page title!)" }</ActionButton>
            </div>

            { github }
        </div>
    }
}
