use interfacing::{NewPost, Post};

use crate::api::{pretty, DemoApi};
use crate::components::imports::*;
use crate::components::{on_click, run_action, ActionButton, ErrorMessage, Outcome, OutcomePanel};
use crate::hooks::use_request_scope;

const POST_ID: u32 = 1;

fn new_post() -> NewPost {
    NewPost {
        title: "New Post Title".into(),
        body: "This is the content of the new post".into(),
        user_id: 1,
    }
}

fn updated_post() -> Post {
    NewPost {
        title: "Updated Post Title".into(),
        body: "This is the updated content of the post".into(),
        user_id: 1,
    }
    .with_id(POST_ID)
}

#[function_component]
pub fn HttpClientPage() -> Html {
    match use_conf() {
        Ok(conf) => html! {
            <div>
                <h1>{ "HTTP Requests with Future Handling" }</h1>
                <Requests api={ DemoApi::from_conf(&conf) }/>
            </div>
        },
        Err(e) => html! { <ErrorMessage message={ e.to_string() }/> },
    }
}

#[derive(Properties, PartialEq)]
struct RequestsProps {
    api: DemoApi,
}

#[function_component]
fn Requests(props: &RequestsProps) -> Html {
    let outcome = use_reducer(Outcome::default);
    let scope = use_request_scope();

    let get = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.post(POST_ID).await.map(|post| pretty(&post))
            })
        })
    };

    let create = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.create_post(&new_post()).await.map(|post| pretty(&post))
            })
        })
    };

    let update = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.update_post(POST_ID, &updated_post())
                    .await
                    .map(|post| pretty(&post))
            })
        })
    };

    let delete = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.delete_post(POST_ID)
                    .await
                    .map(|body| format!("Post deleted successfully!\n{}", pretty(&body)))
            })
        })
    };

    let multiple = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.posts(&[1, 2, 3]).await.map(|posts| pretty(&posts))
            })
        })
    };

    let sequential = {
        let api = props.api.clone();
        on_click(&outcome, &scope, move |outcome, scope| {
            let api = api.clone();
            run_action(outcome, scope, async move {
                api.post_with_comments(POST_ID)
                    .await
                    .map(|post| pretty(&post))
            })
        })
    };

    html! {
        <section>
            <h2>{ "REST API Examples" }</h2>
            <ActionButton onclick={ get } disabled={ outcome.loading }>{ "GET Request" }</ActionButton>
            <ActionButton onclick={ create } disabled={ outcome.loading }>{ "POST Request" }</ActionButton>
            <ActionButton onclick={ update } disabled={ outcome.loading }>{ "PUT Request" }</ActionButton>
            <ActionButton onclick={ delete } disabled={ outcome.loading }>{ "DELETE Request" }</ActionButton>
            <ActionButton onclick={ multiple } disabled={ outcome.loading }>{ "Multiple Requests" }</ActionButton>
            <ActionButton onclick={ sequential } disabled={ outcome.loading }>{ "Async/Await" }</ActionButton>

            <OutcomePanel outcome={ (*outcome).clone() }/>
        </section>
    }
}
