use futures::future::try_join_all;
use gloo_console as console;
use gloo_net::http::{Request, Response};
use interfacing::{Comment, GithubUser, NewPost, Post, PostWithComments, User};
use serde::{de::DeserializeOwned, Serialize};

use crate::conf::Conf;

pub mod request {
    pub type SendResult = std::result::Result<gloo_net::http::Response, gloo_net::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Request failed")]
    Request(#[source] gloo_net::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Response could not be parsed")]
    Parse(#[source] gloo_net::Error),

    #[error("Request body could not be encoded")]
    Encode(#[source] gloo_net::Error),
}

pub trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        console::log!(format!("{} status {}", self.url(), self.status()));
    }
}

async fn expect_json<T: DeserializeOwned>(result: request::SendResult) -> Result<T, FetchError> {
    let response = result.map_err(FetchError::Request)?;
    response.log_status();

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response.json::<T>().await.map_err(FetchError::Parse)
}

fn with_json<B: Serialize>(request: Request, body: &B) -> Result<Request, FetchError> {
    request.json(body).map_err(FetchError::Encode)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Client for the public JSON placeholder API.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoApi {
    base: String,
}

impl DemoApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_conf(conf: &Conf) -> Self {
        Self::new(conf.demo_api_base.to_string())
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    pub async fn post(&self, id: u32) -> Result<Post, FetchError> {
        expect_json(Request::get(&self.url(&format!("posts/{id}"))).send().await).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, FetchError> {
        let request = with_json(Request::post(&self.url("posts")), post)?;
        expect_json(request.send().await).await
    }

    pub async fn update_post(&self, id: u32, post: &Post) -> Result<Post, FetchError> {
        let request = with_json(Request::put(&self.url(&format!("posts/{id}"))), post)?;
        expect_json(request.send().await).await
    }

    /// The API answers with an empty object.
    pub async fn delete_post(&self, id: u32) -> Result<serde_json::Value, FetchError> {
        expect_json(
            Request::delete(&self.url(&format!("posts/{id}")))
                .send()
                .await,
        )
        .await
    }

    pub async fn comments(&self, post_id: u32) -> Result<Vec<Comment>, FetchError> {
        expect_json(
            Request::get(&self.url(&format!("posts/{post_id}/comments")))
                .send()
                .await,
        )
        .await
    }

    /// All posts at once, the first failure fails the whole batch.
    pub async fn posts(&self, ids: &[u32]) -> Result<Vec<Post>, FetchError> {
        try_join_all(ids.iter().map(|id| self.post(*id))).await
    }

    /// A post, then the comments of whatever id the first response carried.
    pub async fn post_with_comments(&self, id: u32) -> Result<PostWithComments, FetchError> {
        let post = self.post(id).await?;
        let comments = self.comments(post.id.unwrap_or(id)).await?;
        Ok(PostWithComments { post, comments })
    }

    pub async fn users(&self) -> Result<Vec<User>, FetchError> {
        expect_json(Request::get(&self.url("users")).send().await).await
    }
}

pub async fn github_user(conf: &Conf) -> Result<GithubUser, FetchError> {
    let url = join_url(&conf.github_api_base, &format!("users/{}", conf.github_login));
    expect_json(Request::get(&url).send().await).await
}

/// Indented JSON for display, the way the pages print responses.
pub fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let api = DemoApi::new("https://jsonplaceholder.typicode.com/");

        assert_eq!(api.url("posts/1"), "https://jsonplaceholder.typicode.com/posts/1");
        assert_eq!(
            api.url("/posts/1/comments"),
            "https://jsonplaceholder.typicode.com/posts/1/comments"
        );
    }

    #[test]
    fn status_error_reads_like_a_client_message() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "Request failed with status code 404"
        );
    }

    #[test]
    fn wrapped_errors_leave_the_cause_to_source() {
        use std::error::Error;

        let error = FetchError::Parse(gloo_net::Error::GlooError("unexpected token".into()));

        assert_eq!(error.to_string(), "Response could not be parsed");
        let cause = error.source().map(|cause| cause.to_string());
        assert!(cause.unwrap_or_default().contains("unexpected token"));
    }

    #[test]
    fn pretty_prints_two_space_indented_json() {
        let post = NewPost {
            title: "qui est esse".into(),
            body: "est rerum".into(),
            user_id: 1,
        };

        assert_eq!(
            pretty(&post),
            "{\n  \"title\": \"qui est esse\",\n  \"body\": \"est rerum\",\n  \"userId\": 1\n}"
        );
    }
}
