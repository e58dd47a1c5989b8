mod imports;

mod comment;
mod github_user;
mod post;
mod user;

pub use comment::Comment;
pub use github_user::GithubUser;
pub use post::{NewPost, Post, PostWithComments};
pub use user::{Address, User};
