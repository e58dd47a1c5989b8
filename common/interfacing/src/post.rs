use crate::imports::*;
use crate::Comment;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

// Body of a create request, the API assigns the id
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl NewPost {
    pub fn with_id(self, id: u32) -> Post {
        Post {
            id: Some(id),
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}
