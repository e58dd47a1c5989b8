use crate::imports::*;

// Only the fields the profile card shows, the API returns many more
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl GithubUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}
