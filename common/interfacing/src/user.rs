use crate::imports::*;
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    // suite, zipcode, geo: passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    // phone, website, company: passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
