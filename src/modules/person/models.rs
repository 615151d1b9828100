use chrono::NaiveDate;
use erudio_http::hateoas::Link;
use serde::{Deserialize, Serialize};

/// Row of the `person` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Wire representation of a person. The key travels as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "person")]
pub struct PersonVo {
    #[serde(rename = "id", default)]
    pub key: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Second-version person payload carrying a birth day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "person")]
pub struct PersonVoV2 {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub birth_day: Option<NaiveDate>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: String,
}
