//! GitHub user profile

use crate::date;
use crate::decode::ApiModel;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Public profile of a GitHub user
///
/// `created_date` is optional in type but mandatory on the wire: a missing,
/// null or malformed `created_at` fails the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "login")]
    pub user_name: Option<String>,

    pub bio: Option<String>,

    #[serde(
        rename = "created_at",
        deserialize_with = "deserialize_created_date",
        serialize_with = "date::serialize_optional"
    )]
    pub created_date: Option<DateTime<Utc>>,
}

impl ApiModel for User {}

fn deserialize_created_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    date::parse(&raw)
        .map(Some)
        .map_err(|err| de::Error::custom(format!("created_at: {err}")))
}
