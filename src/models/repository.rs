//! GitHub repositories

use super::User;
use crate::decode::{ApiModel, KeyStrategy};
use serde::{Deserialize, Serialize};

/// A repository with explicit field remapping
///
/// `owner` decodes as a full [`User`], so an owner object without a valid
/// `created_at` fails the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: Option<String>,
    pub owner: Option<User>,
}

impl ApiModel for Repository {}

/// A repository decoded through the snake_case key transform
///
/// Attributes are declared in camelCase and matched against the rewritten
/// keys, so `full_name` on the wire arrives as `fullName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeCaseRepository {
    pub full_name: Option<String>,
}

impl ApiModel for SnakeCaseRepository {
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::ConvertFromSnakeCase;
}
