//! Response decoding
//!
//! Two key strategies are supported, chosen per model type:
//!
//! - **Explicit** (default): field names are remapped one by one with serde
//!   attributes, and custom field decoders (such as the `created_at` date) run.
//! - **ConvertFromSnakeCase**: every object key is rewritten from snake_case
//!   to camelCase before the model sees it, so a model declared with
//!   `#[serde(rename_all = "camelCase")]` matches without per-field renames.
//!
//! A model declares exactly one strategy through [`ApiModel::KEY_STRATEGY`].

mod decoders;
mod types;

pub use decoders::{convert_keys_from_snake_case, decode_model, snake_to_camel};
pub use types::{ApiModel, KeyStrategy};
