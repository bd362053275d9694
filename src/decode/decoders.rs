//! Decoder implementations

use super::types::{ApiModel, KeyStrategy};
use crate::error::Result;
use serde_json::{Map, Value};
use tracing::debug;

/// Decode a response body into `M` using the model's key strategy
pub fn decode_model<M: ApiModel>(body: &[u8]) -> Result<M> {
    debug!(
        model = std::any::type_name::<M>(),
        strategy = ?M::KEY_STRATEGY,
        bytes = body.len(),
        "Decoding response body"
    );

    let model = match M::KEY_STRATEGY {
        KeyStrategy::Explicit => serde_json::from_slice(body)?,
        KeyStrategy::ConvertFromSnakeCase => {
            let value: Value = serde_json::from_slice(body)?;
            serde_json::from_value(convert_keys_from_snake_case(value))?
        }
    };
    Ok(model)
}

/// Rewrite every object key in `value` from snake_case to camelCase
pub fn convert_keys_from_snake_case(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (snake_to_camel(&key), convert_keys_from_snake_case(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(convert_keys_from_snake_case).collect())
        }
        other => other,
    }
}

/// Convert one snake_case key to camelCase
///
/// Leading and trailing underscores are kept. The first word is unchanged and
/// each later word is capitalized with the rest lowercased, so `avatar_url`
/// becomes `avatarUrl` and `html_URL` becomes `htmlUrl`.
pub fn snake_to_camel(key: &str) -> String {
    let core = key.trim_matches('_');
    if core.is_empty() || !core.contains('_') {
        return key.to_string();
    }

    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut words = core.split('_').filter(|word| !word.is_empty());
    let mut converted = String::with_capacity(key.len());
    converted.push_str(&key[..leading]);
    if let Some(first) = words.next() {
        converted.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            converted.extend(head.to_uppercase());
            converted.push_str(&chars.as_str().to_lowercase());
        }
    }
    converted.push_str(&key[key.len() - trailing..]);
    converted
}
