//! Decoder types and traits

use serde::de::DeserializeOwned;

/// How object keys in a response are matched to model attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    /// Keys are used as-is; models remap each field explicitly
    #[default]
    Explicit,
    /// snake_case keys are rewritten to camelCase before decoding
    ConvertFromSnakeCase,
}

/// A type that can be fetched and decoded from the API
///
/// Arrays of a model decode element by element with the element's strategy,
/// failing on the first element that does not decode.
pub trait ApiModel: DeserializeOwned + Send + 'static {
    /// Key strategy used for this model
    const KEY_STRATEGY: KeyStrategy = KeyStrategy::Explicit;
}

impl<T: ApiModel> ApiModel for Vec<T> {
    const KEY_STRATEGY: KeyStrategy = T::KEY_STRATEGY;
}
