use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Identifiers of the user-facing business messages.
///
/// Serialized as `ME001`..`ME004`; clients look the wording up by id.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageId {
    /// Aggregate price for the item name has reached the group limit
    Me001,
    /// Search matched more rows than may be returned
    Me002,
    /// Search matched nothing
    Me003,
    /// An item with the same id already exists
    Me004,
}

impl MessageId {
    pub fn message(&self) -> &'static str {
        match self {
            MessageId::Me001 => {
                "The total price of items with this name has reached the limit for the group"
            }
            MessageId::Me002 => "Too many items match; narrow the search conditions",
            MessageId::Me003 => "No items match the search conditions",
            MessageId::Me004 => "An item with this id is already registered",
        }
    }
}
