//! Inventory records rendered by the list views.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::types::TypeConstraintError;

pub mod asset;
pub mod category;
pub mod location;
pub mod maintenance;
pub mod page;
pub mod types;

/// A record type served by one list endpoint of the inventory API.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier used to address a single record.
    type Id: Copy
        + Eq
        + Debug
        + Display
        + TryFrom<i64, Error = TypeConstraintError>
        + FromStr<Err = TypeConstraintError>
        + Send
        + Sync
        + 'static;

    /// Path segment of the collection, e.g. `assets`.
    const PATH: &'static str;
    /// Plural display name used as the page title.
    const TITLE: &'static str;
    /// Singular display name used in notifications.
    const SINGULAR: &'static str;

    fn id(&self) -> Self::Id;
}
