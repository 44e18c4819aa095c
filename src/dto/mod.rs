//! DTO modules that bridge list views with templates and terminals.

#[cfg(feature = "server")]
pub mod list;
pub mod table;
