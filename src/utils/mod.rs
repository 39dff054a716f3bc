//! Request extractors shared by the HTTP handlers.

pub mod path;
pub mod validate;
