//! Request body validation
//!
//! Bodies are read leniently by [`JsonBody`] and individual fields are
//! checked with the presence validators in [`validators`]. A failed check
//! yields a field-level message; handlers log it and answer with their own
//! BadRequest message.

pub mod extractor;
pub mod validators;

pub use extractor::{JsonBody, PathParam};
