#![warn(clippy::pedantic)]

pub mod document;
pub mod memory;

pub use document::{
    DocumentError, FromJsonError, ProgramDocument, SCHEMA_VERSION, from_json, to_json,
};
pub use memory::Memory;
