//! Phonemic romanization of Indic abugida scripts.
//!
//! The engine is a fixed sequence of rewrite passes over a segment buffer,
//! parameterized by a per-script [`ScriptTable`]. Built-in tables for
//! Malayalam and Devanagari live in [`scripts`]; callers can also load
//! their own tables from TOML via [`ScriptTable::from_toml`].

pub mod scripts;
pub(crate) mod segment;
pub mod table;
pub mod translit;
pub mod unicode;

pub use table::{ScriptTable, TableBuilder, TableError};
pub use translit::transliterate;
