//! Built-in script tables, constructed once through the validating builder.

mod devanagari;
mod malayalam;

pub use devanagari::table as devanagari;
pub use malayalam::table as malayalam;
