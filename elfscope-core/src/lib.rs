pub mod error;
pub mod header;
pub mod layout;
pub mod reader;
pub mod sections;
pub mod symbols;

pub use error::*;
pub use header::*;
pub use sections::*;
pub use symbols::*;
