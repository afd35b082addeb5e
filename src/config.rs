//! Player settings: the schema and how it is read from a TOML file and the
//! environment.

mod load;
mod schema;

pub use schema::*;
