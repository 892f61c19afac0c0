// library crate for condex
// exposes the engine modules to the binary and to integration tests

pub mod cli;
pub mod conditions;
pub mod escape;
pub mod logger;
pub mod matcher;
pub mod value;

pub use conditions::evaluate;
pub use escape::{escape, unescape};
pub use value::{inspect, lookup, lookup_serialized, uninspect, Value};
