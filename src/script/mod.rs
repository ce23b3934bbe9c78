//! Schema script builder (verb module)
//!
//! Turns a schema document plus a schema action into the ordered list of
//! statements to execute.

mod action;
mod build;

pub use action::{ParseSchemaActionError, SchemaAction};
pub use build::{build_script, plan_statements};
