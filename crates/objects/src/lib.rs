//! Plain object helpers: a rectangle factory and JSON round trips driven by
//! positional constructors.

#![forbid(unsafe_code)]

pub mod json;
mod shapes;

pub use json::{Arguments, Constructor, from_json, to_json};
pub use shapes::{Circle, Rectangle};
