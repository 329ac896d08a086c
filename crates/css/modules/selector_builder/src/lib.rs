//! Selectors Level 3: building selector strings from ordered calls.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This module implements:
//! - Compound selectors built part by part, with grammar ordering checked at call time
//!   (element, id, class, attribute, pseudo-class, pseudo-element)
//! - At most one element, id and pseudo-element per compound
//! - Combined selectors joined by any combinator token
//! - Specificity calculation
//!
//! Builders are values: every call consumes the selector and returns a new one.

#![forbid(unsafe_code)]

pub mod builder;
mod compound;
mod error;
mod part;
mod selector;
mod specificity;

// Re-export public API
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use part::Part;
pub use selector::{Combinator, Selector};
pub use specificity::{Specificity, specificity_of_compound, specificity_of_selector};
