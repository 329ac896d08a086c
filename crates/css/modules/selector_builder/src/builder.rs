//! Entry points that start a selector from a single part.
//!
//! ```
//! use css_selector_builder::builder;
//!
//! # fn main() -> Result<(), css_selector_builder::SelectorError> {
//! let selector = builder::id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.render(), "#main.container.editable");
//! # Ok(())
//! # }
//! ```
//!
//! A fresh selector accepts any first part, so these functions cannot fail.

use crate::{CompoundSelector, Part, Selector};

#[inline]
pub fn element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::Element, name.into())
}

#[inline]
pub fn id(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::Id, name.into())
}

#[inline]
pub fn class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::Class, name.into())
}

#[inline]
pub fn attr(expression: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::Attribute, expression.into())
}

#[inline]
pub fn pseudo_class(expression: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::PseudoClass, expression.into())
}

#[inline]
pub fn pseudo_element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(Part::PseudoElement, name.into())
}

/// See [`Selector::combine`].
#[inline]
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl Into<String>,
    right: impl Into<Selector>,
) -> Selector {
    Selector::combine(left, combinator, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectorError;

    #[test]
    fn each_entry_point_renders_its_token() {
        assert_eq!(element("div").render(), "div");
        assert_eq!(id("main").render(), "#main");
        assert_eq!(class("box").render(), ".box");
        assert_eq!(attr("lang=en").render(), "[lang=en]");
        assert_eq!(pseudo_class("hover").render(), ":hover");
        assert_eq!(pseudo_element("before").render(), "::before");
    }

    /// # Panics
    /// Panics if a selector seeded with a late part accepts an earlier one.
    #[test]
    fn seeded_state_constrains_later_calls() {
        assert_eq!(
            pseudo_element("after").class("x"),
            Err(SelectorError::Ordering {
                part: Part::Class,
                after: Part::PseudoElement
            })
        );
        assert_eq!(
            element("a").element("b"),
            Err(SelectorError::DuplicateField {
                part: Part::Element
            })
        );
    }

    /// # Panics
    /// Panics if an empty seeded element blocks a later element.
    #[test]
    fn empty_seeded_element_stays_open() -> Result<(), SelectorError> {
        assert_eq!(element("").element("span")?.render(), "span");
        Ok(())
    }
}
