//! Compound selector accumulation.
//! Spec: <https://www.w3.org/TR/selectors-3/#sequence>
//!
//! Each builder method consumes the accumulated selector and returns either the
//! extended selector or a [`SelectorError`]. Nothing is shared between values,
//! so a partially built selector can be cloned and extended along two branches.

use crate::part::OrderState;
use crate::{Part, SelectorError};
use core::fmt;
use log::debug;

/// A simple selector sequence: `element#id.class[attr]:pseudo-class::pseudo-element`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    /// Type selector. Never holds an empty string.
    element: Option<String>,
    /// Id selector without the leading `#`.
    id: Option<String>,
    /// Class names in call order, without the leading `.`.
    classes: Vec<String>,
    /// Attribute expressions in call order, without brackets.
    attributes: Vec<String>,
    /// Pseudo-class expressions in call order, without the leading `:`.
    pseudo_classes: Vec<String>,
    /// Pseudo-element name without the leading `::`.
    pseudo_element: Option<String>,
    /// Ordering state of the parts added so far.
    state: OrderState,
}

impl CompoundSelector {
    /// Create an empty selector. Renders as the empty string.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a selector from a single part. A fresh selector accepts any part.
    pub(crate) fn seeded(part: Part, value: String) -> Self {
        let mut selector = Self::default();
        selector.store(part, value);
        selector
    }

    /// Set the type selector. An empty name leaves the element unset.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateField`] if an element is already set,
    /// [`SelectorError::Ordering`] if a later part was already added.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Element, name.into())
    }

    /// Set the id selector.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateField`] if an id is already set,
    /// [`SelectorError::Ordering`] if a class or later part was already added.
    pub fn id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Id, name.into())
    }

    /// Append a class selector.
    ///
    /// # Errors
    /// [`SelectorError::Ordering`] if an attribute or later part was already added.
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Class, name.into())
    }

    /// Append an attribute selector; `expression` is written between the brackets verbatim.
    ///
    /// # Errors
    /// [`SelectorError::Ordering`] if a pseudo-class or pseudo-element was already added.
    pub fn attr(self, expression: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::Attribute, expression.into())
    }

    /// Append a pseudo-class, e.g. `focus` or `nth-of-type(even)`.
    ///
    /// # Errors
    /// [`SelectorError::Ordering`] if a pseudo-element was already added.
    pub fn pseudo_class(self, expression: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::PseudoClass, expression.into())
    }

    /// Set the pseudo-element.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateField`] if a pseudo-element is already set.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Part::PseudoElement, name.into())
    }

    /// Canonical string form. Rendering never changes the selector.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// True when nothing renders.
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }

    #[inline]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    #[inline]
    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn class_names(&self) -> &[String] {
        &self.classes
    }

    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    #[inline]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    #[inline]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Whether a unique part already holds a value.
    fn is_set(&self, part: Part) -> bool {
        match part {
            Part::Element => self.element.is_some(),
            Part::Id => self.id.is_some(),
            Part::PseudoElement => self.pseudo_element.is_some(),
            Part::Class | Part::Attribute | Part::PseudoClass => false,
        }
    }

    /// Validate and add one part. Duplicates are reported before ordering problems.
    fn push(mut self, part: Part, value: String) -> Result<Self, SelectorError> {
        if part.is_unique() && self.is_set(part) {
            return Err(self.reject(SelectorError::DuplicateField { part }));
        }
        if part == Part::Element && value.is_empty() {
            return Ok(self);
        }
        if let Err(err) = self.state.advance(part) {
            return Err(self.reject(err));
        }
        self.store(part, value);
        Ok(self)
    }

    /// Write `value` into the slot for `part` and move the ordering state.
    fn store(&mut self, part: Part, value: String) {
        match part {
            Part::Element => {
                // `element("")` means "no element" and must not constrain later calls.
                if value.is_empty() {
                    return;
                }
                self.element = Some(value);
            }
            Part::Id => self.id = Some(value),
            Part::Class => self.classes.push(value),
            Part::Attribute => self.attributes.push(value),
            Part::PseudoClass => self.pseudo_classes.push(value),
            Part::PseudoElement => self.pseudo_element = Some(value),
        }
        self.state = OrderState::entered_by(part);
    }

    fn reject(&self, err: SelectorError) -> SelectorError {
        debug!("rejected selector part on `{self}`: {err}");
        err
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            formatter.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(formatter, "#{id}")?;
        }
        for class in &self.classes {
            write!(formatter, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(formatter, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(formatter, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(formatter, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
