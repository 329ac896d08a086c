//! Selector parts and the ordering state machine.
//! Spec: <https://www.w3.org/TR/selectors-3/#simple-selectors>

use crate::SelectorError;
use core::fmt;

/// One kind of simple selector inside a compound selector.
///
/// Variants are declared in canonical render order, so the derived `Ord`
/// is the order parts must be added in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// Type selector, e.g. `div`.
    Element,
    /// `#id`
    Id,
    /// `.class`
    Class,
    /// `[expression]`
    Attribute,
    /// `:pseudo-class`
    PseudoClass,
    /// `::pseudo-element`
    PseudoElement,
}

impl Part {
    /// True for parts that may appear at most once per compound selector.
    #[inline]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human-readable name used in error messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Where a compound selector under construction currently sits in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum OrderState {
    #[default]
    Start,
    HasElement,
    HasId,
    HasClasses,
    HasAttrs,
    HasPseudoClass,
    HasPseudoElement,
}

impl OrderState {
    /// State reached after adding `part`.
    #[inline]
    pub(crate) const fn entered_by(part: Part) -> Self {
        match part {
            Part::Element => Self::HasElement,
            Part::Id => Self::HasId,
            Part::Class => Self::HasClasses,
            Part::Attribute => Self::HasAttrs,
            Part::PseudoClass => Self::HasPseudoClass,
            Part::PseudoElement => Self::HasPseudoElement,
        }
    }

    /// The most recently added part, or `None` before the first one.
    #[inline]
    pub(crate) const fn last_part(self) -> Option<Part> {
        match self {
            Self::Start => None,
            Self::HasElement => Some(Part::Element),
            Self::HasId => Some(Part::Id),
            Self::HasClasses => Some(Part::Class),
            Self::HasAttrs => Some(Part::Attribute),
            Self::HasPseudoClass => Some(Part::PseudoClass),
            Self::HasPseudoElement => Some(Part::PseudoElement),
        }
    }

    /// Transition on `part`. Parts ranked below the current state are rejected;
    /// repeating the current part keeps the state.
    ///
    /// # Errors
    /// Returns [`SelectorError::Ordering`] when `part` precedes the last added part.
    pub(crate) fn advance(self, part: Part) -> Result<Self, SelectorError> {
        match self.last_part() {
            Some(after) if part < after => Err(SelectorError::Ordering { part, after }),
            _ => Ok(Self::entered_by(part)),
        }
    }
}
