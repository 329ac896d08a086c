//! Combined selectors.
//! Spec: <https://www.w3.org/TR/selectors-3/#combinators>

use crate::{CompoundSelector, Specificity, specificity_of_selector};
use core::fmt;

/// Combinators between selectors.
/// Spec: Section 11: Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: `A B`
    Descendant,
    /// `A > B`
    Child,
    /// `A + B`
    AdjacentSibling,
    /// `A ~ B`
    GeneralSibling,
}

impl Combinator {
    /// The combinator's token. The descendant combinator is a single space.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }
}

impl From<Combinator> for String {
    #[inline]
    fn from(combinator: Combinator) -> Self {
        combinator.as_str().to_owned()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Either a compound selector or two selectors joined by a combinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Compound(CompoundSelector),
    Combined {
        left: Box<Self>,
        /// Any caller-supplied token; not checked against [`Combinator`].
        combinator: String,
        right: Box<Self>,
    },
}

impl Selector {
    /// Join two selectors. Renders as `left + " " + combinator + " " + right`.
    pub fn combine(
        left: impl Into<Self>,
        combinator: impl Into<String>,
        right: impl Into<Self>,
    ) -> Self {
        Self::Combined {
            left: Box::new(left.into()),
            combinator: combinator.into(),
            right: Box::new(right.into()),
        }
    }

    /// Canonical string form. Rendering never changes the selector.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Specificity summed over every compound in the selector.
    #[inline]
    pub fn specificity(&self) -> Specificity {
        specificity_of_selector(self)
    }
}

impl From<CompoundSelector> for Selector {
    #[inline]
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, formatter),
            Self::Combined {
                left,
                combinator,
                right,
            } => write!(formatter, "{left} {combinator} {right}"),
        }
    }
}
