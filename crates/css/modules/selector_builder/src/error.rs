use crate::Part;
use core::fmt;

/// Errors raised while accumulating a compound selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    DuplicateField {
        /// The part that was already present.
        part: Part,
    },
    /// A part was added after one that must follow it.
    Ordering {
        /// The rejected part.
        part: Part,
        /// The last part added before the rejected call.
        after: Part,
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { part } => write!(
                formatter,
                "{part} should not occur more than one time inside the selector"
            ),
            Self::Ordering { part, after } => write!(
                formatter,
                "{part} cannot follow {after}: selector parts should be arranged in the order \
                 element, id, class, attribute, pseudo-class, pseudo-element"
            ),
        }
    }
}

impl std::error::Error for SelectorError {}
