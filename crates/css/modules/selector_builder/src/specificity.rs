//! CSS selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>

use crate::{CompoundSelector, Selector};

/// Specificity triple (a, b, c).
/// Spec: Section 9: Calculating a selector's specificity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    /// Component-wise saturating sum.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}

/// Clamp a part count into a specificity component.
#[inline]
fn count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// Compute the specificity of a compound selector.
/// Spec: Section 9: ids count toward a; classes, attributes and pseudo-classes toward b;
/// type selectors and pseudo-elements toward c.
pub fn specificity_of_compound(compound: &CompoundSelector) -> Specificity {
    let id_count = u16::from(compound.id_name().is_some());
    let class_attr_count = count(compound.class_names().len())
        .saturating_add(count(compound.attributes().len()))
        .saturating_add(count(compound.pseudo_classes().len()));
    let type_count = u16::from(compound.element_name().is_some_and(|name| name != "*"))
        .saturating_add(u16::from(compound.pseudo_element_name().is_some()));
    Specificity(id_count, class_attr_count, type_count)
}

/// Compute the specificity of a selector (sum over its compounds).
/// Spec: Section 9: Specificity accumulation
pub fn specificity_of_selector(selector: &Selector) -> Specificity {
    match selector {
        Selector::Compound(compound) => specificity_of_compound(compound),
        Selector::Combined { left, right, .. } => {
            specificity_of_selector(left).saturating_add(specificity_of_selector(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectorError;

    /// # Panics
    /// Panics if counts do not follow the (id, class-like, type-like) split.
    #[test]
    fn compound_counts() -> Result<(), SelectorError> {
        let selector = CompoundSelector::new()
            .element("a")?
            .id("nav")?
            .class("link")?
            .attr("href")?
            .pseudo_class("hover")?
            .pseudo_element("after")?;
        assert_eq!(specificity_of_compound(&selector), Specificity(1, 3, 2));
        Ok(())
    }

    /// # Panics
    /// Panics if the universal selector contributes to specificity.
    #[test]
    fn universal_element_is_free() -> Result<(), SelectorError> {
        let selector = CompoundSelector::new().element("*")?.class("x")?;
        assert_eq!(specificity_of_compound(&selector), Specificity(0, 1, 0));
        Ok(())
    }

    /// # Panics
    /// Panics if combined selectors do not sum both sides.
    #[test]
    fn combined_sums_both_sides() -> Result<(), SelectorError> {
        let selector = Selector::combine(
            CompoundSelector::new().element("div")?.id("main")?,
            "+",
            CompoundSelector::new().element("p")?.class("note")?,
        );
        assert_eq!(selector.specificity(), Specificity(1, 1, 2));
        assert!(Specificity(1, 0, 0) > Specificity(0, 9, 9));
        Ok(())
    }
}
