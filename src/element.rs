//! Element descriptors

mod mixed;
mod simple;

pub use mixed::{ComponentEntry, DofRange, LeafRange, MixedElement};
pub use simple::SimpleElement;

use crate::traits::DofCountProvider;
use crate::types::ElementError;

/// An element of a mixed composition
///
/// A sub-element of a mixed element is either a simple element or itself a
/// (not yet resolved) mixed composition.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// A simple element
    Simple(SimpleElement),
    /// An ordered composition of sub-elements
    Mixed(Vec<Element>),
}

impl From<SimpleElement> for Element {
    fn from(element: SimpleElement) -> Self {
        Self::Simple(element)
    }
}

impl From<MixedElement> for Element {
    fn from(element: MixedElement) -> Self {
        Self::Mixed(element.sub_elements().to_vec())
    }
}

/// Combine an ordered sequence of elements into a mixed element
///
/// This is a convenience alias for [MixedElement::new].
pub fn combine<P: DofCountProvider>(
    elements: &[Element],
    provider: &P,
) -> Result<MixedElement, ElementError> {
    MixedElement::new(elements, provider)
}
