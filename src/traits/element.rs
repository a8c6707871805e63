//! Trait for element descriptors

use crate::types::ReferenceCellType;

/// A descriptor of a finite element space on a reference cell
pub trait ElementDescriptor {
    /// The cell that the element is defined on
    fn cell(&self) -> ReferenceCellType;

    /// The number of flattened value components of the element
    fn value_size(&self) -> usize;

    /// The value shape of the element
    ///
    /// This is empty for a scalar element and `[value_size]` for a
    /// vector-valued element.
    fn value_shape(&self) -> Vec<usize> {
        match self.value_size() {
            1 => vec![],
            n => vec![n],
        }
    }
}
