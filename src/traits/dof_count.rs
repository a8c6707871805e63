//! Trait for DOF count lookup

use crate::types::{Continuity, ElementError, Family, ReferenceCellType};

/// Lookup of the dimension of a finite element space on a reference cell
///
/// The number of DOFs of an element is a property of its family, continuity,
/// cell and degree. Element descriptors do not compute this themselves: a
/// provider is passed in when a mixed element is resolved, so that the
/// numbering scheme is independent of where the counts come from.
pub trait DofCountProvider {
    /// The number of DOFs of the element with the given family, continuity, cell and degree
    ///
    /// Returns [ElementError::UnknownFamily] if no such element exists.
    fn dof_count(
        &self,
        family: Family,
        continuity: Continuity,
        cell: ReferenceCellType,
        degree: usize,
    ) -> Result<usize, ElementError>;
}
