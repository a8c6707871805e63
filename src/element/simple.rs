//! Simple elements

use crate::reference_cell;
use crate::traits::{DofCountProvider, ElementDescriptor};
use crate::types::{Continuity, ElementError, Family, ReferenceCellType};

/// A simple (non-composite) element
///
/// A simple element is scalar-valued unless it is created with
/// [SimpleElement::vector], which blocks one copy of the element per
/// topological dimension of the cell. A piecewise constant vector field on a
/// triangle is `SimpleElement::vector(Family::Lagrange,
/// Continuity::Discontinuous, ReferenceCellType::Triangle, 0)`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleElement {
    family: Family,
    continuity: Continuity,
    cell: ReferenceCellType,
    degree: usize,
    block_size: usize,
}

impl SimpleElement {
    /// Create a scalar element
    pub fn new(
        family: Family,
        continuity: Continuity,
        cell: ReferenceCellType,
        degree: usize,
    ) -> Self {
        Self {
            family,
            continuity,
            cell,
            degree,
            block_size: 1,
        }
    }

    /// Create a vector element with one block per topological dimension of the cell
    pub fn vector(
        family: Family,
        continuity: Continuity,
        cell: ReferenceCellType,
        degree: usize,
    ) -> Self {
        Self {
            family,
            continuity,
            cell,
            degree,
            block_size: reference_cell::dim(cell),
        }
    }

    /// The element family
    pub fn family(&self) -> Family {
        self.family
    }

    /// The element's continuity between cells
    pub fn continuity(&self) -> Continuity {
        self.continuity
    }

    /// The polynomial degree
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of blocked copies of the underlying scalar space
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The number of DOFs of this element, as counted by the given provider
    ///
    /// The DOFs of a vector element are blocked by component, so the count
    /// is the block size times the count of the underlying element.
    pub fn dof_count<P: DofCountProvider>(&self, provider: &P) -> Result<usize, ElementError> {
        Ok(self.block_size
            * provider.dof_count(self.family, self.continuity, self.cell, self.degree)?)
    }
}

impl ElementDescriptor for SimpleElement {
    fn cell(&self) -> ReferenceCellType {
        self.cell
    }

    fn value_size(&self) -> usize {
        self.block_size
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dofs::ReferenceDofCounts;

    #[test]
    fn test_scalar_value_shape() {
        //! Test that a scalar element has empty value shape
        let e = SimpleElement::new(
            Family::Lagrange,
            Continuity::Standard,
            ReferenceCellType::Triangle,
            2,
        );
        assert_eq!(e.value_size(), 1);
        assert_eq!(e.value_shape(), Vec::<usize>::new());
    }

    #[test]
    fn test_vector_value_shape() {
        //! Test that a vector element has one component per dimension
        let e = SimpleElement::vector(
            Family::Lagrange,
            Continuity::Discontinuous,
            ReferenceCellType::Triangle,
            0,
        );
        assert_eq!(e.value_size(), 2);
        assert_eq!(e.value_shape(), vec![2]);
        let e = SimpleElement::vector(
            Family::Lagrange,
            Continuity::Standard,
            ReferenceCellType::Tetrahedron,
            1,
        );
        assert_eq!(e.value_size(), 3);
        assert_eq!(e.value_shape(), vec![3]);
    }

    #[test]
    fn test_blocked_dof_count() {
        //! Test that vector elements block the underlying DOF count
        let scalar = SimpleElement::new(
            Family::Lagrange,
            Continuity::Standard,
            ReferenceCellType::Triangle,
            2,
        );
        let vector = SimpleElement::vector(
            Family::Lagrange,
            Continuity::Standard,
            ReferenceCellType::Triangle,
            2,
        );
        assert_eq!(scalar.dof_count(&ReferenceDofCounts).unwrap(), 6);
        assert_eq!(vector.dof_count(&ReferenceDofCounts).unwrap(), 12);
    }

    #[test]
    fn test_unknown_element_dof_count() {
        //! Test that provider errors are surfaced unchanged
        let e = SimpleElement::new(
            Family::RaviartThomas,
            Continuity::Standard,
            ReferenceCellType::Quadrilateral,
            1,
        );
        assert_eq!(
            e.dof_count(&ReferenceDofCounts),
            Err(ElementError::UnknownFamily {
                family: Family::RaviartThomas,
                cell: ReferenceCellType::Quadrilateral,
                degree: 1
            })
        );
    }
}
