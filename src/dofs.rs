//! Built-in DOF counts

use crate::traits::DofCountProvider;
use crate::types::{Continuity, ElementError, Family, ReferenceCellType};

/// DOF counts of the classical element families on reference cells
///
/// Degree 0 Lagrange elements only exist with [Continuity::Discontinuous]
/// (a piecewise constant is discontinuous between cells). Raviart-Thomas and
/// Nedelec elements start at degree 1 and are only defined on simplex cells
/// of dimension 2 and 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceDofCounts;

impl DofCountProvider for ReferenceDofCounts {
    fn dof_count(
        &self,
        family: Family,
        continuity: Continuity,
        cell: ReferenceCellType,
        degree: usize,
    ) -> Result<usize, ElementError> {
        let unknown = Err(ElementError::UnknownFamily {
            family,
            cell,
            degree,
        });
        match family {
            Family::Lagrange => {
                if degree == 0 && continuity == Continuity::Standard {
                    return unknown;
                }
                match cell {
                    ReferenceCellType::Point => Ok(1),
                    ReferenceCellType::Interval => Ok(degree + 1),
                    ReferenceCellType::Triangle => Ok((degree + 1) * (degree + 2) / 2),
                    ReferenceCellType::Quadrilateral => Ok((degree + 1) * (degree + 1)),
                    ReferenceCellType::Tetrahedron => {
                        Ok((degree + 1) * (degree + 2) * (degree + 3) / 6)
                    }
                    ReferenceCellType::Hexahedron => Ok((degree + 1) * (degree + 1) * (degree + 1)),
                    ReferenceCellType::Prism | ReferenceCellType::Pyramid => unknown,
                }
            }
            Family::RaviartThomas => {
                if degree == 0 {
                    return unknown;
                }
                match cell {
                    ReferenceCellType::Triangle => Ok(degree * (degree + 2)),
                    ReferenceCellType::Tetrahedron => Ok(degree * (degree + 1) * (degree + 3) / 2),
                    _ => unknown,
                }
            }
            Family::NedelecFirstKind => {
                if degree == 0 {
                    return unknown;
                }
                match cell {
                    ReferenceCellType::Triangle => Ok(degree * (degree + 2)),
                    ReferenceCellType::Tetrahedron => Ok(degree * (degree + 2) * (degree + 3) / 2),
                    _ => unknown,
                }
            }
        }
    }
}
