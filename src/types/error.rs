//! Errors

use crate::types::{Family, ReferenceCellType};
use thiserror::Error;

/// An error that occurred while building an element descriptor
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ElementError {
    /// Two sub-elements of a mixed element are defined on different cells
    #[error("sub-elements {first_index} and {second_index} are defined on different cells ({first_cell:?} and {second_cell:?})")]
    CellMismatch {
        /// Index of the first of the two conflicting sub-elements
        first_index: usize,
        /// Index of the second of the two conflicting sub-elements
        second_index: usize,
        /// Cell of the first conflicting sub-element
        first_cell: ReferenceCellType,
        /// Cell of the second conflicting sub-element
        second_cell: ReferenceCellType,
    },
    /// No element of this family exists for this cell and degree
    #[error("no degree {degree} {family:?} element on a {cell:?}")]
    UnknownFamily {
        /// The element family
        family: Family,
        /// The reference cell
        cell: ReferenceCellType,
        /// The polynomial degree
        degree: usize,
    },
    /// A mixed element was built from an empty list of sub-elements
    #[error("cannot combine an empty list of sub-elements")]
    EmptyComposition,
}
