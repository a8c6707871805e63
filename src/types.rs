//! Types

mod error;
pub use error::ElementError;

/// The type of a reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ReferenceCellType {
    /// A point
    Point = 0,
    /// A line interval
    Interval = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
    /// A tetrahedron
    Tetrahedron = 4,
    /// A hexahedron (cell behaving like a cube)
    Hexahedron = 5,
    /// A triangular prism
    Prism = 6,
    /// A square-based pyramid
    Pyramid = 7,
}

/// The family of a finite element
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Family {
    /// Lagrange
    Lagrange = 0,
    /// Raviart-Thomas
    RaviartThomas = 1,
    /// Nedelec first kind
    NedelecFirstKind = 2,
}

/// Continuity of an element between neighbouring cells
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Continuity {
    /// The element's usual continuity
    Standard = 0,
    /// Discontinuous between cells
    Discontinuous = 1,
}
