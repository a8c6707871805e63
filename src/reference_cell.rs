//! Reference cell information

use crate::types::ReferenceCellType;

/// The topological dimension of the cell
pub fn dim(cell: ReferenceCellType) -> usize {
    match cell {
        ReferenceCellType::Point => 0,
        ReferenceCellType::Interval => 1,
        ReferenceCellType::Triangle | ReferenceCellType::Quadrilateral => 2,
        ReferenceCellType::Tetrahedron
        | ReferenceCellType::Hexahedron
        | ReferenceCellType::Prism
        | ReferenceCellType::Pyramid => 3,
    }
}

/// Is the cell a simplex?
pub fn is_simplex(cell: ReferenceCellType) -> bool {
    matches!(
        cell,
        ReferenceCellType::Point
            | ReferenceCellType::Interval
            | ReferenceCellType::Triangle
            | ReferenceCellType::Tetrahedron
    )
}

/// The number of sub-entities of each dimension
///
/// Entry `d` of the returned vector is the number of sub-entities of
/// topological dimension `d`, so the first entry is the number of vertices
/// and the last entry is 1 (the cell itself).
pub fn entity_counts(cell: ReferenceCellType) -> Vec<usize> {
    match cell {
        ReferenceCellType::Point => vec![1],
        ReferenceCellType::Interval => vec![2, 1],
        ReferenceCellType::Triangle => vec![3, 3, 1],
        ReferenceCellType::Quadrilateral => vec![4, 4, 1],
        ReferenceCellType::Tetrahedron => vec![4, 6, 4, 1],
        ReferenceCellType::Hexahedron => vec![8, 12, 6, 1],
        ReferenceCellType::Prism => vec![6, 9, 5, 1],
        ReferenceCellType::Pyramid => vec![5, 8, 5, 1],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! make_tests {
        ($cellname:ident, $cell:ident) => {
            paste::item! {
                #[test]
                fn [< test_entity_counts_ $cellname >]() {
                    //! Test that entity counts match the cell dimension
                    let counts = entity_counts(ReferenceCellType::$cell);
                    assert_eq!(counts.len(), dim(ReferenceCellType::$cell) + 1);
                    assert_eq!(*counts.last().unwrap(), 1);
                }
                #[test]
                fn [< test_euler_characteristic_ $cellname >]() {
                    //! Test the Euler characteristic of the cell boundary
                    let counts = entity_counts(ReferenceCellType::$cell);
                    let chi = counts
                        .iter()
                        .enumerate()
                        .map(|(d, c)| if d % 2 == 0 { *c as i64 } else { -(*c as i64) })
                        .sum::<i64>();
                    assert_eq!(chi, 1);
                }
            }
        };
    }

    make_tests!(point, Point);
    make_tests!(interval, Interval);
    make_tests!(triangle, Triangle);
    make_tests!(quadrilateral, Quadrilateral);
    make_tests!(tetrahedron, Tetrahedron);
    make_tests!(hexahedron, Hexahedron);
    make_tests!(prism, Prism);
    make_tests!(pyramid, Pyramid);

    #[test]
    fn test_simplices() {
        //! Test simplex detection
        for cell in [
            ReferenceCellType::Point,
            ReferenceCellType::Interval,
            ReferenceCellType::Triangle,
            ReferenceCellType::Tetrahedron,
        ] {
            assert!(is_simplex(cell));
        }
        for cell in [
            ReferenceCellType::Quadrilateral,
            ReferenceCellType::Hexahedron,
            ReferenceCellType::Prism,
            ReferenceCellType::Pyramid,
        ] {
            assert!(!is_simplex(cell));
        }
    }
}
