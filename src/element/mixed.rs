//! Mixed elements

use crate::element::Element;
use crate::traits::{DofCountProvider, ElementDescriptor};
use crate::types::{ElementError, ReferenceCellType};
use itertools::Itertools;
use log::debug;
use std::ops::Range;

/// The DOF range of one immediate sub-element of a mixed element
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DofRange {
    /// The index of the sub-element in declaration order
    pub sub_element: usize,
    /// The sub-element's DOFs within the mixed element's numbering
    pub dofs: Range<usize>,
}

/// The source of one flattened value component of a mixed element
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentEntry {
    /// The indices that reach the leaf simple element through nested compositions
    pub path: Vec<usize>,
    /// The component within the leaf element
    pub component: usize,
}

/// The absolute DOF range of one leaf simple element of a mixed element
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafRange {
    /// The indices that reach the leaf simple element through nested compositions
    pub path: Vec<usize>,
    /// The leaf's DOFs within the mixed element's numbering
    pub dofs: Range<usize>,
}

/// A resolved mixed element
///
/// A mixed element concatenates the value components and the DOFs of an
/// ordered sequence of sub-elements defined on the same cell. DOFs are
/// numbered contiguously in declaration order, and the flattened value
/// components are mapped back to the leaf simple elements they come from, so
/// downstream indexing of component `i` is positional: component 0 is the
/// first component of the first sub-element, recursing into that
/// sub-element's own first component if it is itself mixed.
///
/// Resolution is atomic. On any error no descriptor is produced, and once
/// produced a descriptor is immutable.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedElement {
    cell: ReferenceCellType,
    sub_elements: Vec<Element>,
    dof_count: usize,
    layout: Vec<DofRange>,
    component_map: Vec<ComponentEntry>,
    leaf_layout: Vec<LeafRange>,
    flat_component_map: Vec<(usize, usize)>,
}

impl MixedElement {
    /// Resolve an ordered sequence of elements into a mixed element
    ///
    /// Sub-elements that are themselves compositions are resolved first and
    /// spliced in, so repeated pairwise combination and a single n-ary
    /// combination agree on the flattened layout and component order.
    pub fn new<P: DofCountProvider>(
        elements: &[Element],
        provider: &P,
    ) -> Result<Self, ElementError> {
        if elements.is_empty() {
            return Err(ElementError::EmptyComposition);
        }
        let mut cell = None;
        let mut layout = Vec::with_capacity(elements.len());
        let mut component_map = Vec::new();
        let mut leaf_layout = Vec::new();
        let mut flat_component_map = Vec::new();
        let mut cursor = 0;
        for (index, element) in elements.iter().enumerate() {
            let (sub_cell, count) = match element {
                Element::Simple(e) => {
                    let count = e.dof_count(provider)?;
                    for component in 0..e.value_size() {
                        component_map.push(ComponentEntry {
                            path: vec![index],
                            component,
                        });
                        flat_component_map.push((leaf_layout.len(), component));
                    }
                    leaf_layout.push(LeafRange {
                        path: vec![index],
                        dofs: cursor..cursor + count,
                    });
                    (e.cell(), count)
                }
                Element::Mixed(sub_elements) => {
                    let inner = Self::new(sub_elements, provider)?;
                    let leaf_offset = leaf_layout.len();
                    for entry in inner.component_map {
                        let mut path = Vec::with_capacity(entry.path.len() + 1);
                        path.push(index);
                        path.extend_from_slice(&entry.path);
                        component_map.push(ComponentEntry {
                            path,
                            component: entry.component,
                        });
                    }
                    for (leaf, component) in inner.flat_component_map {
                        flat_component_map.push((leaf_offset + leaf, component));
                    }
                    for leaf in inner.leaf_layout {
                        let mut path = Vec::with_capacity(leaf.path.len() + 1);
                        path.push(index);
                        path.extend_from_slice(&leaf.path);
                        leaf_layout.push(LeafRange {
                            path,
                            dofs: cursor + leaf.dofs.start..cursor + leaf.dofs.end,
                        });
                    }
                    (inner.cell, inner.dof_count)
                }
            };
            match cell {
                None => cell = Some(sub_cell),
                Some(c) if c != sub_cell => {
                    return Err(ElementError::CellMismatch {
                        first_index: 0,
                        second_index: index,
                        first_cell: c,
                        second_cell: sub_cell,
                    });
                }
                Some(_) => {}
            }
            layout.push(DofRange {
                sub_element: index,
                dofs: cursor..cursor + count,
            });
            cursor += count;
        }
        let cell = cell.ok_or(ElementError::EmptyComposition)?;
        debug_assert!(layout
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.dofs.end == b.dofs.start));
        debug_assert!(leaf_layout
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.dofs.end == b.dofs.start));
        debug!(
            "Resolved mixed element on a {cell:?}: {} sub-element(s), {cursor} DOFs, {} components",
            elements.len(),
            component_map.len()
        );
        Ok(Self {
            cell,
            sub_elements: elements.to_vec(),
            dof_count: cursor,
            layout,
            component_map,
            leaf_layout,
            flat_component_map,
        })
    }

    /// The number of DOFs of the mixed element
    pub fn dof_count(&self) -> usize {
        self.dof_count
    }

    /// The DOF range of each immediate sub-element, in declaration order
    ///
    /// The ranges partition `0..dof_count()` without gaps or overlaps.
    pub fn layout(&self) -> &[DofRange] {
        &self.layout
    }

    /// The source of each flattened value component, in component order
    pub fn component_map(&self) -> &[ComponentEntry] {
        &self.component_map
    }

    /// The absolute DOF range of each leaf simple element, depth first
    pub fn leaf_layout(&self) -> &[LeafRange] {
        &self.leaf_layout
    }

    /// The (leaf, local component) source of each flattened value component
    ///
    /// Leaves are numbered depth first, matching [MixedElement::leaf_layout].
    /// Unlike the paths in [MixedElement::component_map], this view does not
    /// depend on how deeply the composition was nested, so it is the view
    /// under which repeated pairwise combination and n-ary combination of
    /// the same elements are equal.
    pub fn flat_component_map(&self) -> &[(usize, usize)] {
        &self.flat_component_map
    }

    /// The immediate sub-elements, in declaration order
    pub fn sub_elements(&self) -> &[Element] {
        &self.sub_elements
    }

    /// An immediate sub-element
    pub fn sub_element(&self, index: usize) -> Option<&Element> {
        self.sub_elements.get(index)
    }

    /// The source of the flattened value component with the given index
    pub fn component(&self, index: usize) -> Option<&ComponentEntry> {
        self.component_map.get(index)
    }
}

impl ElementDescriptor for MixedElement {
    fn cell(&self) -> ReferenceCellType {
        self.cell
    }

    fn value_size(&self) -> usize {
        self.component_map.len()
    }
}

#[cfg(feature = "serde")]
impl MixedElement {
    /// Generate the RON string for a mixed element
    pub fn to_ron_string(&self) -> String {
        ron::to_string(self).unwrap()
    }

    /// Create a mixed element from a RON string
    pub fn from_ron_string(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}
