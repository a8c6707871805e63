//! Mixed finite element descriptors
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod dofs;
pub mod element;
pub mod reference_cell;
pub mod traits;
pub mod types;

pub use dofs::ReferenceDofCounts;
pub use element::{combine, Element, MixedElement, SimpleElement};
