//! Traits

mod dof_count;
mod element;

pub use dof_count::DofCountProvider;
pub use element::ElementDescriptor;
