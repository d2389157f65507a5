//! Workflow template transition triggers of Mayan EDMS, managed through its
//! REST API and exposed as a create/read/delete/import resource.

mod algebra;
mod domain;
mod service;

pub use algebra::*;
pub use domain::*;
pub use service::*;
