//! C bindings for the gridpath search engine.
//!
//! Exposes the search as a single C-compatible entry point for embedders.
//! This is the only crate in the workspace that may contain `unsafe` code,
//! confined to the pointer handling at the boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod path;
mod status;

pub use path::gridpath_find_path;
pub use status::GridPathStatus;
