//! Declaration merging and externs generation for widlgen.
//!
//! This crate is the engine between the upstream WebIDL parser and the
//! Closure Compiler: it indexes a declaration list, folds partials and
//! mixin includes into one merged graph, resolves type expressions to
//! Closure annotations, and emits the externs document.
//!
//! Pipeline, leaf-first:
//! - [`index::DeclarationIndex`] — name-keyed lookup tables, duplicate
//!   detection
//! - [`merge::merge`] — includes and partial folding into an immutable
//!   [`merge::MergedGraph`]
//! - [`resolve::TypeResolver`] — type expression to annotation string
//! - [`emit::ExternEmitter`] — merged graph to externs text
//!
//! Everything is synchronous and single-pass; the merged graph is
//! read-only once built. Any invariant violation aborts the run with a
//! [`error::WidlError`], and output produced before a failure is never
//! usable.

pub mod emit;
pub mod error;
pub mod index;
pub mod merge;
pub mod resolve;

pub use emit::ExternEmitter;
pub use error::{Result, WidlError};
pub use index::DeclarationIndex;
pub use merge::{MergedGraph, EXTERNAL_TARGETS};
pub use resolve::TypeResolver;

use widlgen_ast::decl::Declaration;

/// Run the whole pipeline over a declaration list.
pub fn generate(decls: &[Declaration]) -> Result<String> {
    let index = DeclarationIndex::build(decls)?;
    let graph = merge::merge(decls, &index)?;
    ExternEmitter::new(&graph).emit()
}
