//! Tenet - ordering and equality for a declarative rule language
//!
//! This crate re-exports the layers of the Tenet value model for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tenet_ast        - Terms, syntax-tree nodes, total ordering
//! Layer 0: tenet_foundation - Persistent sorted collections, Error
//! ```

pub use tenet_ast as ast;
pub use tenet_foundation as foundation;
