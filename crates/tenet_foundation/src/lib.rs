//! Persistent collections and error types for Tenet.
//!
//! This crate provides:
//! - Persistent collections ([`LtVec`], [`LtSet`], [`LtMap`]); the set and map
//!   keep their elements in canonical sorted order
//! - [`Error`] - Error types for the recoverable edges of the value model

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;

pub use collections::{LtMap, LtSet, LtVec};
pub use error::{Error, ErrorKind, Result};
