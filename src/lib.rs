#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Typed JVM descriptors.
//!
//! Field, return and method descriptors are parsed from their class-file encoding
//! (e.g. `([Ljava/lang/String;)V`) into a closed tree of types, encoded back bit-exactly,
//! and rendered in a human-readable form (e.g. `(String[]): void`).
//!
//! ```
//! use jvm_descriptors::types::method_descriptor::MethodDescriptor;
//!
//! let main: MethodDescriptor = "([Ljava/lang/String;)V".parse().unwrap();
//! assert_eq!(main.to_string(), "(String[]): void");
//! assert_eq!(main.descriptor(), "([Ljava/lang/String;)V");
//! ```
//! ## Features
#![doc = document_features::document_features!()]

pub(crate) mod macros;
pub mod types;

/// Test utilities
#[cfg(test)]
pub mod tests;
