#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod generated;
/// Immutable metadata snapshot assembled from the generated constants.
pub mod metadata;

pub use generated::*;
pub use metadata::{Metadata, metadata};
