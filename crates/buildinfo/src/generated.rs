//! Constants emitted into `OUT_DIR` by the build script.

#[allow(clippy::doc_markdown)]
mod generated_constants {
    include!(concat!(env!("OUT_DIR"), "/buildinfo_generated.rs"));
}

pub use generated_constants::*;
