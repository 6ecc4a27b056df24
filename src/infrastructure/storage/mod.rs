//! Object storage adapters

mod disabled;
mod gcs;

pub use disabled::DisabledObjectStore;
pub use gcs::GcsObjectStore;
