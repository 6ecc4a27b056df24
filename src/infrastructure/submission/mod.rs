//! Review submission adapters

mod http;

pub use http::HttpReviewSubmitter;
