//! Tabular store adapters

mod google;

pub use google::{DisabledRowAppender, GoogleSheetsAppender};
