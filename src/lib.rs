//! Vocal Review - voice-based employee reviews
//!
//! This crate provides a guided review wizard (score, peer nominations and
//! two voice recordings) and the server pipeline that receives a submission,
//! transcribes and archives the recordings concurrently, and records one
//! row per review in a spreadsheet.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Review data, wizard steps, recorder states, and errors
//! - **Application**: Use cases (`SubmitReviewUseCase`, `ReviewWizard`) and port traits
//! - **Infrastructure**: Adapter implementations (FFmpeg, Gemini, Cloud Storage, Sheets, etc.)
//! - **Server**: axum routes and HTTP error mapping
//! - **CLI**: Command-line interface, configuration commands, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
