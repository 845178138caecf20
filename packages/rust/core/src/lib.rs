//! Core run logic for verso-enrich.
//!
//! Dataset enrichment is still done by hand, so the only workflow here is the
//! placeholder run in [`placeholder`].

pub mod placeholder;

pub use placeholder::{DATASET_NOTICE, MANUAL_UPDATE_NOTICE, NOTICES, run_placeholder};
