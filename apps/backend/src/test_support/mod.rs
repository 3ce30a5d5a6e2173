//! Fakes for the database seam, shared by unit and integration tests.

pub mod openers;

pub use openers::{FailingOpener, MockOpener, RecordingOpener};
