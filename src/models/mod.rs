//! Core data models for the Tardiness Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod arrival;
mod classification_result;
mod tardiness_record;

pub use arrival::{ArrivalRecord, ArrivalTime, MINUTES_PER_DAY};
pub use classification_result::{ClassificationResult, Concept, TardinessSummary};
pub use tardiness_record::{LegacyTardinessRecord, TardinessRecord};
