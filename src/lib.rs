//! # Cardiorisk
//!
//! SMART-based cardiovascular risk and intervention benefit calculator.
//!
//! This crate provides:
//! - A baseline 10-year CVD event-risk estimate from clinical parameters
//!   (SMART hazard model)
//! - A cumulative relative-risk-reduction projection layering intervention
//!   benefits, lipid-therapy intensification, and a blood pressure target
//!   on top of the baseline risk
//!
//! ## Architecture
//!
//! The crate is layered:
//! - `domain`: Core business types and pure computations (patient profile,
//!   reference tables, risk estimator, reduction aggregator)
//! - `application`: The assessment use case orchestrating domain logic
//!   behind the input-validation boundary
//!
//! Every computation is deterministic and side-effect-free: identical
//! requests produce identical assessments.

pub mod application;
pub mod domain;

pub use application::{run_assessment, AssessmentRequest, RiskAssessment};
pub use domain::{InterventionId, LipidTherapy, PatientProfile, Sex, VascularBed};

/// Result type for cardiorisk operations
pub type Result<T> = std::result::Result<T, CardioriskError>;

/// Main error type for cardiorisk
#[derive(Debug, thiserror::Error)]
pub enum CardioriskError {
    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("Invalid therapy selection: {0}")]
    TherapySelection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
