//! Application layer: Use cases and services.
//!
//! This module orchestrates the domain computations behind the
//! input-validation boundary.

mod assessment;

pub use assessment::{run_assessment, AssessmentRequest, RiskAssessment};
