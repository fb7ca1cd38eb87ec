//! Assessment service: Orchestrates one risk calculation run.
//!
//! This is the input-validation boundary of the crate: requests are
//! range-checked and the therapy plan checked for double counting before
//! any domain computation runs. The computations themselves are pure,
//! so one validated request always produces the same assessment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    aggregate_rrr, apply_rrr, estimate_risk, project_ldl, InterventionId, LipidTherapy,
    PatientProfile,
};
use crate::CardioriskError;

/// hs-CRP level above which the value likely reflects acute inflammation.
const CRP_ADVISORY_THRESHOLD: f64 = 10.0;

/// One full calculation request: the patient profile plus the selected
/// interventions and therapy plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Clinical parameters
    pub profile: PatientProfile,

    /// Lipid-lowering therapy the patient is already on
    #[serde(default = "default_therapy")]
    pub current_therapy: LipidTherapy,

    /// Therapies to add or intensify, disjoint from the current one
    #[serde(default)]
    pub additional_therapies: BTreeSet<LipidTherapy>,

    /// Selected interventions
    #[serde(default)]
    pub interventions: BTreeSet<InterventionId>,
}

fn default_therapy() -> LipidTherapy {
    LipidTherapy::None
}

/// Result of one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Baseline SMART 10-year risk in percent, one decimal
    pub baseline_risk_pct: f64,

    /// Baseline LDL-C in mmol/L, echoed for display
    pub baseline_ldl: f64,

    /// LDL-C after therapy adjustments, in mmol/L
    pub final_ldl: f64,

    /// Cumulative relative risk reduction in percent
    pub total_rrr_pct: f64,

    /// Residual risk after all reductions, in percent, one decimal
    pub final_risk_pct: f64,

    /// True when hs-CRP exceeds 10 mg/L; the presentation layer should
    /// warn that acute-phase values distort the estimate
    pub crp_advisory: bool,
}

/// Run one risk assessment.
///
/// Validates the request, then composes the domain computations:
/// baseline risk, LDL trajectory, cumulative RRR, residual risk.
///
/// # Errors
/// Returns `Validation` when profile parameters are out of range, and
/// `TherapySelection` when the additional-therapy set overlaps the
/// current therapy or contains the `None` sentinel.
pub fn run_assessment(request: &AssessmentRequest) -> crate::Result<RiskAssessment> {
    validate(request)?;

    let profile = &request.profile;
    let baseline_risk = estimate_risk(profile);
    tracing::debug!(baseline_risk, "Estimated baseline risk");

    let projection = project_ldl(
        profile.baseline_ldl,
        request.current_therapy,
        &request.additional_therapies,
    );
    tracing::debug!(
        adjusted = projection.adjusted,
        fin = projection.fin,
        "Projected LDL-C trajectory"
    );

    let total_rrr = aggregate_rrr(
        &request.interventions,
        profile.baseline_ldl,
        projection.fin,
        profile.sbp_current,
        profile.sbp_target,
    );
    let final_risk = apply_rrr(baseline_risk, total_rrr);

    tracing::info!(
        baseline_risk,
        total_rrr,
        final_risk,
        interventions = request.interventions.len(),
        "Assessment complete"
    );

    Ok(RiskAssessment {
        baseline_risk_pct: baseline_risk,
        baseline_ldl: profile.baseline_ldl,
        final_ldl: projection.fin,
        total_rrr_pct: total_rrr,
        final_risk_pct: final_risk,
        crp_advisory: profile.crp > CRP_ADVISORY_THRESHOLD,
    })
}

fn validate(request: &AssessmentRequest) -> crate::Result<()> {
    request
        .profile
        .validate()
        .map_err(|errors| CardioriskError::Validation(errors.join("; ")))?;

    if request.additional_therapies.contains(&LipidTherapy::None) {
        return Err(CardioriskError::TherapySelection(
            "'None' is not an additional therapy".to_string(),
        ));
    }
    if request.current_therapy != LipidTherapy::None
        && request.additional_therapies.contains(&request.current_therapy)
    {
        return Err(CardioriskError::TherapySelection(format!(
            "{} is already the current therapy",
            request.current_therapy
        )));
    }

    Ok(())
}
