//! Risk-reduction aggregation.
//!
//! Combines selected interventions, lipid-therapy changes, and a blood
//! pressure target into one capped cumulative relative risk reduction,
//! then applies it multiplicatively to the baseline risk.
//!
//! All contributions are additive before capping: each LDL/BP term is
//! capped individually, the grand total is capped last. Negative terms
//! are permitted throughout (a target above the current SBP, or a final
//! LDL above baseline, partially reverses the modelled benefit); only the
//! ceiling is enforced, never a floor.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::reference::{intervention, InterventionId, LipidTherapy};
use crate::domain::risk::round1;

/// RRR points per mmol/L of achieved LDL-C reduction.
const LDL_RRR_PER_MMOL: f64 = 22.0;

/// Ceiling on the LDL contribution.
const LDL_RRR_CAP: f64 = 35.0;

/// RRR points per 10 mmHg of systolic pressure reduction.
const BP_RRR_PER_10MMHG: f64 = 20.0;

/// Ceiling on the blood pressure contribution.
const BP_RRR_CAP: f64 = 30.0;

/// Ceiling on the cumulative relative risk reduction.
const TOTAL_RRR_CAP: f64 = 70.0;

/// LDL-C trajectory under the selected therapy changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LdlProjection {
    /// LDL-C after the current therapy's effect, in mmol/L
    pub adjusted: f64,
    /// LDL-C after additional therapies on top, in mmol/L
    pub fin: f64,
}

/// Project the LDL-C trajectory for a therapy plan.
///
/// The current therapy applies its full reduction; each additional
/// therapy contributes half its nominal reduction, a fixed rule modelling
/// the diminishing increment of stacking a regimen on existing treatment.
///
/// The additional set must exclude the current therapy and the `None`
/// sentinel; the request boundary rejects violating plans before this
/// function runs, preventing the same drug's effect from being counted
/// twice.
#[must_use]
pub fn project_ldl(
    baseline_ldl: f64,
    current: LipidTherapy,
    additional: &BTreeSet<LipidTherapy>,
) -> LdlProjection {
    let adjusted = baseline_ldl * (1.0 - current.ldl_reduction_pct() / 100.0);

    let additional_reduction: f64 = additional
        .iter()
        .map(|t| t.ldl_reduction_pct() / 2.0)
        .sum();
    let fin = adjusted * (1.0 - additional_reduction / 100.0);

    LdlProjection { adjusted, fin }
}

/// Aggregate the cumulative relative risk reduction.
///
/// Sums lifetime ARR over the selected interventions, adds the capped
/// LDL and blood pressure terms, and clamps the total at the 70-point
/// ceiling. The result may be negative; see the module docs.
#[must_use]
pub fn aggregate_rrr(
    selected: &BTreeSet<InterventionId>,
    baseline_ldl: f64,
    final_ldl: f64,
    sbp_current: f64,
    sbp_target: f64,
) -> f64 {
    let intervention_sum: f64 = selected
        .iter()
        .map(|&id| f64::from(intervention(id).arr_lifetime))
        .sum();

    let ldl_term = ((baseline_ldl - final_ldl) * LDL_RRR_PER_MMOL).min(LDL_RRR_CAP);
    let bp_term = (BP_RRR_PER_10MMHG * (sbp_current - sbp_target) / 10.0).min(BP_RRR_CAP);

    (intervention_sum + ldl_term + bp_term).min(TOTAL_RRR_CAP)
}

/// Apply a relative risk reduction to a baseline risk percentage.
///
/// Returns the residual risk, rounded to one decimal place. No floor at
/// zero: the 70-point ceiling keeps `1 - rrr/100` at 0.3 or above for
/// any total this module can produce.
#[must_use]
pub fn apply_rrr(baseline_risk: f64, total_rrr: f64) -> f64 {
    round1(baseline_risk * (1.0 - total_rrr / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::INTERVENTIONS;

    #[test]
    fn test_ldl_identity_without_therapy() {
        let projection = project_ldl(3.5, LipidTherapy::None, &BTreeSet::new());
        assert_eq!(projection.adjusted, 3.5);
        assert_eq!(projection.fin, 3.5);
    }

    #[test]
    fn test_additional_therapy_counts_half() {
        // Atorvastatin 80 mg added on no current therapy: 50% / 2 = 25%.
        let additional = BTreeSet::from([LipidTherapy::Atorvastatin80]);
        let projection = project_ldl(3.5, LipidTherapy::None, &additional);

        assert!((projection.fin - 2.625).abs() < 1e-12);
    }

    #[test]
    fn test_current_therapy_counts_full() {
        let projection = project_ldl(3.5, LipidTherapy::Atorvastatin80, &BTreeSet::new());
        assert!((projection.adjusted - 1.75).abs() < 1e-12);
        assert!((projection.fin - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_stacked_additional_therapies() {
        // On atorvastatin 20 (40%), adding ezetimibe (20/2) and PCSK9 (60/2):
        // adjusted 2.1, additional reduction 40% of that.
        let additional = BTreeSet::from([LipidTherapy::Ezetimibe, LipidTherapy::Pcsk9Inhibitor]);
        let projection = project_ldl(3.5, LipidTherapy::Atorvastatin20, &additional);

        assert!((projection.adjusted - 2.1).abs() < 1e-12);
        assert!((projection.fin - 1.26).abs() < 1e-12);
    }

    #[test]
    fn test_no_selections_yields_zero() {
        let rrr = aggregate_rrr(&BTreeSet::new(), 3.5, 3.5, 145.0, 145.0);
        assert_eq!(rrr, 0.0);
    }

    #[test]
    fn test_ldl_term_from_reference_scenario() {
        let rrr = aggregate_rrr(&BTreeSet::new(), 3.5, 2.625, 145.0, 145.0);
        assert!((rrr - 19.25).abs() < 1e-12);
    }

    #[test]
    fn test_ldl_term_capped() {
        // 6.0 -> 0.9 mmol/L is 112.2 uncapped.
        let rrr = aggregate_rrr(&BTreeSet::new(), 6.0, 0.9, 145.0, 145.0);
        assert_eq!(rrr, LDL_RRR_CAP);
    }

    #[test]
    fn test_bp_term_capped() {
        // 145 -> 120 is 50 points uncapped.
        let rrr = aggregate_rrr(&BTreeSet::new(), 3.5, 3.5, 145.0, 120.0);
        assert_eq!(rrr, BP_RRR_CAP);
    }

    #[test]
    fn test_negative_terms_are_preserved() {
        // Target above current reverses benefit.
        let rrr = aggregate_rrr(&BTreeSet::new(), 3.5, 3.5, 120.0, 130.0);
        assert_eq!(rrr, -20.0);

        // Final LDL above baseline likewise.
        let rrr = aggregate_rrr(&BTreeSet::new(), 3.0, 3.5, 145.0, 145.0);
        assert_eq!(rrr, -11.0);
    }

    #[test]
    fn test_total_capped_at_ceiling() {
        // All eleven interventions sum to 86 lifetime ARR points.
        let all: BTreeSet<_> = INTERVENTIONS.iter().map(|i| i.id).collect();
        assert_eq!(all.len(), 11);

        let rrr = aggregate_rrr(&all, 3.5, 2.625, 145.0, 120.0);
        assert_eq!(rrr, TOTAL_RRR_CAP);

        // The ceiling keeps the multiplicative factor at 0.3 or above, so
        // a residual risk can never go negative.
        assert!(TOTAL_RRR_CAP < 100.0);
    }

    #[test]
    fn test_apply_rrr() {
        assert!((apply_rrr(23.9, 70.0) - 7.2).abs() < 1e-9);
        assert!((apply_rrr(23.9, 0.0) - 23.9).abs() < 1e-9);
        // Negative totals raise the residual above baseline.
        assert!((apply_rrr(20.0, -20.0) - 24.0).abs() < 1e-9);
    }
}
