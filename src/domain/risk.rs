//! Baseline SMART risk estimator.
//!
//! Encodes the SMART 10-year cardiovascular event-risk formula: a
//! fixed-weight linear predictor over clinical parameters, transformed
//! through a baseline-survival exponential hazard.
//!
//! The weights and the survival constant are published domain constants;
//! the estimator reproduces them exactly and performs no range checking
//! of its own (validated input is the caller's contract).

use crate::domain::{PatientProfile, Sex};

/// Linear predictor weights.
const W_AGE: f64 = 0.064;
const W_MALE: f64 = 0.34;
const W_SBP: f64 = 0.02;
const W_TOTAL_CHOL: f64 = 0.25;
const W_HDL: f64 = -0.25;
const W_SMOKING: f64 = 0.44;
const W_DIABETES: f64 = 0.51;
const W_EGFR_PER_10: f64 = -0.2;
const W_CRP_LOG: f64 = 0.25;
const W_VASCULAR_BED: f64 = 0.4;

/// 10-year baseline survival of the reference population.
const BASELINE_SURVIVAL: f64 = 0.900;

/// Centering offset applied to the linear predictor before the hazard
/// transform.
const LP_OFFSET: f64 = 5.8;

/// Weighted sum of risk factors feeding the hazard transform.
fn linear_predictor(profile: &PatientProfile) -> f64 {
    let sex_val = match profile.sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
    };
    let smoking_val = if profile.smoker { 1.0 } else { 0.0 };
    let diabetes_val = if profile.diabetes { 1.0 } else { 0.0 };

    // ln(0) guard: a zero or negative CRP contributes nothing. Validated
    // input keeps CRP at 0.1 or above, so this branch is inert in practice.
    let crp_log = if profile.crp > 0.0 {
        (profile.crp + 1.0).ln()
    } else {
        0.0
    };

    W_AGE * profile.age
        + W_MALE * sex_val
        + W_SBP * profile.sbp_current
        + W_TOTAL_CHOL * profile.total_chol
        + W_HDL * profile.hdl
        + W_SMOKING * smoking_val
        + W_DIABETES * diabetes_val
        + W_EGFR_PER_10 * (profile.egfr / 10.0)
        + W_CRP_LOG * crp_log
        + W_VASCULAR_BED * profile.vascular_bed_count() as f64
}

/// Estimate the baseline 10-year cardiovascular event risk.
///
/// Returns a percentage in [0, 100), rounded to one decimal place.
#[must_use]
pub fn estimate_risk(profile: &PatientProfile) -> f64 {
    let lp = linear_predictor(profile);
    let risk = 1.0 - BASELINE_SURVIVAL.powf((lp - LP_OFFSET).exp());
    round1(risk * 100.0)
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VascularBed;

    #[test]
    fn test_reference_scenario() {
        // Age 60 male, SBP 145, chol 5.0, HDL 1.0, CRP 2.0, eGFR 80,
        // non-smoker, no diabetes, no vascular disease.
        let profile = PatientProfile::default();

        let lp = linear_predictor(&profile);
        assert!((lp - 6.754_653_072_167_028).abs() < 1e-12);

        let risk = estimate_risk(&profile);
        assert!((risk - 23.9).abs() < 1e-9);
    }

    #[test]
    fn test_risk_is_a_rounded_percentage() {
        let profiles = [
            PatientProfile::default(),
            PatientProfile {
                age: 80.0,
                smoker: true,
                diabetes: true,
                vascular_beds: [VascularBed::Coronary].into(),
                ..Default::default()
            },
            PatientProfile {
                age: 30.0,
                sex: crate::domain::Sex::Female,
                sbp_current: 80.0,
                ..Default::default()
            },
        ];

        for profile in &profiles {
            let risk = estimate_risk(profile);
            assert!((0.0..100.0).contains(&risk), "risk {risk} out of range");
            // One decimal place exactly.
            assert!((risk * 10.0 - (risk * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gradient_signs() {
        let base = PatientProfile::default();
        let lp0 = linear_predictor(&base);

        let increasing: [PatientProfile; 7] = [
            PatientProfile {
                age: base.age + 5.0,
                ..base.clone()
            },
            PatientProfile {
                sbp_current: base.sbp_current + 10.0,
                ..base.clone()
            },
            PatientProfile {
                total_chol: base.total_chol + 1.0,
                ..base.clone()
            },
            PatientProfile {
                smoker: true,
                ..base.clone()
            },
            PatientProfile {
                diabetes: true,
                ..base.clone()
            },
            PatientProfile {
                crp: base.crp + 3.0,
                ..base.clone()
            },
            PatientProfile {
                vascular_beds: [VascularBed::Coronary].into(),
                ..base.clone()
            },
        ];
        for perturbed in &increasing {
            assert!(
                linear_predictor(perturbed) > lp0,
                "expected higher predictor for {perturbed:?}"
            );
        }

        let decreasing: [PatientProfile; 2] = [
            PatientProfile {
                hdl: base.hdl + 0.5,
                ..base.clone()
            },
            PatientProfile {
                egfr: base.egfr + 20.0,
                ..base.clone()
            },
        ];
        for perturbed in &decreasing {
            assert!(
                linear_predictor(perturbed) < lp0,
                "expected lower predictor for {perturbed:?}"
            );
        }
    }

    #[test]
    fn test_female_carries_no_sex_weight() {
        let male = PatientProfile::default();
        let female = PatientProfile {
            sex: crate::domain::Sex::Female,
            ..male.clone()
        };

        let delta = linear_predictor(&male) - linear_predictor(&female);
        assert!((delta - W_MALE).abs() < 1e-12);
    }

    #[test]
    fn test_crp_guard() {
        // Out-of-contract CRP values must not reach the logarithm.
        let zero_crp = PatientProfile {
            crp: 0.0,
            ..Default::default()
        };
        let negative_crp = PatientProfile {
            crp: -4.0,
            ..Default::default()
        };

        assert!(estimate_risk(&zero_crp).is_finite());
        assert_eq!(estimate_risk(&zero_crp), estimate_risk(&negative_crp));
    }
}
