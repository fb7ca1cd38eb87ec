//! Patient profile types for cardiovascular risk estimation.
//!
//! Field ranges match the SMART calculator's input form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Biological sex as encoded by the SMART model (male carries a fixed
/// additive weight in the linear predictor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// A vascular territory with established disease.
///
/// The SMART model counts affected territories (0 to 3); modelling them as
/// a set of identifiers keeps the count in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VascularBed {
    /// Coronary artery disease
    Coronary,
    /// Cerebrovascular disease
    Cerebrovascular,
    /// Peripheral artery disease
    Peripheral,
}

impl VascularBed {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Coronary => "Coronary artery disease",
            Self::Cerebrovascular => "Cerebrovascular disease",
            Self::Peripheral => "Peripheral artery disease",
        }
    }
}

/// Clinical parameters for one patient.
///
/// A fresh profile is constructed per calculation run; nothing is mutated
/// after construction and no state survives between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years (30-90)
    pub age: f64,

    /// Biological sex
    pub sex: Sex,

    /// Currently smoking
    pub smoker: bool,

    /// Diabetes diagnosed
    pub diabetes: bool,

    /// Estimated glomerular filtration rate in mL/min/1.73m2 (15-120)
    pub egfr: f64,

    /// Total cholesterol in mmol/L (2.0-10.0)
    pub total_chol: f64,

    /// HDL cholesterol in mmol/L (0.5-3.0)
    pub hdl: f64,

    /// hs-CRP in mg/L (0.1-20.0); values above 10 suggest acute
    /// inflammation and are flagged for the presentation layer
    pub crp: f64,

    /// Vascular territories with established disease
    pub vascular_beds: BTreeSet<VascularBed>,

    /// Current systolic blood pressure in mmHg (80-220)
    pub sbp_current: f64,

    /// Target systolic blood pressure in mmHg (80-220)
    pub sbp_target: f64,

    /// Baseline LDL-C in mmol/L (0.5-6.0), before any therapy adjustment
    pub baseline_ldl: f64,
}

impl PatientProfile {
    /// Count of affected vascular territories (0 to 3).
    #[must_use]
    pub fn vascular_bed_count(&self) -> usize {
        self.vascular_beds.len()
    }

    /// Validate that all parameters are within expected ranges.
    ///
    /// The pure estimators trust their input; this check belongs to the
    /// input-collection boundary and is called there.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(30.0..=90.0).contains(&self.age) {
            errors.push(format!("Age {} out of range [30, 90]", self.age));
        }
        if !(15.0..=120.0).contains(&self.egfr) {
            errors.push(format!("eGFR {} out of range [15, 120]", self.egfr));
        }
        if !(2.0..=10.0).contains(&self.total_chol) {
            errors.push(format!(
                "Total cholesterol {} out of range [2.0, 10.0]",
                self.total_chol
            ));
        }
        if !(0.5..=3.0).contains(&self.hdl) {
            errors.push(format!("HDL {} out of range [0.5, 3.0]", self.hdl));
        }
        if !(0.1..=20.0).contains(&self.crp) {
            errors.push(format!("hs-CRP {} out of range [0.1, 20.0]", self.crp));
        }
        if !(80.0..=220.0).contains(&self.sbp_current) {
            errors.push(format!(
                "Current SBP {} out of range [80, 220]",
                self.sbp_current
            ));
        }
        if !(80.0..=220.0).contains(&self.sbp_target) {
            errors.push(format!(
                "Target SBP {} out of range [80, 220]",
                self.sbp_target
            ));
        }
        if !(0.5..=6.0).contains(&self.baseline_ldl) {
            errors.push(format!(
                "Baseline LDL-C {} out of range [0.5, 6.0]",
                self.baseline_ldl
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for PatientProfile {
    /// The input form's default values.
    fn default() -> Self {
        Self {
            age: 60.0,
            sex: Sex::Male,
            smoker: false,
            diabetes: false,
            egfr: 80.0,
            total_chol: 5.0,
            hdl: 1.0,
            crp: 2.0,
            vascular_beds: BTreeSet::new(),
            sbp_current: 145.0,
            sbp_target: 120.0,
            baseline_ldl: 3.5,
        }
    }
}
