//! Static reference tables: interventions and lipid-lowering therapies.
//!
//! Both tables are fixed domain constants. The intervention table is an
//! ordered sequence (display order is part of the contract); entries are
//! addressed by identifier, never by position.

use serde::{Deserialize, Serialize};

/// Identifier for one intervention record.
///
/// Selections travel as a set of these identifiers, so an out-of-table
/// selection is unrepresentable and no ordering coupling exists between
/// the selection and the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterventionId {
    SmokingCessation,
    Antiplatelet,
    BpControl,
    Semaglutide,
    WeightLoss,
    Empagliflozin,
    IcosapentEthyl,
    MediterraneanDiet,
    PhysicalActivity,
    AlcoholModeration,
    StressReduction,
}

/// One intervention with its absolute risk reduction estimates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Intervention {
    pub id: InterventionId,
    /// Display label
    pub name: &'static str,
    /// Lifetime absolute risk reduction in percentage points
    pub arr_lifetime: u8,
    /// 5-year absolute risk reduction in percentage points
    pub arr_5yr: u8,
}

/// The intervention table, in display order.
pub const INTERVENTIONS: [Intervention; 11] = [
    Intervention {
        id: InterventionId::SmokingCessation,
        name: "Smoking cessation",
        arr_lifetime: 17,
        arr_5yr: 5,
    },
    Intervention {
        id: InterventionId::Antiplatelet,
        name: "Antiplatelet (ASA or clopidogrel)",
        arr_lifetime: 6,
        arr_5yr: 2,
    },
    Intervention {
        id: InterventionId::BpControl,
        name: "BP control (ACEi/ARB ± CCB)",
        arr_lifetime: 12,
        arr_5yr: 4,
    },
    Intervention {
        id: InterventionId::Semaglutide,
        name: "Semaglutide 2.4 mg",
        arr_lifetime: 4,
        arr_5yr: 1,
    },
    Intervention {
        id: InterventionId::WeightLoss,
        name: "Weight loss to ideal BMI",
        arr_lifetime: 10,
        arr_5yr: 3,
    },
    Intervention {
        id: InterventionId::Empagliflozin,
        name: "Empagliflozin",
        arr_lifetime: 6,
        arr_5yr: 2,
    },
    Intervention {
        id: InterventionId::IcosapentEthyl,
        name: "Icosapent ethyl (TG ≥1.5)",
        arr_lifetime: 5,
        arr_5yr: 2,
    },
    Intervention {
        id: InterventionId::MediterraneanDiet,
        name: "Mediterranean diet",
        arr_lifetime: 9,
        arr_5yr: 3,
    },
    Intervention {
        id: InterventionId::PhysicalActivity,
        name: "Physical activity",
        arr_lifetime: 9,
        arr_5yr: 3,
    },
    Intervention {
        id: InterventionId::AlcoholModeration,
        name: "Alcohol moderation",
        arr_lifetime: 5,
        arr_5yr: 2,
    },
    Intervention {
        id: InterventionId::StressReduction,
        name: "Stress reduction",
        arr_lifetime: 3,
        arr_5yr: 1,
    },
];

/// Look up an intervention record by identifier.
#[must_use]
pub fn intervention(id: InterventionId) -> &'static Intervention {
    // Every identifier has exactly one table entry.
    INTERVENTIONS
        .iter()
        .find(|i| i.id == id)
        .unwrap_or_else(|| unreachable!("intervention table covers every id"))
}

/// A lipid-lowering therapy regimen and its expected LDL-C reduction.
///
/// `None` is the sentinel for no current therapy (0% reduction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LipidTherapy {
    None,
    Atorvastatin20,
    Atorvastatin80,
    Rosuvastatin10,
    Rosuvastatin20To40,
    Simvastatin40,
    Ezetimibe,
    Pcsk9Inhibitor,
}

impl LipidTherapy {
    /// All therapies, in display order.
    pub const ALL: [LipidTherapy; 8] = [
        Self::None,
        Self::Atorvastatin20,
        Self::Atorvastatin80,
        Self::Rosuvastatin10,
        Self::Rosuvastatin20To40,
        Self::Simvastatin40,
        Self::Ezetimibe,
        Self::Pcsk9Inhibitor,
    ];

    /// Expected LDL-C reduction in percent when on this regimen.
    #[must_use]
    pub fn ldl_reduction_pct(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Atorvastatin20 => 40.0,
            Self::Atorvastatin80 => 50.0,
            Self::Rosuvastatin10 => 40.0,
            Self::Rosuvastatin20To40 => 55.0,
            Self::Simvastatin40 => 35.0,
            Self::Ezetimibe => 20.0,
            Self::Pcsk9Inhibitor => 60.0,
        }
    }

    /// Get a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Atorvastatin20 => "Atorvastatin 20 mg",
            Self::Atorvastatin80 => "Atorvastatin 80 mg",
            Self::Rosuvastatin10 => "Rosuvastatin 10 mg",
            Self::Rosuvastatin20To40 => "Rosuvastatin 20–40 mg",
            Self::Simvastatin40 => "Simvastatin 40 mg",
            Self::Ezetimibe => "Ezetimibe alone",
            Self::Pcsk9Inhibitor => "PCSK9 inhibitor",
        }
    }
}

impl std::fmt::Display for LipidTherapy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
