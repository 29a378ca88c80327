// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Input Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::concept::{ConfinementConcept, Fuel};
use crate::error::CostingResult;

/// Costing request for one plant.
///
/// Required: `concept`, `fuel`, `net_electric_mw`. Customer fields carry
/// defaults; engineering fields left `None` come from the concept template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostingInput {
    pub concept: ConfinementConcept,
    pub fuel: Fuel,
    pub net_electric_mw: f64,

    #[serde(default = "default_availability")]
    pub availability: f64,
    #[serde(default = "default_lifetime_yr")]
    pub lifetime_yr: f64,
    #[serde(default = "default_n_mod")]
    pub n_mod: u32,
    #[serde(default = "default_construction_time_yr")]
    pub construction_time_yr: f64,
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,
    #[serde(default = "default_noak")]
    pub noak: bool,
    #[serde(default)]
    pub cost_overrides: BTreeMap<String, f64>,
    #[serde(default)]
    pub costing_overrides: BTreeMap<String, f64>,

    #[serde(flatten)]
    pub engineering: EngineeringInputs,

    #[serde(flatten)]
    pub burn: BurnInputs,
}

fn default_availability() -> f64 {
    0.85
}
fn default_lifetime_yr() -> f64 {
    40.0
}
fn default_n_mod() -> u32 {
    1
}
fn default_construction_time_yr() -> f64 {
    6.0
}
fn default_interest_rate() -> f64 {
    0.07
}
fn default_inflation_rate() -> f64 {
    0.02
}
fn default_noak() -> bool {
    true
}

/// Sparse engineering record. `None` means "use the template".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineeringInputs {
    // Common
    pub mn: Option<f64>,
    pub eta_th: Option<f64>,
    pub eta_p: Option<f64>,
    pub f_sub: Option<f64>,
    pub p_pump: Option<f64>,
    pub p_trit: Option<f64>,
    pub p_house: Option<f64>,
    pub p_cryo: Option<f64>,
    pub plasma_t: Option<f64>,
    pub blanket_t: Option<f64>,
    pub ht_shield_t: Option<f64>,
    pub structure_t: Option<f64>,
    pub vessel_t: Option<f64>,

    // MFE (eta_pin and p_coils are shared with MIF)
    pub p_input: Option<f64>,
    pub eta_pin: Option<f64>,
    pub eta_de: Option<f64>,
    pub f_dec: Option<f64>,
    pub p_coils: Option<f64>,
    pub p_cool: Option<f64>,
    pub axis_t: Option<f64>,
    pub elon: Option<f64>,
    pub n_e: Option<f64>,
    #[serde(alias = "T_e")]
    pub t_e: Option<f64>,
    #[serde(alias = "Z_eff")]
    pub z_eff: Option<f64>,
    pub plasma_volume: Option<f64>,
    #[serde(alias = "B")]
    pub b: Option<f64>,

    // IFE (p_target is shared with MIF)
    pub p_implosion: Option<f64>,
    pub p_ignition: Option<f64>,
    pub eta_pin1: Option<f64>,
    pub eta_pin2: Option<f64>,
    pub p_target: Option<f64>,

    // MIF
    pub p_driver: Option<f64>,
}

impl EngineeringInputs {
    /// Every explicitly supplied field, by name.
    pub fn supplied(&self) -> Vec<(&'static str, f64)> {
        let all = [
            ("mn", self.mn),
            ("eta_th", self.eta_th),
            ("eta_p", self.eta_p),
            ("f_sub", self.f_sub),
            ("p_pump", self.p_pump),
            ("p_trit", self.p_trit),
            ("p_house", self.p_house),
            ("p_cryo", self.p_cryo),
            ("plasma_t", self.plasma_t),
            ("blanket_t", self.blanket_t),
            ("ht_shield_t", self.ht_shield_t),
            ("structure_t", self.structure_t),
            ("vessel_t", self.vessel_t),
            ("p_input", self.p_input),
            ("eta_pin", self.eta_pin),
            ("eta_de", self.eta_de),
            ("f_dec", self.f_dec),
            ("p_coils", self.p_coils),
            ("p_cool", self.p_cool),
            ("axis_t", self.axis_t),
            ("elon", self.elon),
            ("n_e", self.n_e),
            ("t_e", self.t_e),
            ("z_eff", self.z_eff),
            ("plasma_volume", self.plasma_volume),
            ("b", self.b),
            ("p_implosion", self.p_implosion),
            ("p_ignition", self.p_ignition),
            ("eta_pin1", self.eta_pin1),
            ("eta_pin2", self.eta_pin2),
            ("p_target", self.p_target),
            ("p_driver", self.p_driver),
        ];
        all.into_iter()
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .collect()
    }
}

/// Optional burn-mix overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnInputs {
    pub dd_f_t: Option<f64>,
    pub dd_f_he3: Option<f64>,
    pub dhe3_dd_frac: Option<f64>,
    pub dhe3_f_t: Option<f64>,
}

impl BurnInputs {
    pub fn supplied(&self) -> Vec<(&'static str, f64)> {
        [
            ("dd_f_t", self.dd_f_t),
            ("dd_f_he3", self.dd_f_he3),
            ("dhe3_dd_frac", self.dhe3_dd_frac),
            ("dhe3_f_t", self.dhe3_f_t),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
        .collect()
    }
}

impl CostingInput {
    /// Minimal request: every customer field at its default, every
    /// engineering field from the template.
    pub fn new(concept: ConfinementConcept, fuel: Fuel, net_electric_mw: f64) -> Self {
        CostingInput {
            concept,
            fuel,
            net_electric_mw,
            availability: default_availability(),
            lifetime_yr: default_lifetime_yr(),
            n_mod: default_n_mod(),
            construction_time_yr: default_construction_time_yr(),
            interest_rate: default_interest_rate(),
            inflation_rate: default_inflation_rate(),
            noak: default_noak(),
            cost_overrides: BTreeMap::new(),
            costing_overrides: BTreeMap::new(),
            engineering: EngineeringInputs::default(),
            burn: BurnInputs::default(),
        }
    }

    /// Load from a JSON file.
    pub fn from_file(path: &str) -> CostingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let input: Self = serde_json::from_str(&contents)?;
        Ok(input)
    }

    pub fn to_json(&self) -> CostingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
