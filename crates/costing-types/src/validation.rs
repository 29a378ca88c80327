// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Input Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Three-tier static validation of a [`CostingInput`].
//!
//! - Tier 1: field bounds.
//! - Tier 2: family awareness; supplied fields the concept's family does
//!   not use are reported and ignored.
//! - Tier 3: cross-field physics and finance checks.

use tracing::warn;

use crate::concept::{ConfinementFamily, Fuel};
use crate::config::CostingInput;
use crate::error::{CostingError, CostingResult};
use crate::params::{CommonParams, FamilyParams};

/// Thermal efficiency above which a warning is raised.
const ETA_TH_WARN: f64 = 0.65;

/// Non-fatal findings of a successful validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn warn(&mut self, message: String) {
        warn!(target: "costing::validation", "{message}");
        self.warnings.push(message);
    }
}

enum Bound {
    /// (0, 1]
    Efficiency,
    /// [0, 1)
    Fraction,
    /// [0, 1]
    UnitInterval,
    /// > 0
    Positive,
    /// >= 0
    NonNegative,
}

fn engineering_bound(name: &str) -> Bound {
    match name {
        "eta_th" | "eta_p" | "eta_pin" | "eta_de" | "eta_pin1" | "eta_pin2" => Bound::Efficiency,
        "f_sub" | "f_dec" => Bound::Fraction,
        "mn" | "plasma_t" | "axis_t" | "elon" | "t_e" | "z_eff" | "plasma_volume" => {
            Bound::Positive
        }
        _ => Bound::NonNegative,
    }
}

fn check_bound(field: &str, value: f64, bound: Bound) -> CostingResult<()> {
    if !value.is_finite() {
        return Err(CostingError::validation(field, format!("must be finite, got {value}")));
    }
    let (ok, expected) = match bound {
        Bound::Efficiency => (value > 0.0 && value <= 1.0, "in (0, 1]"),
        Bound::Fraction => ((0.0..1.0).contains(&value), "in [0, 1)"),
        Bound::UnitInterval => ((0.0..=1.0).contains(&value), "in [0, 1]"),
        Bound::Positive => (value > 0.0, "> 0"),
        Bound::NonNegative => (value >= 0.0, ">= 0"),
    };
    if ok {
        Ok(())
    } else {
        Err(CostingError::validation(field, format!("must be {expected}, got {value}")))
    }
}

/// Tier 1: field-level bounds.
pub fn check_fields(input: &CostingInput) -> CostingResult<()> {
    check_bound("net_electric_mw", input.net_electric_mw, Bound::Positive)?;
    check_bound("availability", input.availability, Bound::Efficiency)?;
    check_bound("lifetime_yr", input.lifetime_yr, Bound::Positive)?;
    if input.n_mod < 1 {
        return Err(CostingError::validation("n_mod", "must be at least 1"));
    }
    check_bound("construction_time_yr", input.construction_time_yr, Bound::Positive)?;
    check_bound("interest_rate", input.interest_rate, Bound::Positive)?;
    if !input.inflation_rate.is_finite() || input.inflation_rate <= -1.0 {
        return Err(CostingError::validation(
            "inflation_rate",
            format!("must be finite and > -1, got {}", input.inflation_rate),
        ));
    }
    for (name, value) in input.engineering.supplied() {
        check_bound(name, value, engineering_bound(name))?;
    }
    for (name, value) in input.burn.supplied() {
        check_bound(name, value, Bound::UnitInterval)?;
    }
    for (key, value) in input.cost_overrides.iter().chain(&input.costing_overrides) {
        if !value.is_finite() {
            return Err(CostingError::validation(key, format!("override must be finite, got {value}")));
        }
    }
    Ok(())
}

/// Tier 2: names of supplied engineering fields the family does not use.
pub fn inapplicable_fields(input: &CostingInput) -> Vec<&'static str> {
    let family = input.concept.family();
    let family_fields = FamilyParams::<f64>::fields_of(family);
    input
        .engineering
        .supplied()
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| !CommonParams::<f64>::FIELDS.contains(name) && !family_fields.contains(name))
        .collect()
}

/// Tier 3: cross-field checks. Errors for combinations that would corrupt
/// the financing math; warnings for implausible but computable physics.
pub fn check_cross_fields(input: &CostingInput, report: &mut ValidationReport) -> CostingResult<()> {
    let real_rate = (1.0 + input.interest_rate) / (1.0 + input.inflation_rate) - 1.0;
    if real_rate <= 0.0 {
        return Err(CostingError::validation(
            "interest_rate",
            format!(
                "real discount rate must be positive (interest {} <= inflation {})",
                input.interest_rate, input.inflation_rate
            ),
        ));
    }
    if let Some(eta_th) = input.engineering.eta_th {
        if eta_th > ETA_TH_WARN {
            report.warn(format!(
                "eta_th = {eta_th} exceeds {ETA_TH_WARN}; no current thermal cycle reaches this"
            ));
        }
    }
    if input.fuel == Fuel::PB11 {
        if let Some(mn) = input.engineering.mn {
            if mn > 1.0 {
                report.warn(format!(
                    "mn = {mn} has no effect for aneutronic pB11 (no neutrons to multiply)"
                ));
            }
        }
    }
    if input.fuel != Fuel::DD && (input.burn.dd_f_t.is_some() || input.burn.dd_f_he3.is_some()) {
        report.warn(format!("DD burn fractions are ignored for fuel {}", input.fuel));
    }
    if input.fuel != Fuel::DHe3
        && (input.burn.dhe3_dd_frac.is_some() || input.burn.dhe3_f_t.is_some())
    {
        report.warn(format!("DHe3 burn fractions are ignored for fuel {}", input.fuel));
    }
    if input.concept.family() == ConfinementFamily::Mfe {
        if let (Some(f_dec), None) = (input.engineering.f_dec, input.engineering.eta_de) {
            if f_dec > 0.0 {
                report.warn(format!(
                    "f_dec = {f_dec} supplied without eta_de; the template efficiency is used"
                ));
            }
        }
    }
    Ok(())
}

/// Run all three tiers.
pub fn validate(input: &CostingInput) -> CostingResult<ValidationReport> {
    check_fields(input)?;
    let mut report = ValidationReport::default();
    for name in inapplicable_fields(input) {
        report.warn(format!(
            "{name} does not apply to {} concept {}; ignored",
            input.concept.family(),
            input.concept
        ));
    }
    check_cross_fields(input, &mut report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::ConfinementConcept;

    fn tokamak() -> CostingInput {
        CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, 1000.0)
    }

    fn field_of(err: CostingError) -> String {
        match err {
            CostingError::Validation { field, .. } => field,
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_minimal_input() {
        let report = validate(&tokamak()).unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_net_electric_must_be_positive() {
        for bad in [-100.0, 0.0] {
            let mut input = tokamak();
            input.net_electric_mw = bad;
            assert_eq!(field_of(validate(&input).unwrap_err()), "net_electric_mw");
        }
    }

    #[test]
    fn test_availability_range() {
        for bad in [0.0, 1.5] {
            let mut input = tokamak();
            input.availability = bad;
            assert_eq!(field_of(validate(&input).unwrap_err()), "availability");
        }
    }

    #[test]
    fn test_customer_bounds() {
        let mut input = tokamak();
        input.lifetime_yr = -5.0;
        assert_eq!(field_of(validate(&input).unwrap_err()), "lifetime_yr");

        let mut input = tokamak();
        input.n_mod = 0;
        assert_eq!(field_of(validate(&input).unwrap_err()), "n_mod");

        let mut input = tokamak();
        input.interest_rate = -0.01;
        assert_eq!(field_of(validate(&input).unwrap_err()), "interest_rate");

        let mut input = tokamak();
        input.construction_time_yr = 0.0;
        assert_eq!(field_of(validate(&input).unwrap_err()), "construction_time_yr");
    }

    #[test]
    fn test_deflation_is_valid() {
        let mut input = tokamak();
        input.inflation_rate = -0.01;
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_efficiency_bounds() {
        let mut input = tokamak();
        input.engineering.eta_th = Some(1.2);
        assert_eq!(field_of(validate(&input).unwrap_err()), "eta_th");

        let mut input = tokamak();
        input.engineering.f_sub = Some(1.0);
        assert_eq!(field_of(validate(&input).unwrap_err()), "f_sub");

        let mut input = tokamak();
        input.engineering.p_coils = Some(f64::NAN);
        assert_eq!(field_of(validate(&input).unwrap_err()), "p_coils");
    }

    #[test]
    fn test_inapplicable_fields_warn() {
        let mut input = CostingInput::new(ConfinementConcept::LaserIfe, Fuel::DT, 1000.0);
        input.engineering.p_input = Some(40.0);
        input.engineering.eta_pin1 = Some(0.1);
        assert_eq!(inapplicable_fields(&input), vec!["p_input"]);
        let report = validate(&input).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("p_input"));
    }

    #[test]
    fn test_shared_fields_apply_to_mif() {
        let mut input = CostingInput::new(ConfinementConcept::MagTarget, Fuel::DT, 1000.0);
        input.engineering.eta_pin = Some(0.3);
        input.engineering.p_coils = Some(2.0);
        input.engineering.p_target = Some(2.0);
        assert!(inapplicable_fields(&input).is_empty());
    }

    #[test]
    fn test_real_rate_must_be_positive() {
        let mut input = tokamak();
        input.interest_rate = 0.02;
        input.inflation_rate = 0.03;
        assert_eq!(field_of(validate(&input).unwrap_err()), "interest_rate");
    }

    #[test]
    fn test_cross_field_warnings() {
        let mut input = CostingInput::new(ConfinementConcept::Tokamak, Fuel::PB11, 1000.0);
        input.engineering.eta_th = Some(0.7);
        input.engineering.mn = Some(1.2);
        input.burn.dd_f_t = Some(0.5);
        let report = validate(&input).unwrap();
        assert_eq!(report.warnings.len(), 3, "{:?}", report.warnings);
    }
}
