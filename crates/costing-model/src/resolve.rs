// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Parameter Resolution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Merge a sparse request over its concept template.

use costing_types::config::CostingInput;
use costing_types::params::{BurnFractions, FinancialParams, ResolvedParams};

use crate::templates::defaults;

/// Supplied value for `name`, or `default`.
fn pick(supplied: &[(&'static str, f64)], name: &str, default: f64) -> f64 {
    supplied
        .iter()
        .find(|(field, _)| *field == name)
        .map_or(default, |&(_, value)| value)
}

/// Fully populated parameters for `input`.
///
/// Caller values win field by field. Supplied fields that the concept's
/// family does not have are dropped here; the validator reports them.
pub fn resolve(input: &CostingInput) -> ResolvedParams {
    let engineering_in = input.engineering.supplied();
    let engineering = defaults(input.concept).map(&mut |name, v| pick(&engineering_in, name, v));

    let burn_in = input.burn.supplied();
    let burn = BurnFractions::default().map(&mut |name, v| pick(&burn_in, name, v));

    ResolvedParams {
        concept: input.concept,
        fuel: input.fuel,
        n_mod: input.n_mod,
        noak: input.noak,
        net_electric_mw: input.net_electric_mw,
        financial: FinancialParams {
            availability: input.availability,
            lifetime_yr: input.lifetime_yr,
            construction_time_yr: input.construction_time_yr,
            interest_rate: input.interest_rate,
            inflation_rate: input.inflation_rate,
        },
        engineering,
        burn,
        cost_overrides: input.cost_overrides.clone(),
        costing_overrides: input.costing_overrides.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costing_types::params::FamilyParams;
    use costing_types::{ConfinementConcept, Fuel};

    #[test]
    fn test_template_fills_everything() {
        let input = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, 1_000.0);
        let params = resolve(&input);
        assert_eq!(params.engineering, defaults(ConfinementConcept::Tokamak));
        assert_eq!(params.burn, BurnFractions::default());
        assert_eq!(params.financial.lifetime_yr, 40.0);
    }

    #[test]
    fn test_caller_values_win() {
        let mut input = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DD, 1_000.0);
        input.engineering.eta_th = Some(0.55);
        input.engineering.b = Some(12.0);
        input.burn.dd_f_t = Some(0.5);
        let params = resolve(&input);
        assert_eq!(params.engineering.common.eta_th, 0.55);
        match params.engineering.family {
            FamilyParams::Mfe(m) => {
                assert_eq!(m.b, 12.0);
                assert_eq!(m.p_input, 50.0);
            }
            other => panic!("expected MFE parameters, got {other:?}"),
        }
        assert_eq!(params.burn.dd_f_t, 0.5);
        assert_eq!(params.burn.dd_f_he3, BurnFractions::default().dd_f_he3);
    }

    #[test]
    fn test_inapplicable_fields_dropped() {
        let mut input = CostingInput::new(ConfinementConcept::LaserIfe, Fuel::DT, 1_000.0);
        input.engineering.p_input = Some(40.0);
        input.engineering.eta_pin1 = Some(0.12);
        let params = resolve(&input);
        let names: Vec<_> = params.scalars().into_iter().map(|(n, _)| n).collect();
        assert!(!names.contains(&"p_input"));
        match params.engineering.family {
            FamilyParams::Ife(i) => assert_eq!(i.eta_pin1, 0.12),
            other => panic!("expected IFE parameters, got {other:?}"),
        }
    }
}
