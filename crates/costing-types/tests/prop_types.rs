// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Property-Based Tests (proptest) for costing-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for costing-types using proptest.
//!
//! Covers: input JSON roundtrip, Tier-1 bounds, parameter re-typing.

use costing_types::config::CostingInput;
use costing_types::params::{BurnFractions, FinancialParams};
use costing_types::validation::validate;
use costing_types::{ConfinementConcept, Fuel};
use proptest::prelude::*;

fn concept_strategy() -> impl Strategy<Value = ConfinementConcept> {
    (0usize..ConfinementConcept::ALL.len()).prop_map(|i| ConfinementConcept::ALL[i])
}

fn fuel_strategy() -> impl Strategy<Value = Fuel> {
    (0usize..Fuel::ALL.len()).prop_map(|i| Fuel::ALL[i])
}

// ── Input Record ─────────────────────────────────────────────────────

proptest! {
    /// Any in-bounds request survives a JSON roundtrip unchanged.
    #[test]
    fn input_json_roundtrip(
        concept in concept_strategy(),
        fuel in fuel_strategy(),
        net in 1.0f64..5_000.0,
        availability in 0.05f64..1.0,
        lifetime in 5.0f64..80.0,
        n_mod in 1u32..8,
        eta_th in 0.2f64..0.6,
    ) {
        let mut input = CostingInput::new(concept, fuel, net);
        input.availability = availability;
        input.lifetime_yr = lifetime;
        input.n_mod = n_mod;
        input.engineering.eta_th = Some(eta_th);

        let json = input.to_json().unwrap();
        let back: CostingInput = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, input);
    }

    /// Tier 1 accepts exactly the positive net outputs.
    #[test]
    fn net_electric_sign_decides_validity(net in -2_000.0f64..2_000.0) {
        let input = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, net);
        prop_assert_eq!(validate(&input).is_ok(), net > 0.0);
    }

    /// Efficiencies outside (0, 1] are always rejected.
    #[test]
    fn out_of_range_efficiency_rejected(eta in prop_oneof![-1.0f64..=0.0, 1.0001f64..3.0]) {
        let mut input = CostingInput::new(ConfinementConcept::LaserIfe, Fuel::DT, 1000.0);
        input.engineering.eta_pin1 = Some(eta);
        prop_assert!(validate(&input).is_err());
    }
}

// ── Parameter Re-typing ──────────────────────────────────────────────

proptest! {
    /// Mapping with the identity preserves every field.
    #[test]
    fn identity_map_preserves_financials(
        availability in 0.1f64..1.0,
        lifetime in 1.0f64..60.0,
        t_build in 1.0f64..12.0,
        i in 0.01f64..0.2,
        g in -0.05f64..0.05,
    ) {
        let fin = FinancialParams {
            availability,
            lifetime_yr: lifetime,
            construction_time_yr: t_build,
            interest_rate: i,
            inflation_rate: g,
        };
        let same = fin.map(&mut |_, v| v);
        prop_assert_eq!(same, fin);
        prop_assert_eq!(fin.scalars().len(), FinancialParams::<f64>::FIELDS.len());
    }
}

#[test]
fn burn_defaults_in_unit_interval() {
    for (_, v) in BurnFractions::default().scalars() {
        assert!((0.0..=1.0).contains(&v), "burn fraction out of range: {v}");
    }
}
