// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Cost Ledger
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! CAS ledger: capital accounts, annual charges and LCOE.
//!
//! Power-dependent accounts scale with the per-module power table times
//! the module count. Site-level items (permits, studies, fuel handling,
//! I&C, digital twin) are counted once per plant.

use tracing::debug;

use costing_physics::fuel::reactant_demand;
use costing_physics::geometry::RadialBuild;
use costing_types::accounts::{CostAccount, CostBreakdown};
use costing_types::constants::{
    MEV_TO_JOULES, M_BORON11_KG, M_DEUTERIUM_KG, M_HELIUM3_KG, M_LITHIUM6_KG, M_PROTON_KG,
    SECONDS_PER_YEAR,
};
use costing_types::params::{FamilyParams, ResolvedParams};
use costing_types::scalar::{constant, Scalar};
use costing_types::state::PowerTable;
use costing_types::{CostingError, CostingResult};

use crate::constants::CostingConstants;
use crate::financing::{
    annual_energy_mwh, capital_recovery_factor, check_financial, construction_interest_fraction,
    levelized_cost, real_rate,
};
use crate::overrides::AccountOverrides;

/// Maps a power table and resolved parameters to a [`CostBreakdown`].
pub struct CostLayer<'a> {
    constants: &'a CostingConstants,
    overrides: &'a AccountOverrides,
}

impl<'a> CostLayer<'a> {
    pub fn new(constants: &'a CostingConstants, overrides: &'a AccountOverrides) -> Self {
        Self {
            constants,
            overrides,
        }
    }

    /// Annual reactant cost [M$/yr].
    fn annual_fuel_cost<D: Scalar>(&self, params: &ResolvedParams<D>, table: &PowerTable<D>, n: D) -> D {
        let c = self.constants;
        let demand = reactant_demand(params.fuel, &params.burn);
        let mev_per_yr = table.p_fus
            * n
            * params.financial.availability
            * (1.0e6 * SECONDS_PER_YEAR / MEV_TO_JOULES);
        let usd_per_mev = demand.deuterium * (M_DEUTERIUM_KG * c.deuterium_price_per_kg)
            + demand.lithium6 * (M_LITHIUM6_KG * c.lithium6_price_per_kg)
            + demand.helium3 * (M_HELIUM3_KG * c.helium3_price_per_kg)
            + demand.protium * (M_PROTON_KG * c.protium_price_per_kg)
            + demand.boron11 * (M_BORON11_KG * c.boron11_price_per_kg);
        mev_per_yr * usd_per_mev * 1.0e-6_f64
    }

    /// Full ledger. Unchecked; see [`CostLayer::evaluate_checked`].
    pub fn evaluate<D: Scalar>(
        &self,
        params: &ResolvedParams<D>,
        table: &PowerTable<D>,
        build: &RadialBuild<D>,
    ) -> CostBreakdown<D> {
        use CostAccount::*;

        let c = self.constants;
        let pin = |account: CostAccount, value: D| self.overrides.pin(account, value);
        let fin = &params.financial;
        let n = constant::<D>(f64::from(params.n_mod));
        let zero = D::zero();

        // CAS10 pre-construction
        let cas11 = pin(Cas11, params.net_electric_mw * c.land_cost_per_mw);
        let cas12 = pin(Cas12, constant(c.site_permits));
        let cas13 = pin(Cas13, constant(c.licensing(params.fuel)));
        let cas14 = pin(Cas14, constant(c.plant_permits));
        let studies = if params.noak {
            c.plant_studies_noak
        } else {
            c.plant_studies_foak
        };
        let cas15 = pin(Cas15, constant(studies));
        let cas16 = pin(Cas16, constant(c.plant_reports));
        let cas17 = pin(Cas17, constant(c.other_preconstruction));
        let preconstruction = cas11 + cas12 + cas13 + cas14 + cas15 + cas16 + cas17;
        let cas19 = pin(
            Cas19,
            if params.noak {
                zero
            } else {
                preconstruction * c.preconstruction_contingency_foak
            },
        );
        let cas10 = pin(Cas10, preconstruction + cas19);

        // CAS21 structures
        let cas21 = pin(Cas21, table.p_et * n * c.buildings_cost_per_mw);

        // CAS2201 reactor equipment
        let cas220101 = pin(Cas220101, build.blanket * n * c.blanket_cost_per_m3);
        let cas220102 = pin(Cas220102, build.shield * n * c.shield_cost_per_m3);
        let coils = match &params.engineering.family {
            FamilyParams::Mfe(m) => m.b * m.b * build.enclosed * c.coil_cost_per_t2_m3,
            FamilyParams::Mif(_) => table.p_coils * c.pulsed_coil_cost_per_mw,
            FamilyParams::Ife(_) => zero,
        };
        let cas220103 = pin(Cas220103, coils * n);
        let cas220104 = pin(
            Cas220104,
            table.p_heating * n * c.driver_cost_per_mw(params.concept),
        );
        let cas220105 = pin(Cas220105, build.structure * n * c.structure_cost_per_m3);
        let cas220106 = pin(Cas220106, build.vessel * n * c.vessel_cost_per_m3);
        let cas220107 = pin(Cas220107, table.p_scirc * n * c.power_supply_cost_per_mw);
        let cas220108 = pin(Cas220108, table.p_target * n * c.target_factory_cost_per_mw);
        let cas220109 = pin(Cas220109, table.p_dee * n * c.dec_cost_per_mw);
        let equipment = cas220101
            + cas220102
            + cas220103
            + cas220104
            + cas220105
            + cas220106
            + cas220107
            + cas220108
            + cas220109;
        let cas220111 = pin(Cas220111, equipment * c.installation_fraction);
        let cas2201 = pin(Cas2201, equipment + cas220111);

        // CAS2202..CAS2207 rest of the reactor plant
        let cas2202 = pin(Cas2202, table.p_th * n * c.heat_transfer_cost_per_mw);
        let cas2203 = pin(Cas2203, table.p_th * n * c.aux_cooling_cost_per_mw);
        let cas2204 = pin(Cas2204, table.p_neutron * n * c.radwaste_cost_per_mw_neutron);
        let cas2205 = pin(Cas2205, constant(c.fuel_handling(params.fuel)));
        let cas2206 = pin(Cas2206, table.p_et * n * c.other_reactor_cost_per_mw);
        let cas2207 = pin(Cas2207, constant(c.instrumentation_and_control));
        let cas22 = pin(
            Cas22,
            cas2201 + cas2202 + cas2203 + cas2204 + cas2205 + cas2206 + cas2207,
        );

        // CAS23..CAS29
        let cas23 = pin(Cas23, table.p_the * n * c.turbine_cost_per_mw);
        let cas24 = pin(Cas24, table.p_et * n * c.electrical_cost_per_mw);
        let cas25 = pin(Cas25, table.p_et * n * c.misc_plant_cost_per_mw);
        let cas26 = pin(Cas26, table.p_loss * n * c.heat_rejection_cost_per_mw);
        let cas27 = pin(Cas27, build.blanket * n * c.special_materials_cost_per_m3);
        let cas28 = pin(Cas28, constant(c.digital_twin));
        let direct = cas21 + cas22 + cas23 + cas24 + cas25 + cas26 + cas27 + cas28;
        let contingency = if params.noak {
            c.contingency_noak
        } else {
            c.contingency_foak
        };
        let cas29 = pin(Cas29, direct * contingency);
        let cas20 = pin(Cas20, direct + cas29);

        // CAS30..CAS60 indirect, owner's, supplementary, financing
        let cas30 = pin(
            Cas30,
            cas20 * fin.construction_time_yr * c.indirect_fraction_per_yr,
        );
        let cas40 = pin(Cas40, cas20 * c.owners_fraction);
        let cas51 = pin(Cas51, cas20 * c.spares_fraction);
        let cas58 = pin(
            Cas58,
            table.p_neutron * n * c.decommissioning_cost_per_mw_neutron + c.decommissioning_base,
        );
        let cas50 = pin(Cas50, cas51 + cas58);
        let overnight = cas10 + cas20 + cas30 + cas40 + cas50;
        let cas60 = pin(
            Cas60,
            overnight * construction_interest_fraction(fin.interest_rate, fin.construction_time_yr),
        );
        let total_capital = overnight + cas60;

        // Annual charges
        let energy_mwh = annual_energy_mwh(params.net_electric_mw, fin.availability);
        let cas71 = pin(Cas71, params.net_electric_mw * c.om_fixed_cost_per_mw);
        let cas72 = pin(Cas72, cas220101 * c.replacement_fraction_per_yr);
        let cas73 = pin(Cas73, energy_mwh * (c.om_variable_per_mwh * 1.0e-6));
        let cas70 = pin(Cas70, cas71 + cas72 + cas73);
        let cas80 = pin(Cas80, self.annual_fuel_cost(params, table, n));
        let crf = capital_recovery_factor(
            real_rate(fin.interest_rate, fin.inflation_rate),
            fin.lifetime_yr,
        );
        let cas90 = pin(Cas90, total_capital * crf);
        let lcoe = levelized_cost(cas90 + cas70 + cas80, energy_mwh);

        CostBreakdown {
            cas11,
            cas12,
            cas13,
            cas14,
            cas15,
            cas16,
            cas17,
            cas19,
            cas10,
            cas21,
            cas220101,
            cas220102,
            cas220103,
            cas220104,
            cas220105,
            cas220106,
            cas220107,
            cas220108,
            cas220109,
            cas220111,
            cas2201,
            cas2202,
            cas2203,
            cas2204,
            cas2205,
            cas2206,
            cas2207,
            cas22,
            cas23,
            cas24,
            cas25,
            cas26,
            cas27,
            cas28,
            cas29,
            cas20,
            cas30,
            cas40,
            cas51,
            cas58,
            cas50,
            cas60,
            cas71,
            cas72,
            cas73,
            cas70,
            cas80,
            cas90,
            total_capital,
            lcoe,
        }
    }

    /// Ledger for plain values, rejecting unusable finance inputs and a
    /// non-finite or non-positive LCOE.
    pub fn evaluate_checked(
        &self,
        params: &ResolvedParams,
        table: &PowerTable,
        build: &RadialBuild<f64>,
    ) -> CostingResult<CostBreakdown> {
        check_financial(&params.financial)?;
        let costs = self.evaluate(params, table, build);
        if !(costs.lcoe.is_finite() && costs.lcoe > 0.0) {
            return Err(CostingError::invalid_parameter(
                "lcoe",
                format!("{} $/MWh is not a usable cost", costs.lcoe),
            ));
        }
        debug!(
            target: "costing::economics",
            concept = %params.concept,
            total_capital = costs.total_capital,
            lcoe = costs.lcoe,
            "cost ledger evaluated"
        );
        Ok(costs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use costing_physics::geometry::Chamber;
    use costing_physics::PowerBalance;
    use costing_types::params::{
        BurnFractions, CommonParams, EngineeringParams, FinancialParams, IfeParams, MfeParams,
    };
    use costing_types::{ConfinementConcept, Fuel};

    fn common(plasma_t: f64) -> CommonParams {
        CommonParams {
            mn: 1.1,
            eta_th: 0.46,
            eta_p: 0.5,
            f_sub: 0.03,
            p_pump: 1.0,
            p_trit: 10.0,
            p_house: 4.0,
            p_cryo: 0.5,
            plasma_t,
            blanket_t: 0.7,
            ht_shield_t: 0.2,
            structure_t: 0.2,
            vessel_t: 0.2,
        }
    }

    fn params(concept: ConfinementConcept, fuel: Fuel) -> ResolvedParams {
        let engineering = match concept.family() {
            costing_types::ConfinementFamily::Ife => EngineeringParams {
                common: common(4.0),
                family: FamilyParams::Ife(IfeParams {
                    p_implosion: 10.0,
                    p_ignition: 0.1,
                    eta_pin1: 0.1,
                    eta_pin2: 0.1,
                    p_target: 1.0,
                }),
            },
            _ => EngineeringParams {
                common: common(2.0),
                family: FamilyParams::Mfe(MfeParams {
                    p_input: 50.0,
                    eta_pin: 0.5,
                    eta_de: 0.85,
                    f_dec: 0.0,
                    p_coils: 2.0,
                    p_cool: 13.7,
                    axis_t: 6.2,
                    elon: 1.7,
                    n_e: 1.0e20,
                    t_e: 15.0,
                    z_eff: 1.5,
                    plasma_volume: 500.0,
                    b: 5.3,
                }),
            },
        };
        ResolvedParams {
            concept,
            fuel,
            n_mod: 1,
            noak: true,
            net_electric_mw: 1_000.0,
            financial: FinancialParams {
                availability: 0.85,
                lifetime_yr: 30.0,
                construction_time_yr: 6.0,
                interest_rate: 0.07,
                inflation_rate: 0.02,
            },
            engineering,
            burn: BurnFractions::default(),
            cost_overrides: BTreeMap::new(),
            costing_overrides: BTreeMap::new(),
        }
    }

    fn run(p: &ResolvedParams, overrides: &AccountOverrides) -> CostingResult<CostBreakdown> {
        let table = PowerBalance::new(p.fuel, &p.engineering, &p.burn).solve(p.module_net_electric())?;
        let chamber = Chamber::for_concept(p.concept, &p.engineering)?;
        let build = RadialBuild::new(&chamber, &p.engineering);
        let constants = CostingConstants::default();
        CostLayer::new(&constants, overrides).evaluate_checked(p, &table, &build)
    }

    #[test]
    fn test_tokamak_dt_lcoe_in_range() {
        let costs = run(&params(ConfinementConcept::Tokamak, Fuel::DT), &AccountOverrides::default())
            .expect("tokamak costs");
        assert!(costs.lcoe > 10.0 && costs.lcoe < 500.0, "LCOE {}", costs.lcoe);
        assert!(costs.cas20 > costs.cas10);
        assert!(costs.total_capital > costs.cas20);
        assert!(costs.cas60 > 0.0);
    }

    #[test]
    fn test_aggregates_sum_their_children() {
        let c = run(&params(ConfinementConcept::Tokamak, Fuel::DT), &AccountOverrides::default())
            .expect("costs");
        let cas10 = c.cas11 + c.cas12 + c.cas13 + c.cas14 + c.cas15 + c.cas16 + c.cas17 + c.cas19;
        assert!((c.cas10 - cas10).abs() < 1e-9);
        let cas22 = c.cas2201 + c.cas2202 + c.cas2203 + c.cas2204 + c.cas2205 + c.cas2206 + c.cas2207;
        assert!((c.cas22 - cas22).abs() < 1e-9);
        assert!((c.cas50 - (c.cas51 + c.cas58)).abs() < 1e-9);
        assert!((c.cas70 - (c.cas71 + c.cas72 + c.cas73)).abs() < 1e-9);
        let overnight = c.cas10 + c.cas20 + c.cas30 + c.cas40 + c.cas50;
        assert!((c.total_capital - overnight - c.cas60).abs() < 1e-6);
    }

    #[test]
    fn test_pb11_licensing_below_dt() {
        let none = AccountOverrides::default();
        let dt = run(&params(ConfinementConcept::Tokamak, Fuel::DT), &none).expect("dt");
        let pb = run(&params(ConfinementConcept::Tokamak, Fuel::PB11), &none).expect("pb11");
        assert!(pb.cas13 < dt.cas13);
        assert!(pb.cas10 < dt.cas10, "pB11 cas10 {} vs DT {}", pb.cas10, dt.cas10);
        assert!(pb.cas2204 == 0.0, "no neutrons, no activated waste");
    }

    #[test]
    fn test_pinned_leaf_flows_into_aggregates() {
        let p = params(ConfinementConcept::Tokamak, Fuel::DT);
        let free = run(&p, &AccountOverrides::default()).expect("free");
        let raw = BTreeMap::from([("cas28".to_string(), 10.0)]);
        let pinned = run(&p, &AccountOverrides::parse(&raw).expect("known")).expect("pinned");

        assert_eq!(pinned.cas28, 10.0);
        // Direct costs grow by the pin delta plus its NOAK contingency.
        let expected = (10.0 - free.cas28) * 1.05;
        assert!(
            (pinned.cas20 - free.cas20 - expected).abs() < 1e-9,
            "cas20 delta {}",
            pinned.cas20 - free.cas20
        );
        assert_eq!(pinned.cas27, free.cas27);
    }

    #[test]
    fn test_pinned_aggregate_is_observed() {
        let p = params(ConfinementConcept::Tokamak, Fuel::DT);
        let raw = BTreeMap::from([("cas22".to_string(), 1_234.0)]);
        let c = run(&p, &AccountOverrides::parse(&raw).expect("known")).expect("pinned");
        assert_eq!(c.cas22, 1_234.0);
        let direct = c.cas21 + 1_234.0 + c.cas23 + c.cas24 + c.cas25 + c.cas26 + c.cas27 + c.cas28;
        assert!((c.cas20 - direct * 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_foak_costs_more() {
        let noak = params(ConfinementConcept::Tokamak, Fuel::DT);
        let mut foak = noak.clone();
        foak.noak = false;
        let none = AccountOverrides::default();
        let a = run(&noak, &none).expect("noak");
        let b = run(&foak, &none).expect("foak");
        assert_eq!(a.cas19, 0.0);
        assert!(b.cas19 > 0.0);
        assert!(b.lcoe > a.lcoe);
    }

    #[test]
    fn test_ife_has_driver_and_target_factory_but_no_coils() {
        let c = run(&params(ConfinementConcept::LaserIfe, Fuel::DT), &AccountOverrides::default())
            .expect("ife");
        assert_eq!(c.cas220103, 0.0);
        assert!(c.cas220108 > 0.0);
        assert!((c.cas220104 - 10.1 * 20.0).abs() < 1e-9, "driver {}", c.cas220104);
    }

    #[test]
    fn test_fuel_cost_small_for_dt() {
        let c = run(&params(ConfinementConcept::Tokamak, Fuel::DT), &AccountOverrides::default())
            .expect("costs");
        assert!(c.cas80 > 0.0 && c.cas80 < 5.0, "DT fuel {} M$/yr", c.cas80);
    }

    #[test]
    fn test_dhe3_fuel_dominated_by_helium3() {
        let c = run(&params(ConfinementConcept::Tokamak, Fuel::DHe3), &AccountOverrides::default())
            .expect("costs");
        let dt = run(&params(ConfinementConcept::Tokamak, Fuel::DT), &AccountOverrides::default())
            .expect("costs");
        assert!(c.cas80 > 100.0 * dt.cas80, "DHe3 fuel {} M$/yr", c.cas80);
    }

    #[test]
    fn test_bad_finance_rejected() {
        let mut p = params(ConfinementConcept::Tokamak, Fuel::DT);
        p.financial.inflation_rate = 0.09;
        assert!(run(&p, &AccountOverrides::default()).is_err());
    }
}
