// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Costing Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit costs and scaling coefficients of the cost accounts.
//!
//! Money is in M$ (2024) unless a field says otherwise. A caller replaces
//! any coefficient by naming its field in `costing_overrides`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use costing_types::{ConfinementConcept, CostingError, CostingResult, Fuel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostingConstants {
    // CAS10 pre-construction
    /// Land per MW of net output [M$/MWe].
    pub land_cost_per_mw: f64,
    pub site_permits: f64,
    /// Licensing by fuel. Neutron and tritium inventory drive the
    /// regulatory burden, so aneutronic fuels license for less.
    pub licensing_dt: f64,
    pub licensing_dd: f64,
    pub licensing_dhe3: f64,
    pub licensing_pb11: f64,
    pub plant_permits: f64,
    pub plant_studies_noak: f64,
    pub plant_studies_foak: f64,
    pub plant_reports: f64,
    pub other_preconstruction: f64,
    /// Pre-construction contingency fraction, first-of-a-kind only.
    pub preconstruction_contingency_foak: f64,

    // CAS21
    /// Buildings per MW of gross electric [M$/MW].
    pub buildings_cost_per_mw: f64,

    // CAS2201 reactor equipment
    pub blanket_cost_per_m3: f64,
    pub shield_cost_per_m3: f64,
    pub structure_cost_per_m3: f64,
    pub vessel_cost_per_m3: f64,
    /// Superconducting coils per unit of stored-field proxy `B^2 V` [M$/(T^2 m^3)].
    pub coil_cost_per_t2_m3: f64,
    /// Pulsed coil sets of magneto-inertial machines [M$/MW].
    pub pulsed_coil_cost_per_mw: f64,
    /// Heating systems per MW delivered to the plasma [M$/MW].
    pub heating_cost_per_mw: f64,
    /// Laser driver per MW delivered to the target [M$/MW].
    pub laser_driver_cost_per_mw: f64,
    /// Heavy-ion accelerator driver per MW delivered [M$/MW].
    pub ion_driver_cost_per_mw: f64,
    /// Pulsed-power driver (Z-pinch, MIF) per MW delivered [M$/MW].
    pub pulsed_power_cost_per_mw: f64,
    /// Power supplies per MW of recirculating power [M$/MW].
    pub power_supply_cost_per_mw: f64,
    /// Target or liner factory per MW of factory power [M$/MW].
    pub target_factory_cost_per_mw: f64,
    /// Direct energy converter per MW of direct-conversion output [M$/MW].
    pub dec_cost_per_mw: f64,
    /// Assembly and installation as a fraction of reactor equipment.
    pub installation_fraction: f64,

    // CAS2202..CAS2207
    pub heat_transfer_cost_per_mw: f64,
    pub aux_cooling_cost_per_mw: f64,
    pub radwaste_cost_per_mw_neutron: f64,
    pub fuel_handling_dt: f64,
    pub fuel_handling_dd: f64,
    pub fuel_handling_dhe3: f64,
    pub fuel_handling_pb11: f64,
    pub other_reactor_cost_per_mw: f64,
    pub instrumentation_and_control: f64,

    // CAS23..CAS28
    pub turbine_cost_per_mw: f64,
    pub electrical_cost_per_mw: f64,
    pub misc_plant_cost_per_mw: f64,
    pub heat_rejection_cost_per_mw: f64,
    pub special_materials_cost_per_m3: f64,
    pub digital_twin: f64,

    // CAS29
    pub contingency_noak: f64,
    pub contingency_foak: f64,

    // CAS30..CAS58
    /// Indirect services per year of construction, as a fraction of CAS20.
    pub indirect_fraction_per_yr: f64,
    pub owners_fraction: f64,
    pub spares_fraction: f64,
    pub decommissioning_base: f64,
    pub decommissioning_cost_per_mw_neutron: f64,

    // CAS70
    /// Fixed O&M per MW of net output [M$/MWe/yr].
    pub om_fixed_cost_per_mw: f64,
    /// Share of blanket capital replaced per year.
    pub replacement_fraction_per_yr: f64,
    /// Variable O&M [$/MWh].
    pub om_variable_per_mwh: f64,

    // CAS80 reactant prices [$/kg]
    pub deuterium_price_per_kg: f64,
    pub lithium6_price_per_kg: f64,
    pub helium3_price_per_kg: f64,
    pub protium_price_per_kg: f64,
    pub boron11_price_per_kg: f64,
}

impl Default for CostingConstants {
    fn default() -> Self {
        Self {
            land_cost_per_mw: 0.02,
            site_permits: 10.0,
            licensing_dt: 5.0,
            licensing_dd: 3.0,
            licensing_dhe3: 1.0,
            licensing_pb11: 0.1,
            plant_permits: 2.0,
            plant_studies_noak: 5.0,
            plant_studies_foak: 10.0,
            plant_reports: 2.0,
            other_preconstruction: 1.0,
            preconstruction_contingency_foak: 0.1,

            buildings_cost_per_mw: 0.35,

            blanket_cost_per_m3: 0.6,
            shield_cost_per_m3: 0.3,
            structure_cost_per_m3: 0.15,
            vessel_cost_per_m3: 0.2,
            coil_cost_per_t2_m3: 0.012,
            pulsed_coil_cost_per_mw: 2.0,
            heating_cost_per_mw: 5.0,
            laser_driver_cost_per_mw: 20.0,
            ion_driver_cost_per_mw: 15.0,
            pulsed_power_cost_per_mw: 3.0,
            power_supply_cost_per_mw: 0.1,
            target_factory_cost_per_mw: 50.0,
            dec_cost_per_mw: 2.0,
            installation_fraction: 0.14,

            heat_transfer_cost_per_mw: 0.05,
            aux_cooling_cost_per_mw: 0.01,
            radwaste_cost_per_mw_neutron: 0.02,
            fuel_handling_dt: 150.0,
            fuel_handling_dd: 100.0,
            fuel_handling_dhe3: 60.0,
            fuel_handling_pb11: 20.0,
            other_reactor_cost_per_mw: 0.02,
            instrumentation_and_control: 60.0,

            turbine_cost_per_mw: 0.2,
            electrical_cost_per_mw: 0.08,
            misc_plant_cost_per_mw: 0.03,
            heat_rejection_cost_per_mw: 0.05,
            special_materials_cost_per_m3: 0.05,
            digital_twin: 5.0,

            contingency_noak: 0.05,
            contingency_foak: 0.15,

            indirect_fraction_per_yr: 0.025,
            owners_fraction: 0.05,
            spares_fraction: 0.02,
            decommissioning_base: 50.0,
            decommissioning_cost_per_mw_neutron: 0.1,

            om_fixed_cost_per_mw: 0.06,
            replacement_fraction_per_yr: 0.02,
            om_variable_per_mwh: 2.0,

            deuterium_price_per_kg: 2_175.0,
            lithium6_price_per_kg: 1_000.0,
            helium3_price_per_kg: 2.0e6,
            protium_price_per_kg: 5.0,
            boron11_price_per_kg: 10_000.0,
        }
    }
}

impl CostingConstants {
    /// Defaults with the named coefficients replaced.
    pub fn with_overrides(overrides: &BTreeMap<String, f64>) -> CostingResult<Self> {
        Self::default().apply(overrides)
    }

    /// Replace the named coefficients. Unknown names are rejected.
    pub fn apply(&self, overrides: &BTreeMap<String, f64>) -> CostingResult<Self> {
        if overrides.is_empty() {
            return Ok(self.clone());
        }
        let Value::Object(mut fields) = serde_json::to_value(self)? else {
            return Err(CostingError::invalid_parameter(
                "costing_overrides",
                "coefficients do not serialize to a record",
            ));
        };
        for (key, &value) in overrides {
            let slot = fields.get_mut(key).ok_or_else(|| CostingError::UnknownOverride {
                kind: "costing coefficient",
                key: key.clone(),
            })?;
            if !value.is_finite() {
                return Err(CostingError::invalid_parameter(
                    key,
                    format!("override {value} is not finite"),
                ));
            }
            *slot = Value::from(value);
        }
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    pub fn licensing(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::DT => self.licensing_dt,
            Fuel::DD => self.licensing_dd,
            Fuel::DHe3 => self.licensing_dhe3,
            Fuel::PB11 => self.licensing_pb11,
        }
    }

    pub fn fuel_handling(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::DT => self.fuel_handling_dt,
            Fuel::DD => self.fuel_handling_dd,
            Fuel::DHe3 => self.fuel_handling_dhe3,
            Fuel::PB11 => self.fuel_handling_pb11,
        }
    }

    /// Unit cost of the heating system or driver of `concept` [M$/MW].
    pub fn driver_cost_per_mw(&self, concept: ConfinementConcept) -> f64 {
        match concept {
            ConfinementConcept::Tokamak
            | ConfinementConcept::Stellarator
            | ConfinementConcept::Mirror => self.heating_cost_per_mw,
            ConfinementConcept::LaserIfe => self.laser_driver_cost_per_mw,
            ConfinementConcept::HeavyIon => self.ion_driver_cost_per_mw,
            ConfinementConcept::Zpinch
            | ConfinementConcept::MagTarget
            | ConfinementConcept::PlasmaJet => self.pulsed_power_cost_per_mw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_licensing_falls_with_neutron_burden() {
        let c = CostingConstants::default();
        assert!(c.licensing(Fuel::PB11) < c.licensing(Fuel::DHe3));
        assert!(c.licensing(Fuel::DHe3) < c.licensing(Fuel::DD));
        assert!(c.licensing(Fuel::DD) < c.licensing(Fuel::DT));
    }

    #[test]
    fn test_override_by_field_name() {
        let overrides = BTreeMap::from([("laser_driver_cost_per_mw".to_string(), 18.0)]);
        let c = CostingConstants::with_overrides(&overrides).expect("known key");
        assert_eq!(c.laser_driver_cost_per_mw, 18.0);
        assert_eq!(c.heating_cost_per_mw, CostingConstants::default().heating_cost_per_mw);
    }

    #[test]
    fn test_unknown_override_rejected() {
        let overrides = BTreeMap::from([("laser_cost".to_string(), 18.0)]);
        let err = CostingConstants::with_overrides(&overrides).unwrap_err();
        assert!(
            matches!(err, CostingError::UnknownOverride { ref key, .. } if key == "laser_cost"),
            "{err}"
        );
    }

    #[test]
    fn test_non_finite_override_rejected() {
        let overrides = BTreeMap::from([("site_permits".to_string(), f64::NAN)]);
        assert!(CostingConstants::with_overrides(&overrides).is_err());
    }

    #[test]
    fn test_driver_cost_per_concept() {
        let c = CostingConstants::default();
        assert_eq!(c.driver_cost_per_mw(ConfinementConcept::LaserIfe), 20.0);
        assert_eq!(c.driver_cost_per_mw(ConfinementConcept::Tokamak), 5.0);
        assert_eq!(c.driver_cost_per_mw(ConfinementConcept::MagTarget), 3.0);
    }
}
