// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Parameter Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resolved engineering, financial and burn-mix parameters.
//!
//! Every record is generic over its scalar type. `T = f64` is the record a
//! caller sees; the sensitivity pass re-types a record field by field with
//! `map`, seeding one field with a unit derivative.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::concept::{ConfinementConcept, ConfinementFamily, Fuel};

/// Declares a flat record of named scalars together with its field list,
/// a `(name, value)` view and a field-wise `map`.
macro_rules! scalar_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct $name<T = f64> {
            $( $(#[$fmeta])* pub $field: T, )*
        }

        impl<T: Copy> $name<T> {
            pub const FIELDS: &'static [&'static str] = &[$( stringify!($field) ),*];

            pub fn scalars(&self) -> Vec<(&'static str, T)> {
                vec![$( (stringify!($field), self.$field) ),*]
            }

            pub fn map<D>(&self, f: &mut impl FnMut(&'static str, T) -> D) -> $name<D> {
                $name {
                    $( $field: f(stringify!($field), self.$field), )*
                }
            }
        }
    };
}

scalar_record! {
    /// Parameters shared by every confinement family.
    pub struct CommonParams {
        /// Blanket neutron energy multiplication [-].
        mn,
        /// Thermal conversion efficiency [-].
        eta_th,
        /// Coolant pumping efficiency [-].
        eta_p,
        /// Subsystem draw as a fraction of thermal-electric power [-].
        f_sub,
        /// Coolant pumping power [MW].
        p_pump,
        /// Tritium systems power [MW].
        p_trit,
        /// House load [MW].
        p_house,
        /// Cryogenic plant power [MW].
        p_cryo,
        /// Plasma minor radius, or chamber radius for spherical chambers [m].
        plasma_t,
        /// Blanket thickness [m].
        blanket_t,
        /// High-temperature shield thickness [m].
        ht_shield_t,
        /// Primary structure thickness [m].
        structure_t,
        /// Vacuum vessel thickness [m].
        vessel_t,
    }
}

scalar_record! {
    /// Magnetic confinement parameters.
    pub struct MfeParams {
        /// Heating power delivered to the plasma [MW].
        p_input,
        /// Heating wall-plug efficiency [-].
        eta_pin,
        /// Direct energy conversion efficiency [-].
        eta_de,
        /// Fraction of charged power routed to direct conversion [-].
        f_dec,
        /// Magnet power [MW].
        p_coils,
        /// Magnet and first-wall cooling power [MW].
        p_cool,
        /// Major radius, or device length for linear machines [m].
        axis_t,
        /// Plasma elongation [-].
        elon,
        /// Electron density [m^-3].
        n_e,
        /// Electron temperature [keV].
        t_e,
        /// Effective charge [-].
        z_eff,
        /// Plasma volume [m^3].
        plasma_volume,
        /// On-axis magnetic field [T].
        b,
    }
}

scalar_record! {
    /// Inertial confinement parameters.
    pub struct IfeParams {
        /// Compression driver power delivered to the target [MW].
        p_implosion,
        /// Ignition driver power delivered to the target [MW].
        p_ignition,
        /// Compression driver wall-plug efficiency [-].
        eta_pin1,
        /// Ignition driver wall-plug efficiency [-].
        eta_pin2,
        /// Target factory power [MW].
        p_target,
    }
}

scalar_record! {
    /// Magneto-inertial confinement parameters.
    pub struct MifParams {
        /// Driver power delivered to the liner/target [MW].
        p_driver,
        /// Driver wall-plug efficiency [-].
        eta_pin,
        /// Liner and target factory power [MW].
        p_target,
        /// Pulsed coil power [MW].
        p_coils,
    }
}

scalar_record! {
    /// Customer financing assumptions.
    pub struct FinancialParams {
        /// Plant availability [-].
        availability,
        /// Economic lifetime [yr].
        lifetime_yr,
        /// Construction duration [yr].
        construction_time_yr,
        /// Nominal interest rate [-].
        interest_rate,
        /// General inflation rate [-].
        inflation_rate,
    }
}

scalar_record! {
    /// Burn-mix assumptions for the secondary reactions of DD and DHe3.
    pub struct BurnFractions {
        /// Fraction of DD-bred tritium burned in a DD plant [-].
        dd_f_t,
        /// Fraction of DD-bred helium-3 burned in a DD plant [-].
        dd_f_he3,
        /// Share of fusion events that are DD side reactions in a DHe3 plant [-].
        dhe3_dd_frac,
        /// Fraction of side-reaction tritium burned in a DHe3 plant [-].
        dhe3_f_t,
    }
}

impl Default for BurnFractions {
    fn default() -> Self {
        BurnFractions {
            dd_f_t: 0.969,
            dd_f_he3: 0.689,
            dhe3_dd_frac: 0.07,
            dhe3_f_t: 0.97,
        }
    }
}

impl<T: Copy> BurnFractions<T> {
    /// Names of the fractions that enter the physics of `fuel`.
    pub fn fields_for(fuel: Fuel) -> &'static [&'static str] {
        match fuel {
            Fuel::DD => &["dd_f_t", "dd_f_he3"],
            Fuel::DHe3 => &["dhe3_dd_frac", "dhe3_f_t"],
            Fuel::DT | Fuel::PB11 => &[],
        }
    }
}

/// Family-specific parameters. Only the active family's record exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum FamilyParams<T = f64> {
    Mfe(MfeParams<T>),
    Ife(IfeParams<T>),
    Mif(MifParams<T>),
}

impl<T: Copy> FamilyParams<T> {
    pub fn family(&self) -> ConfinementFamily {
        match self {
            FamilyParams::Mfe(_) => ConfinementFamily::Mfe,
            FamilyParams::Ife(_) => ConfinementFamily::Ife,
            FamilyParams::Mif(_) => ConfinementFamily::Mif,
        }
    }

    pub fn scalars(&self) -> Vec<(&'static str, T)> {
        match self {
            FamilyParams::Mfe(p) => p.scalars(),
            FamilyParams::Ife(p) => p.scalars(),
            FamilyParams::Mif(p) => p.scalars(),
        }
    }

    pub fn map<D>(&self, f: &mut impl FnMut(&'static str, T) -> D) -> FamilyParams<D> {
        match self {
            FamilyParams::Mfe(p) => FamilyParams::Mfe(p.map(f)),
            FamilyParams::Ife(p) => FamilyParams::Ife(p.map(f)),
            FamilyParams::Mif(p) => FamilyParams::Mif(p.map(f)),
        }
    }

    /// Field names that belong to `family`.
    pub fn fields_of(family: ConfinementFamily) -> &'static [&'static str] {
        match family {
            ConfinementFamily::Mfe => MfeParams::<T>::FIELDS,
            ConfinementFamily::Ife => IfeParams::<T>::FIELDS,
            ConfinementFamily::Mif => MifParams::<T>::FIELDS,
        }
    }
}

/// Fully populated engineering record for one concept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeringParams<T = f64> {
    pub common: CommonParams<T>,
    pub family: FamilyParams<T>,
}

impl<T: Copy> EngineeringParams<T> {
    pub fn scalars(&self) -> Vec<(&'static str, T)> {
        let mut out = self.common.scalars();
        out.extend(self.family.scalars());
        out
    }

    pub fn map<D>(&self, f: &mut impl FnMut(&'static str, T) -> D) -> EngineeringParams<D> {
        EngineeringParams {
            common: self.common.map(f),
            family: self.family.map(f),
        }
    }
}

/// Everything one forward pass consumes, after defaults are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParams<T = f64> {
    pub concept: ConfinementConcept,
    pub fuel: Fuel,
    /// Number of identical reactor modules.
    pub n_mod: u32,
    /// Nth-of-a-kind costing when true, first-of-a-kind otherwise.
    pub noak: bool,
    /// Plant net electric output [MW].
    pub net_electric_mw: T,
    pub financial: FinancialParams<T>,
    pub engineering: EngineeringParams<T>,
    pub burn: BurnFractions<T>,
    pub cost_overrides: BTreeMap<String, f64>,
    pub costing_overrides: BTreeMap<String, f64>,
}

impl<T: Copy> ResolvedParams<T> {
    pub fn family(&self) -> ConfinementFamily {
        self.concept.family()
    }

    /// Every scalar that can move the result, by name. Family-inapplicable
    /// fields do not exist in the record; burn fractions the fuel does not
    /// use are left out.
    pub fn scalars(&self) -> Vec<(&'static str, T)> {
        let mut out = vec![("net_electric_mw", self.net_electric_mw)];
        out.extend(self.financial.scalars());
        out.extend(self.engineering.scalars());
        let used = BurnFractions::<T>::fields_for(self.fuel);
        out.extend(
            self.burn
                .scalars()
                .into_iter()
                .filter(|(name, _)| used.contains(name)),
        );
        out
    }

    /// Re-type every scalar through `f`; tags, counts and overrides are copied.
    pub fn map<D>(&self, mut f: impl FnMut(&'static str, T) -> D) -> ResolvedParams<D> {
        ResolvedParams {
            concept: self.concept,
            fuel: self.fuel,
            n_mod: self.n_mod,
            noak: self.noak,
            net_electric_mw: f("net_electric_mw", self.net_electric_mw),
            financial: self.financial.map(&mut f),
            engineering: self.engineering.map(&mut f),
            burn: self.burn.map(&mut f),
            cost_overrides: self.cost_overrides.clone(),
            costing_overrides: self.costing_overrides.clone(),
        }
    }

    /// Net electric target of a single module.
    pub fn module_net_electric(&self) -> T
    where
        T: std::ops::Div<f64, Output = T>,
    {
        self.net_electric_mw / f64::from(self.n_mod)
    }
}
