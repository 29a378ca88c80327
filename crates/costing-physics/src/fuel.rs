// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Fuel Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Split of fusion power into charged-particle (ash) and neutron power,
//! and reactant demand per unit of fusion energy.
//!
//! Branching happens only on the fuel tag. Within a branch everything is
//! plain arithmetic in the burn fractions.

use costing_types::constants::{
    E_ALPHA_DT, E_CHARGED_PRIMARY_DD, E_NEUTRON_PRIMARY_DD, E_N_DT, E_TOTAL_PRIMARY_DD, Q_DHE3,
    Q_DT, Q_PB11,
};
use costing_types::params::BurnFractions;
use costing_types::scalar::{constant, Scalar};
use costing_types::Fuel;

/// Fraction of fusion power carried by charged products.
pub fn ash_fraction<D: Scalar>(fuel: Fuel, burn: &BurnFractions<D>) -> D {
    match fuel {
        Fuel::DT => constant(E_ALPHA_DT / Q_DT),
        Fuel::DD => {
            // Primary DD products plus the bred T burned via DT and the
            // bred He3 burned via DHe3 (all DHe3 products are charged).
            let he3_burn = burn.dd_f_he3 * (0.5 * Q_DHE3);
            let e_charged = burn.dd_f_t * (0.5 * E_ALPHA_DT) + he3_burn + E_CHARGED_PRIMARY_DD;
            let e_total = burn.dd_f_t * (0.5 * Q_DT) + he3_burn + E_TOTAL_PRIMARY_DD;
            e_charged / e_total
        }
        Fuel::DHe3 => {
            let dd_share = dd_side_charged_share(burn.dhe3_f_t);
            (D::one() - burn.dhe3_dd_frac) + burn.dhe3_dd_frac * dd_share
        }
        Fuel::PB11 => D::one(),
    }
}

/// Charged share of DD side reactions in a DHe3 plant, with a fraction
/// `f_t` of their tritium burned.
fn dd_side_charged_share<D: Scalar>(f_t: D) -> D {
    let e_neutron = f_t * (0.5 * E_N_DT) + E_NEUTRON_PRIMARY_DD;
    let e_charged = f_t * (0.5 * E_ALPHA_DT) + E_CHARGED_PRIMARY_DD;
    e_charged / (e_neutron + e_charged)
}

/// Energy of one DD side event [MeV], tritium burned at fraction `f_t`.
fn dd_side_energy<D: Scalar>(f_t: D) -> D {
    f_t * (0.5 * Q_DT) + E_TOTAL_PRIMARY_DD
}

/// Split fusion power `p_fus` [MW] into `(p_ash, p_neutron)` [MW].
///
/// `p_neutron` is formed as `p_fus - p_ash`, so the two always sum to
/// `p_fus` and pB11 yields exactly zero neutron power.
pub fn ash_neutron_split<D: Scalar>(p_fus: D, fuel: Fuel, burn: &BurnFractions<D>) -> (D, D) {
    let p_ash = p_fus * ash_fraction(fuel, burn);
    (p_ash, p_fus - p_ash)
}

/// Reactant nuclei consumed per MeV of fusion energy released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactantDemand<D> {
    pub deuterium: D,
    pub helium3: D,
    /// Li-6 burned to breed the tritium a DT plant consumes.
    pub lithium6: D,
    pub protium: D,
    pub boron11: D,
}

/// Reactant demand of `fuel` per MeV released.
pub fn reactant_demand<D: Scalar>(fuel: Fuel, burn: &BurnFractions<D>) -> ReactantDemand<D> {
    let zero = D::zero();
    match fuel {
        Fuel::DT => ReactantDemand {
            deuterium: constant(1.0 / Q_DT),
            helium3: zero,
            lithium6: constant(1.0 / Q_DT),
            protium: zero,
            boron11: zero,
        },
        Fuel::DD => {
            let he3_burn = burn.dd_f_he3 * 0.5_f64;
            let t_burn = burn.dd_f_t * 0.5_f64;
            let energy = t_burn * Q_DT + he3_burn * Q_DHE3 + E_TOTAL_PRIMARY_DD;
            ReactantDemand {
                deuterium: (t_burn + he3_burn + 2.0_f64) / energy,
                helium3: zero,
                lithium6: zero,
                protium: zero,
                boron11: zero,
            }
        }
        Fuel::DHe3 => {
            let main = D::one() - burn.dhe3_dd_frac;
            let side_d = (burn.dhe3_f_t * 0.5_f64 + 2.0_f64) / dd_side_energy(burn.dhe3_f_t);
            ReactantDemand {
                deuterium: main / Q_DHE3 + burn.dhe3_dd_frac * side_d,
                helium3: main / Q_DHE3,
                lithium6: zero,
                protium: zero,
                boron11: zero,
            }
        }
        Fuel::PB11 => ReactantDemand {
            deuterium: zero,
            helium3: zero,
            lithium6: zero,
            protium: constant(1.0 / Q_PB11),
            boron11: constant(1.0 / Q_PB11),
        },
    }
}
