// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Concept Templates
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Default engineering parameters per confinement concept.
//!
//! Each template is a complete record for its family, so a request that
//! supplies nothing still resolves to a solvable plant.

use costing_types::params::{CommonParams, EngineeringParams, FamilyParams, IfeParams, MfeParams, MifParams};
use costing_types::ConfinementConcept;

/// Shared balance-of-plant defaults with the given chamber build.
fn common(plasma_t: f64, blanket_t: f64) -> CommonParams {
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
        blanket_t,
        ht_shield_t: 0.2,
        structure_t: 0.2,
        vessel_t: 0.2,
    }
}

/// Complete engineering record for `concept`.
pub fn defaults(concept: ConfinementConcept) -> EngineeringParams {
    match concept {
        ConfinementConcept::Tokamak => EngineeringParams {
            common: common(2.0, 0.7),
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
        ConfinementConcept::Stellarator => EngineeringParams {
            common: common(1.2, 0.7),
            family: FamilyParams::Mfe(MfeParams {
                p_input: 20.0,
                eta_pin: 0.5,
                eta_de: 0.85,
                f_dec: 0.0,
                p_coils: 5.0,
                p_cool: 15.0,
                axis_t: 8.0,
                elon: 1.0,
                n_e: 1.5e20,
                t_e: 12.0,
                z_eff: 1.5,
                plasma_volume: 220.0,
                b: 5.5,
            }),
        },
        // Open field lines: a large share of charged power leaves through
        // the ends, where a direct converter recovers it.
        ConfinementConcept::Mirror => EngineeringParams {
            common: common(0.5, 0.7),
            family: FamilyParams::Mfe(MfeParams {
                p_input: 60.0,
                eta_pin: 0.5,
                eta_de: 0.6,
                f_dec: 0.5,
                p_coils: 4.0,
                p_cool: 10.0,
                axis_t: 40.0,
                elon: 1.0,
                n_e: 3.0e20,
                t_e: 30.0,
                z_eff: 1.2,
                plasma_volume: 30.0,
                b: 3.0,
            }),
        },
        ConfinementConcept::LaserIfe => EngineeringParams {
            common: common(4.0, 0.8),
            family: FamilyParams::Ife(IfeParams {
                p_implosion: 10.0,
                p_ignition: 0.1,
                eta_pin1: 0.1,
                eta_pin2: 0.1,
                p_target: 1.0,
            }),
        },
        ConfinementConcept::Zpinch => EngineeringParams {
            common: common(3.0, 0.8),
            family: FamilyParams::Ife(IfeParams {
                p_implosion: 30.0,
                p_ignition: 0.0,
                eta_pin1: 0.3,
                eta_pin2: 0.3,
                p_target: 3.0,
            }),
        },
        ConfinementConcept::HeavyIon => EngineeringParams {
            common: common(4.0, 0.8),
            family: FamilyParams::Ife(IfeParams {
                p_implosion: 8.0,
                p_ignition: 0.5,
                eta_pin1: 0.25,
                eta_pin2: 0.25,
                p_target: 1.0,
            }),
        },
        ConfinementConcept::MagTarget => EngineeringParams {
            common: common(3.0, 0.8),
            family: FamilyParams::Mif(MifParams {
                p_driver: 30.0,
                eta_pin: 0.3,
                p_target: 2.0,
                p_coils: 1.0,
            }),
        },
        ConfinementConcept::PlasmaJet => EngineeringParams {
            common: common(3.5, 0.8),
            family: FamilyParams::Mif(MifParams {
                p_driver: 40.0,
                eta_pin: 0.35,
                p_target: 1.5,
                p_coils: 0.5,
            }),
        },
    }
}
