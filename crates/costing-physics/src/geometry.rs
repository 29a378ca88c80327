// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Radial Build
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shell volumes of the radial build around the plasma or chamber.
//!
//! Layers stack outward from the plasma edge: blanket, high-temperature
//! shield, structure, vacuum vessel. Each shell volume is the difference
//! of the enclosed volumes at its outer and inner radius.

use std::f64::consts::PI;

use costing_types::params::{EngineeringParams, FamilyParams};
use costing_types::scalar::Scalar;
use costing_types::{ConfinementConcept, CostingError, CostingResult, Shape};

/// Chamber shape with the dimensions its volume formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Chamber<D> {
    /// Toroidal chamber with major radius and elongation.
    Torus { major_radius: D, elongation: D },
    /// Linear chamber of the given length.
    Cylinder { length: D },
    Sphere,
}

impl<D: Scalar> Chamber<D> {
    /// Chamber of `concept`, dimensioned from its engineering record.
    pub fn for_concept(
        concept: ConfinementConcept,
        engineering: &EngineeringParams<D>,
    ) -> CostingResult<Self> {
        match (concept.shape(), &engineering.family) {
            (Shape::Torus, FamilyParams::Mfe(p)) => Ok(Chamber::Torus {
                major_radius: p.axis_t,
                elongation: p.elon,
            }),
            (Shape::Cylinder, FamilyParams::Mfe(p)) => Ok(Chamber::Cylinder { length: p.axis_t }),
            (Shape::Sphere, _) => Ok(Chamber::Sphere),
            (shape, family) => Err(CostingError::InvalidConcept(format!(
                "{concept} needs a {shape:?} chamber but carries {} parameters",
                family.family()
            ))),
        }
    }

    /// Volume enclosed within radius `r` [m^3].
    pub fn enclosed_volume(&self, r: D) -> D {
        match *self {
            Chamber::Torus {
                major_radius,
                elongation,
            } => major_radius * elongation * r * r * (2.0 * PI * PI),
            Chamber::Cylinder { length } => length * r * r * PI,
            Chamber::Sphere => r * r * r * (4.0 / 3.0 * PI),
        }
    }
}

/// Shell volumes of the radial build [m^3].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialBuild<D> {
    pub plasma: D,
    pub blanket: D,
    pub shield: D,
    pub structure: D,
    pub vessel: D,
    /// Everything inside the outer vessel wall.
    pub enclosed: D,
    /// Outer radius of the vacuum vessel [m].
    pub outer_radius: D,
}

impl<D: Scalar> RadialBuild<D> {
    /// Stack the layers of `engineering` around `chamber`.
    pub fn new(chamber: &Chamber<D>, engineering: &EngineeringParams<D>) -> Self {
        let c = &engineering.common;
        let r_plasma = c.plasma_t;
        let r_blanket = r_plasma + c.blanket_t;
        let r_shield = r_blanket + c.ht_shield_t;
        let r_structure = r_shield + c.structure_t;
        let r_vessel = r_structure + c.vessel_t;

        let v_plasma = chamber.enclosed_volume(r_plasma);
        let v_blanket = chamber.enclosed_volume(r_blanket);
        let v_shield = chamber.enclosed_volume(r_shield);
        let v_structure = chamber.enclosed_volume(r_structure);
        let v_vessel = chamber.enclosed_volume(r_vessel);

        Self {
            plasma: v_plasma,
            blanket: v_blanket - v_plasma,
            shield: v_shield - v_blanket,
            structure: v_structure - v_shield,
            vessel: v_vessel - v_structure,
            enclosed: v_vessel,
            outer_radius: r_vessel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costing_types::params::{CommonParams, IfeParams, MfeParams};

    fn common() -> CommonParams {
        CommonParams {
            mn: 1.1,
            eta_th: 0.46,
            eta_p: 0.5,
            f_sub: 0.03,
            p_pump: 1.0,
            p_trit: 10.0,
            p_house: 4.0,
            p_cryo: 0.5,
            plasma_t: 2.0,
            blanket_t: 1.0,
            ht_shield_t: 0.0,
            structure_t: 0.0,
            vessel_t: 0.0,
        }
    }

    fn mfe(axis_t: f64) -> MfeParams {
        MfeParams {
            p_input: 50.0,
            eta_pin: 0.5,
            eta_de: 0.85,
            f_dec: 0.0,
            p_coils: 2.0,
            p_cool: 13.7,
            axis_t,
            elon: 1.0,
            n_e: 1.0e20,
            t_e: 15.0,
            z_eff: 1.5,
            plasma_volume: 500.0,
            b: 5.3,
        }
    }

    #[test]
    fn test_sphere_shell() {
        let eng = EngineeringParams {
            common: common(),
            family: FamilyParams::Ife(IfeParams {
                p_implosion: 10.0,
                p_ignition: 0.1,
                eta_pin1: 0.1,
                eta_pin2: 0.1,
                p_target: 1.0,
            }),
        };
        let chamber = Chamber::for_concept(ConfinementConcept::LaserIfe, &eng).expect("chamber");
        assert_eq!(chamber, Chamber::Sphere);
        let build = RadialBuild::new(&chamber, &eng);
        let expected = 4.0 / 3.0 * PI * (27.0 - 8.0);
        assert!((build.blanket - expected).abs() < 1e-9, "blanket {}", build.blanket);
        assert_eq!(build.shield, 0.0);
        assert!((build.enclosed - 4.0 / 3.0 * PI * 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_torus_shell() {
        let eng = EngineeringParams {
            common: common(),
            family: FamilyParams::Mfe(mfe(6.0)),
        };
        let chamber = Chamber::for_concept(ConfinementConcept::Tokamak, &eng).expect("chamber");
        let build = RadialBuild::new(&chamber, &eng);
        let expected = 2.0 * PI * PI * 6.0 * (9.0 - 4.0);
        assert!((build.blanket - expected).abs() < 1e-9, "blanket {}", build.blanket);
        assert!((build.outer_radius - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_shell() {
        let eng = EngineeringParams {
            common: common(),
            family: FamilyParams::Mfe(mfe(40.0)),
        };
        let chamber = Chamber::for_concept(ConfinementConcept::Mirror, &eng).expect("chamber");
        let build = RadialBuild::new(&chamber, &eng);
        assert!((build.blanket - PI * 40.0 * 5.0).abs() < 1e-9);
        assert!((build.shield + build.structure + build.vessel).abs() < 1e-12);
    }

    #[test]
    fn test_torus_without_mfe_parameters_is_rejected() {
        let eng = EngineeringParams {
            common: common(),
            family: FamilyParams::Ife(IfeParams {
                p_implosion: 10.0,
                p_ignition: 0.1,
                eta_pin1: 0.1,
                eta_pin2: 0.1,
                p_target: 1.0,
            }),
        };
        let err = Chamber::for_concept(ConfinementConcept::Tokamak, &eng).unwrap_err();
        assert!(matches!(err, CostingError::InvalidConcept(_)));
    }
}
