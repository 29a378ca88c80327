// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Concepts and Fuels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Confinement concepts, their families, and fusion fuels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CostingError;

/// Structural reactor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfinementFamily {
    /// Magnetic confinement.
    Mfe,
    /// Inertial confinement.
    Ife,
    /// Magneto-inertial confinement.
    Mif,
}

impl fmt::Display for ConfinementFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfinementFamily::Mfe => "MFE",
            ConfinementFamily::Ife => "IFE",
            ConfinementFamily::Mif => "MIF",
        };
        f.write_str(name)
    }
}

/// Chamber shape used for the radial build volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Elongated torus around a major radius.
    Torus,
    /// Straight cylinder of a given length.
    Cylinder,
    /// Spherical target chamber.
    Sphere,
}

/// Concrete confinement concept.
///
/// Declaration order is the tie-break order used when ranking concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfinementConcept {
    Tokamak,
    Stellarator,
    Mirror,
    LaserIfe,
    Zpinch,
    HeavyIon,
    MagTarget,
    PlasmaJet,
}

impl ConfinementConcept {
    pub const ALL: [ConfinementConcept; 8] = [
        ConfinementConcept::Tokamak,
        ConfinementConcept::Stellarator,
        ConfinementConcept::Mirror,
        ConfinementConcept::LaserIfe,
        ConfinementConcept::Zpinch,
        ConfinementConcept::HeavyIon,
        ConfinementConcept::MagTarget,
        ConfinementConcept::PlasmaJet,
    ];

    pub fn family(self) -> ConfinementFamily {
        match self {
            ConfinementConcept::Tokamak
            | ConfinementConcept::Stellarator
            | ConfinementConcept::Mirror => ConfinementFamily::Mfe,
            ConfinementConcept::LaserIfe
            | ConfinementConcept::Zpinch
            | ConfinementConcept::HeavyIon => ConfinementFamily::Ife,
            ConfinementConcept::MagTarget | ConfinementConcept::PlasmaJet => {
                ConfinementFamily::Mif
            }
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            ConfinementConcept::Tokamak | ConfinementConcept::Stellarator => Shape::Torus,
            ConfinementConcept::Mirror => Shape::Cylinder,
            ConfinementConcept::LaserIfe
            | ConfinementConcept::Zpinch
            | ConfinementConcept::HeavyIon
            | ConfinementConcept::MagTarget
            | ConfinementConcept::PlasmaJet => Shape::Sphere,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfinementConcept::Tokamak => "tokamak",
            ConfinementConcept::Stellarator => "stellarator",
            ConfinementConcept::Mirror => "mirror",
            ConfinementConcept::LaserIfe => "laser_ife",
            ConfinementConcept::Zpinch => "zpinch",
            ConfinementConcept::HeavyIon => "heavy_ion",
            ConfinementConcept::MagTarget => "mag_target",
            ConfinementConcept::PlasmaJet => "plasma_jet",
        }
    }
}

impl fmt::Display for ConfinementConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfinementConcept {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ConfinementConcept::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| CostingError::InvalidConcept(s.to_string()))
    }
}

/// Fusion fuel cycle.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fuel {
    #[serde(rename = "dt")]
    DT,
    #[serde(rename = "dd")]
    DD,
    #[serde(rename = "dhe3")]
    DHe3,
    #[serde(rename = "pb11")]
    PB11,
}

impl Fuel {
    pub const ALL: [Fuel; 4] = [Fuel::DT, Fuel::DD, Fuel::DHe3, Fuel::PB11];

    pub fn as_str(self) -> &'static str {
        match self {
            Fuel::DT => "dt",
            Fuel::DD => "dd",
            Fuel::DHe3 => "dhe3",
            Fuel::PB11 => "pb11",
        }
    }

    /// True when the fuel produces no fusion neutrons.
    pub fn is_aneutronic(self) -> bool {
        matches!(self, Fuel::PB11)
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fuel {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dt" | "d-t" => Ok(Fuel::DT),
            "dd" | "d-d" => Ok(Fuel::DD),
            "dhe3" | "d-he3" => Ok(Fuel::DHe3),
            "pb11" | "p-b11" => Ok(Fuel::PB11),
            _ => Err(CostingError::InvalidFuel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_concept_has_one_family() {
        let mfe = ConfinementConcept::ALL
            .iter()
            .filter(|c| c.family() == ConfinementFamily::Mfe)
            .count();
        let ife = ConfinementConcept::ALL
            .iter()
            .filter(|c| c.family() == ConfinementFamily::Ife)
            .count();
        let mif = ConfinementConcept::ALL
            .iter()
            .filter(|c| c.family() == ConfinementFamily::Mif)
            .count();
        assert_eq!(mfe + ife + mif, ConfinementConcept::ALL.len());
        assert_eq!(ConfinementConcept::Tokamak.family(), ConfinementFamily::Mfe);
        assert_eq!(ConfinementConcept::LaserIfe.family(), ConfinementFamily::Ife);
        assert_eq!(ConfinementConcept::MagTarget.family(), ConfinementFamily::Mif);
    }

    #[test]
    fn test_concept_string_roundtrip() {
        for concept in ConfinementConcept::ALL {
            let parsed: ConfinementConcept = concept.to_string().parse().unwrap();
            assert_eq!(parsed, concept);
        }
        assert!("not_a_concept".parse::<ConfinementConcept>().is_err());
    }

    #[test]
    fn test_fuel_parse() {
        assert_eq!("DT".parse::<Fuel>().unwrap(), Fuel::DT);
        assert_eq!("pb11".parse::<Fuel>().unwrap(), Fuel::PB11);
        assert_eq!("D-He3".parse::<Fuel>().unwrap(), Fuel::DHe3);
        match "dli".parse::<Fuel>() {
            Err(CostingError::InvalidFuel(s)) => assert_eq!(s, "dli"),
            other => panic!("expected InvalidFuel, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ConfinementConcept::LaserIfe).unwrap();
        assert_eq!(json, "\"laser_ife\"");
        let fuel: Fuel = serde_json::from_str("\"dhe3\"").unwrap();
        assert_eq!(fuel, Fuel::DHe3);
    }
}
