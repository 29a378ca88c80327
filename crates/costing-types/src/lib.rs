// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Costing Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared vocabulary of the costing workspace: confinement concepts and
//! fuels, parameter records, the power table, the cost account ledger,
//! the validated input record and the error type.

pub mod accounts;
pub mod concept;
pub mod config;
pub mod constants;
pub mod error;
pub mod params;
pub mod scalar;
pub mod state;
pub mod validation;

pub use concept::{ConfinementConcept, ConfinementFamily, Fuel, Shape};
pub use error::{CostingError, CostingResult};
pub use scalar::Scalar;
