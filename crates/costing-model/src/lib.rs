// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Costing Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fusion plant costing: forward model, exact LCOE gradients and
//! cross-concept ranking.
//!
//! ```no_run
//! use costing_model::CostModel;
//! use costing_types::{ConfinementConcept, Fuel};
//!
//! # fn main() -> costing_types::CostingResult<()> {
//! let model = CostModel::new(ConfinementConcept::Tokamak, Fuel::DT);
//! let result = model.forward(1_000.0, 0.85, 30.0)?;
//! let gradients = model.sensitivity(&result.params)?;
//! println!("LCOE {:.1} $/MWh, dLCOE/deta_th {:.1}", result.costs.lcoe, gradients["eta_th"]);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod model;
pub mod pipeline;
pub mod resolve;
pub mod sensitivity;
pub mod templates;

pub use compare::{compare_all, compare_concepts, ConceptComparison};
pub use model::{CostModel, ResultBundle};
