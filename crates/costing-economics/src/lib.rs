// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Costing Economics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cost layer: costing coefficients, financing, the CAS ledger and LCOE.

pub mod constants;
pub mod financing;
pub mod ledger;
pub mod overrides;

pub use constants::CostingConstants;
pub use ledger::CostLayer;
pub use overrides::AccountOverrides;
