// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Costing Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form plant physics: fuel energetics, radial build, radiation
//! and the power balance. Every formula is generic over
//! [`costing_types::Scalar`] so the same code yields exact gradients.

pub mod fuel;
pub mod geometry;
pub mod power_balance;
pub mod radiation;

pub use fuel::ash_neutron_split;
pub use power_balance::PowerBalance;
