// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Scalar
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numeric type shared by every differentiable formula.
//!
//! Ordinary passes run on `f64`; sensitivity passes run the same code on
//! `num_dual::Dual64`, which carries one directional derivative alongside
//! the value.

use num_dual::DualNum;

/// A value that supports the arithmetic of the costing pipeline and can
/// carry derivatives.
pub trait Scalar: DualNum<f64> + Copy {}

impl<T: DualNum<f64> + Copy> Scalar for T {}

/// Lift a plain constant into the scalar type.
#[inline]
pub fn constant<D: Scalar>(value: f64) -> D {
    D::from(value)
}
