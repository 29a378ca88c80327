// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Radiation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plasma radiation losses for magnetic confinement.

use costing_types::constants::C_BREMSSTRAHLUNG;
use costing_types::params::MfeParams;
use costing_types::scalar::Scalar;

/// Volume-integrated bremsstrahlung [MW] for a uniform plasma.
///
/// `P = C_B * Z_eff * n_e^2 * sqrt(T_e) * V`, with `n_e` in m^-3 and `T_e`
/// in keV. The loss is carried by charged-particle power already counted in
/// `p_ash`, so it is reported but not subtracted again.
pub fn bremsstrahlung_mw<D: Scalar>(p: &MfeParams<D>) -> D {
    p.z_eff * p.n_e * p.n_e * p.t_e.sqrt() * p.plasma_volume * (C_BREMSSTRAHLUNG * 1.0e-6)
}
