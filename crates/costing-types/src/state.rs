// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Power Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Per-module power balance [MW].
///
/// Sinks that do not exist for the active family hold exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTable<T = f64> {
    /// Fusion power.
    pub p_fus: T,
    /// Charged-particle fusion power.
    pub p_ash: T,
    /// Neutron fusion power.
    pub p_neutron: T,
    /// Bremsstrahlung estimate (MFE only; part of `p_ash`, not an extra sink).
    pub p_rad: T,
    /// Heating or driver power delivered to the plasma/target.
    pub p_heating: T,
    /// Thermal power to the conversion cycle.
    pub p_th: T,
    /// Thermal-cycle electric power.
    pub p_the: T,
    /// Direct-conversion electric power.
    pub p_dee: T,
    /// Gross electric power.
    pub p_et: T,
    /// Heat rejected by the thermal cycle.
    pub p_loss: T,
    /// Subsystem power.
    pub p_sub: T,
    /// Coolant pumping electric power.
    pub p_pump: T,
    /// Tritium systems plus house load.
    pub p_aux: T,
    pub p_cryo: T,
    pub p_coils: T,
    pub p_cool: T,
    /// Wall-plug power of the heating system or driver.
    pub p_wallplug: T,
    /// Target or liner factory power.
    pub p_target: T,
    /// Total recirculating power.
    pub p_scirc: T,
    /// Net electric power.
    pub p_net: T,
    /// Scientific gain `p_fus / p_heating`.
    pub q_sci: T,
    /// Engineering gain `p_et / p_scirc`.
    pub q_eng: T,
    /// Recirculating fraction `p_scirc / p_et`.
    pub rec_frac: T,
}
