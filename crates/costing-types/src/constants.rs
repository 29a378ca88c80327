// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclear reaction energetics (MeV) and physical constants (SI, CODATA 2018).

/// 1 MeV in joules.
pub const MEV_TO_JOULES: f64 = 1.602_176_634e-13;

/// Atomic mass unit (kg).
pub const AMU_KG: f64 = 1.660_539_066_60e-27;

/// Deuteron mass (kg).
pub const M_DEUTERIUM_KG: f64 = 3.343_583_772_4e-27;

/// Helion (He-3 nucleus) mass (kg).
pub const M_HELIUM3_KG: f64 = 5.006_412_787_1e-27;

/// Proton mass (kg).
pub const M_PROTON_KG: f64 = 1.672_621_923_69e-27;

/// Li-6 atomic mass (kg), consumed one-for-one when breeding tritium.
pub const M_LITHIUM6_KG: f64 = 6.015_122_887_4 * AMU_KG;

/// B-11 atomic mass (kg).
pub const M_BORON11_KG: f64 = 11.009_305_36 * AMU_KG;

// D + T -> He4 (3.52) + n (14.06)
pub const E_ALPHA_DT: f64 = 3.52;
pub const E_N_DT: f64 = 14.06;
pub const Q_DT: f64 = 17.58;

// D + D -> T (1.01) + p (3.02)
pub const E_T_DD: f64 = 1.01;
pub const E_P_DD: f64 = 3.02;
pub const Q_DD_PT: f64 = 4.03;

// D + D -> He3 (0.82) + n (2.45)
pub const E_HE3_DD: f64 = 0.82;
pub const E_N_DD: f64 = 2.45;
pub const Q_DD_NHE3: f64 = 3.27;

// D + He3 -> He4 (3.6) + p (14.7)
pub const Q_DHE3: f64 = 18.35;

// p + B11 -> 3 He4
pub const Q_PB11: f64 = 8.68;

/// Charged-product energy of one primary DD event, branches taken 50/50.
pub const E_CHARGED_PRIMARY_DD: f64 = 0.5 * (E_T_DD + E_P_DD) + 0.5 * E_HE3_DD;

/// Neutron energy of one primary DD event, branches taken 50/50.
pub const E_NEUTRON_PRIMARY_DD: f64 = 0.5 * E_N_DD;

/// Total energy of one primary DD event, branches taken 50/50.
pub const E_TOTAL_PRIMARY_DD: f64 = 0.5 * Q_DD_PT + 0.5 * Q_DD_NHE3;

pub const HOURS_PER_YEAR: f64 = 8_760.0;

/// Julian year (s).
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Bremsstrahlung coefficient, `P[W] = C_BREM * Z_eff * n_e^2 * sqrt(T_e[keV]) * V`.
pub const C_BREMSSTRAHLUNG: f64 = 5.35e-37;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_dd_averages() {
        assert!((E_CHARGED_PRIMARY_DD - 2.425).abs() < 1e-12);
        assert!((E_NEUTRON_PRIMARY_DD - 1.225).abs() < 1e-12);
        assert!((E_TOTAL_PRIMARY_DD - 3.65).abs() < 1e-12);
    }

    #[test]
    fn test_dt_products_sum_to_q() {
        assert!((E_ALPHA_DT + E_N_DT - Q_DT).abs() < 1e-12);
    }
}
