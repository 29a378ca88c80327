// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Financing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Discounting, capital recovery and levelized cost.
//!
//! Powers with a non-integer exponent are written as `exp(n ln(1 + r))`
//! so they stay differentiable in both the rate and the exponent.

use costing_types::constants::HOURS_PER_YEAR;
use costing_types::params::FinancialParams;
use costing_types::scalar::Scalar;
use costing_types::{CostingError, CostingResult};

/// `(1 + base)^exponent`.
fn compound<D: Scalar>(base: D, exponent: D) -> D {
    ((D::one() + base).ln() * exponent).exp()
}

/// Real discount rate from nominal interest and inflation.
pub fn real_rate<D: Scalar>(interest: D, inflation: D) -> D {
    (D::one() + interest) / (D::one() + inflation) - D::one()
}

/// Capital recovery factor `r / (1 - (1 + r)^-n)`.
pub fn capital_recovery_factor<D: Scalar>(rate: D, years: D) -> D {
    rate / (D::one() - compound(rate, -years))
}

/// Interest during construction as a fraction of overnight cost, with
/// spending centred on the midpoint of the build: `(1 + i)^(T/2) - 1`.
pub fn construction_interest_fraction<D: Scalar>(interest: D, construction_yr: D) -> D {
    compound(interest, construction_yr * 0.5_f64) - D::one()
}

/// Delivered energy per year [MWh].
pub fn annual_energy_mwh<D: Scalar>(net_electric_mw: D, availability: D) -> D {
    net_electric_mw * availability * HOURS_PER_YEAR
}

/// Levelized cost [$/MWh] of annual charges given in M$/yr.
pub fn levelized_cost<D: Scalar>(annual_charges_musd: D, annual_energy_mwh: D) -> D {
    annual_charges_musd * 1.0e6_f64 / annual_energy_mwh
}

/// Reject financial assumptions that make levelization meaningless.
pub fn check_financial(f: &FinancialParams) -> CostingResult<()> {
    let fail = |name: &str, value: f64, expected: &str| {
        Err(CostingError::invalid_parameter(
            name,
            format!("{value} must be {expected}"),
        ))
    };
    if !(f.availability > 0.0 && f.availability <= 1.0) {
        return fail("availability", f.availability, "in (0, 1]");
    }
    if !(f.lifetime_yr.is_finite() && f.lifetime_yr > 0.0) {
        return fail("lifetime_yr", f.lifetime_yr, "positive");
    }
    if !(f.construction_time_yr.is_finite() && f.construction_time_yr > 0.0) {
        return fail("construction_time_yr", f.construction_time_yr, "positive");
    }
    if !(f.interest_rate.is_finite() && f.interest_rate > 0.0) {
        return fail("interest_rate", f.interest_rate, "positive");
    }
    if !(f.inflation_rate.is_finite() && f.inflation_rate > -1.0) {
        return fail("inflation_rate", f.inflation_rate, "greater than -1");
    }
    let r = real_rate(f.interest_rate, f.inflation_rate);
    if r <= 0.0 {
        return fail("interest_rate", f.interest_rate, "above inflation (real rate is not positive)");
    }
    Ok(())
}
