// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Power Balance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plant power flow: fusion power to net electric, and back.
//!
//! Forward chain per module:
//!
//! ```text
//! p_fus -> (p_ash, p_neutron) -> p_th -> p_the (+ p_dee) = p_et
//! p_net = p_et - p_scirc
//! ```
//!
//! Every term is affine in `p_fus`, so the inverse probes the forward
//! chain at `p_fus = 0` and `p_fus = 1` and solves the line exactly.

use tracing::{debug, warn};

use costing_types::params::{BurnFractions, EngineeringParams, FamilyParams};
use costing_types::scalar::Scalar;
use costing_types::state::PowerTable;
use costing_types::{CostingError, CostingResult, Fuel};

use crate::fuel::ash_neutron_split;
use crate::radiation::bremsstrahlung_mw;

/// Terms that depend on the confinement family.
struct FamilyTerms<D> {
    p_th: D,
    p_dee: D,
    p_heating: D,
    p_wallplug: D,
    p_coils: D,
    p_cool: D,
    p_target: D,
    p_rad: D,
}

/// Power balance of one module for a fixed fuel and parameter set.
pub struct PowerBalance<'a, D> {
    fuel: Fuel,
    engineering: &'a EngineeringParams<D>,
    burn: &'a BurnFractions<D>,
}

impl<'a, D: Scalar> PowerBalance<'a, D> {
    pub fn new(fuel: Fuel, engineering: &'a EngineeringParams<D>, burn: &'a BurnFractions<D>) -> Self {
        Self {
            fuel,
            engineering,
            burn,
        }
    }

    /// Full power table at fusion power `p_fus` [MW].
    pub fn forward(&self, p_fus: D) -> PowerTable<D> {
        let c = &self.engineering.common;
        let zero = D::zero();
        let (p_ash, p_neutron) = ash_neutron_split(p_fus, self.fuel, self.burn);
        let blanket_heat = c.mn * p_neutron;

        let t = match &self.engineering.family {
            FamilyParams::Mfe(m) => {
                // Charged power plus absorbed heating reaches the wall or
                // the direct converter; converter losses stay thermal.
                let charged = p_ash + m.p_input;
                let p_dee = m.eta_de * m.f_dec * charged;
                FamilyTerms {
                    p_th: blanket_heat + charged - p_dee + c.p_pump,
                    p_dee,
                    p_heating: m.p_input,
                    p_wallplug: m.p_input / m.eta_pin,
                    p_coils: m.p_coils,
                    p_cool: m.p_cool,
                    p_target: zero,
                    p_rad: bremsstrahlung_mw(m),
                }
            }
            FamilyParams::Ife(i) => {
                let p_heating = i.p_implosion + i.p_ignition;
                FamilyTerms {
                    p_th: blanket_heat + p_ash + p_heating + c.p_pump,
                    p_dee: zero,
                    p_heating,
                    p_wallplug: i.p_implosion / i.eta_pin1 + i.p_ignition / i.eta_pin2,
                    p_coils: zero,
                    p_cool: zero,
                    p_target: i.p_target,
                    p_rad: zero,
                }
            }
            FamilyParams::Mif(m) => FamilyTerms {
                p_th: blanket_heat + p_ash + m.p_driver + c.p_pump,
                p_dee: zero,
                p_heating: m.p_driver,
                p_wallplug: m.p_driver / m.eta_pin,
                p_coils: m.p_coils,
                p_cool: zero,
                p_target: m.p_target,
                p_rad: zero,
            },
        };

        let p_the = c.eta_th * t.p_th;
        let p_et = p_the + t.p_dee;
        let p_sub = c.f_sub * p_the;
        let p_pump = c.p_pump / c.eta_p;
        let p_aux = c.p_trit + c.p_house;
        let p_scirc = p_sub
            + p_aux
            + c.p_cryo
            + p_pump
            + t.p_coils
            + t.p_cool
            + t.p_wallplug
            + t.p_target;

        PowerTable {
            p_fus,
            p_ash,
            p_neutron,
            p_rad: t.p_rad,
            p_heating: t.p_heating,
            p_th: t.p_th,
            p_the,
            p_dee: t.p_dee,
            p_et,
            p_loss: t.p_th - p_the,
            p_sub,
            p_pump,
            p_aux,
            p_cryo: c.p_cryo,
            p_coils: t.p_coils,
            p_cool: t.p_cool,
            p_wallplug: t.p_wallplug,
            p_target: t.p_target,
            p_scirc,
            p_net: p_et - p_scirc,
            q_sci: p_fus / t.p_heating,
            q_eng: p_et / p_scirc,
            rec_frac: p_scirc / p_et,
        }
    }

    /// Intercept and slope of `p_net` as a function of `p_fus`.
    pub fn net_line(&self) -> (D, D) {
        let intercept = self.forward(D::zero()).p_net;
        let slope = self.forward(D::one()).p_net - intercept;
        (intercept, slope)
    }

    /// Power table whose net electric output equals `p_net` [MW].
    ///
    /// Unchecked: a non-positive slope yields a meaningless table. Use
    /// [`PowerBalance::solve`] on plain values.
    pub fn inverse(&self, p_net: D) -> PowerTable<D> {
        let (intercept, slope) = self.net_line();
        self.forward((p_net - intercept) / slope)
    }
}

fn require(name: &str, value: f64, ok: bool, expected: &str) -> CostingResult<()> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(CostingError::invalid_parameter(
            name,
            format!("{value} must be {expected}"),
        ))
    }
}

fn efficiency(name: &str, value: f64) -> CostingResult<()> {
    require(name, value, value > 0.0 && value <= 1.0, "in (0, 1]")
}

fn fraction(name: &str, value: f64) -> CostingResult<()> {
    require(name, value, (0.0..1.0).contains(&value), "in [0, 1)")
}

fn positive(name: &str, value: f64) -> CostingResult<()> {
    require(name, value, value > 0.0, "positive")
}

fn non_negative(name: &str, value: f64) -> CostingResult<()> {
    require(name, value, value >= 0.0, "non-negative")
}

impl PowerBalance<'_, f64> {
    /// Reject parameter values no plant can have.
    pub fn check_parameters(&self) -> CostingResult<()> {
        let c = &self.engineering.common;
        positive("mn", c.mn)?;
        efficiency("eta_th", c.eta_th)?;
        efficiency("eta_p", c.eta_p)?;
        fraction("f_sub", c.f_sub)?;
        for (name, value) in [
            ("p_pump", c.p_pump),
            ("p_trit", c.p_trit),
            ("p_house", c.p_house),
            ("p_cryo", c.p_cryo),
            ("blanket_t", c.blanket_t),
            ("ht_shield_t", c.ht_shield_t),
            ("structure_t", c.structure_t),
            ("vessel_t", c.vessel_t),
        ] {
            non_negative(name, value)?;
        }
        positive("plasma_t", c.plasma_t)?;

        match &self.engineering.family {
            FamilyParams::Mfe(m) => {
                positive("p_input", m.p_input)?;
                efficiency("eta_pin", m.eta_pin)?;
                efficiency("eta_de", m.eta_de)?;
                fraction("f_dec", m.f_dec)?;
                non_negative("p_coils", m.p_coils)?;
                non_negative("p_cool", m.p_cool)?;
                positive("axis_t", m.axis_t)?;
                positive("elon", m.elon)?;
                positive("t_e", m.t_e)?;
                positive("z_eff", m.z_eff)?;
                non_negative("n_e", m.n_e)?;
                non_negative("plasma_volume", m.plasma_volume)?;
                non_negative("b", m.b)?;
            }
            FamilyParams::Ife(i) => {
                non_negative("p_implosion", i.p_implosion)?;
                non_negative("p_ignition", i.p_ignition)?;
                positive("p_implosion + p_ignition", i.p_implosion + i.p_ignition)?;
                efficiency("eta_pin1", i.eta_pin1)?;
                efficiency("eta_pin2", i.eta_pin2)?;
                positive("p_target", i.p_target)?;
            }
            FamilyParams::Mif(m) => {
                positive("p_driver", m.p_driver)?;
                efficiency("eta_pin", m.eta_pin)?;
                positive("p_target", m.p_target)?;
                non_negative("p_coils", m.p_coils)?;
            }
        }

        for (name, value) in self.burn.scalars() {
            require(name, value, (0.0..=1.0).contains(&value), "in [0, 1]")?;
        }
        Ok(())
    }

    /// Checked inverse balance for a net electric target `p_net` [MW].
    pub fn solve(&self, p_net: f64) -> CostingResult<PowerTable> {
        positive("net_electric_mw", p_net)?;
        self.check_parameters()?;

        let (intercept, slope) = self.net_line();
        if !(slope.is_finite() && slope > 0.0) {
            return Err(CostingError::invalid_parameter(
                "p_fus",
                format!("net electric output does not grow with fusion power (slope {slope:.4})"),
            ));
        }
        let p_fus = (p_net - intercept) / slope;
        if !(p_fus.is_finite() && p_fus > 0.0) {
            return Err(CostingError::invalid_parameter(
                "p_fus",
                format!("no positive fusion power yields {p_net} MW net (got {p_fus:.3} MW)"),
            ));
        }

        let table = self.forward(p_fus);
        if !(table.p_et > 0.0 && table.p_net > 0.0) {
            return Err(CostingError::invalid_parameter(
                "p_net",
                format!("gross {:.3} MW, net {:.3} MW", table.p_et, table.p_net),
            ));
        }
        if table.p_rad > table.p_ash {
            warn!(
                target: "costing::physics",
                p_rad = table.p_rad,
                p_ash = table.p_ash,
                "bremsstrahlung exceeds charged-particle power"
            );
        }
        debug!(
            target: "costing::physics",
            fuel = %self.fuel,
            p_fus = table.p_fus,
            p_et = table.p_et,
            q_eng = table.q_eng,
            "power balance solved"
        );
        Ok(table)
    }
}
