// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Evaluation Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Power balance followed by the cost ledger, for one parameter set.
//!
//! [`Pipeline::evaluate`] is generic over the scalar type and is what the
//! sensitivity pass differentiates. [`Pipeline::evaluate_checked`] is the
//! plain-value path with every domain check enabled.

use costing_economics::{AccountOverrides, CostLayer, CostingConstants};
use costing_physics::geometry::{Chamber, RadialBuild};
use costing_physics::PowerBalance;
use costing_types::accounts::CostBreakdown;
use costing_types::params::ResolvedParams;
use costing_types::scalar::Scalar;
use costing_types::state::PowerTable;
use costing_types::CostingResult;

/// Costing coefficients and account pins parsed from a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    constants: CostingConstants,
    overrides: AccountOverrides,
}

impl Pipeline {
    /// Parse the override maps carried by `params`. Unknown keys fail.
    pub fn for_params<T>(params: &ResolvedParams<T>) -> CostingResult<Self> {
        Ok(Self {
            constants: CostingConstants::with_overrides(&params.costing_overrides)?,
            overrides: AccountOverrides::parse(&params.cost_overrides)?,
        })
    }

    /// Unchecked evaluation in any scalar type.
    pub fn evaluate<D: Scalar>(
        &self,
        params: &ResolvedParams<D>,
    ) -> CostingResult<(PowerTable<D>, CostBreakdown<D>)> {
        let table = PowerBalance::new(params.fuel, &params.engineering, &params.burn)
            .inverse(params.module_net_electric());
        let chamber = Chamber::for_concept(params.concept, &params.engineering)?;
        let build = RadialBuild::new(&chamber, &params.engineering);
        let costs = CostLayer::new(&self.constants, &self.overrides).evaluate(params, &table, &build);
        Ok((table, costs))
    }

    /// Checked evaluation on plain values.
    pub fn evaluate_checked(&self, params: &ResolvedParams) -> CostingResult<(PowerTable, CostBreakdown)> {
        let table = PowerBalance::new(params.fuel, &params.engineering, &params.burn)
            .solve(params.module_net_electric())?;
        let chamber = Chamber::for_concept(params.concept, &params.engineering)?;
        let build = RadialBuild::new(&chamber, &params.engineering);
        let costs = CostLayer::new(&self.constants, &self.overrides).evaluate_checked(params, &table, &build)?;
        Ok((table, costs))
    }
}
