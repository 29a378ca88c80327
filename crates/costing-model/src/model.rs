// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Cost Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Forward costing model for one confinement concept and fuel.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use costing_types::accounts::CostBreakdown;
use costing_types::config::CostingInput;
use costing_types::params::ResolvedParams;
use costing_types::state::PowerTable;
use costing_types::validation::validate;
use costing_types::{ConfinementConcept, CostingError, CostingResult, Fuel};

use crate::pipeline::Pipeline;
use crate::resolve::resolve;
use crate::sensitivity;

/// Outcome of one forward pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    pub concept: ConfinementConcept,
    pub fuel: Fuel,
    /// Per-module power balance.
    pub power_table: PowerTable,
    /// Plant-level cost ledger.
    pub costs: CostBreakdown,
    /// Every parameter the pass used, after template resolution.
    pub params: ResolvedParams,
    /// Validator and physics warnings.
    pub warnings: Vec<String>,
}

/// Costing model bound to a concept and fuel. Holds no other state; one
/// instance serves any number of independent passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    concept: ConfinementConcept,
    fuel: Fuel,
}

impl CostModel {
    pub fn new(concept: ConfinementConcept, fuel: Fuel) -> Self {
        Self { concept, fuel }
    }

    pub fn concept(&self) -> ConfinementConcept {
        self.concept
    }

    pub fn fuel(&self) -> Fuel {
        self.fuel
    }

    /// Cost a plant of `net_electric_mw` with every other input at its
    /// default.
    pub fn forward(
        &self,
        net_electric_mw: f64,
        availability: f64,
        lifetime_yr: f64,
    ) -> CostingResult<ResultBundle> {
        let mut input = CostingInput::new(self.concept, self.fuel, net_electric_mw);
        input.availability = availability;
        input.lifetime_yr = lifetime_yr;
        self.forward_input(&input)
    }

    /// Validate, resolve and cost a full request.
    pub fn forward_input(&self, input: &CostingInput) -> CostingResult<ResultBundle> {
        if input.concept != self.concept || input.fuel != self.fuel {
            return Err(CostingError::ConceptMismatch {
                input: format!("{}/{}", input.concept, input.fuel),
                model: format!("{}/{}", self.concept, self.fuel),
            });
        }
        let report = validate(input)?;
        let params = resolve(input);
        let mut bundle = self.evaluate(params)?;
        let mut warnings = report.warnings;
        warnings.append(&mut bundle.warnings);
        bundle.warnings = warnings;
        Ok(bundle)
    }

    /// Cost an already resolved parameter set.
    pub fn evaluate(&self, params: ResolvedParams) -> CostingResult<ResultBundle> {
        let pipeline = Pipeline::for_params(&params)?;
        let (power_table, costs) = pipeline.evaluate_checked(&params)?;

        let mut warnings = Vec::new();
        if power_table.p_rad > power_table.p_ash {
            warnings.push(format!(
                "bremsstrahlung {:.1} MW exceeds charged fusion power {:.1} MW",
                power_table.p_rad, power_table.p_ash
            ));
        }

        debug!(
            target: "costing::model",
            concept = %params.concept,
            fuel = %params.fuel,
            p_fus = power_table.p_fus,
            p_net = power_table.p_net,
            lcoe = costs.lcoe,
            "forward pass"
        );

        Ok(ResultBundle {
            concept: params.concept,
            fuel: params.fuel,
            power_table,
            costs,
            params,
            warnings,
        })
    }

    /// Exact LCOE gradient with respect to every applicable scalar of
    /// `params`.
    pub fn sensitivity(&self, params: &ResolvedParams) -> CostingResult<BTreeMap<String, f64>> {
        if params.concept != self.concept || params.fuel != self.fuel {
            return Err(CostingError::ConceptMismatch {
                input: format!("{}/{}", params.concept, params.fuel),
                model: format!("{}/{}", self.concept, self.fuel),
            });
        }
        sensitivity::lcoe_gradient(params)
    }
}
