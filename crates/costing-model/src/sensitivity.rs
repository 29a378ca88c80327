// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Sensitivity Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exact LCOE gradients by forward-mode dual numbers.
//!
//! One pass per applicable scalar: the scalar is seeded with a unit
//! derivative, every other scalar with zero, and the derivative part of
//! the resulting LCOE is the partial derivative. Scalars the concept's
//! family does not have never enter the record, so they never appear
//! in the result.

use std::collections::BTreeMap;

use num_dual::Dual64;
use tracing::debug;

use costing_types::params::ResolvedParams;
use costing_types::CostingResult;

use crate::pipeline::Pipeline;

/// `d lcoe / d x` for every applicable scalar `x` of `params` [$/MWh per unit].
///
/// The base point is evaluated on the checked path first, so a gradient
/// is only ever reported for a valid plant.
pub fn lcoe_gradient(params: &ResolvedParams) -> CostingResult<BTreeMap<String, f64>> {
    let pipeline = Pipeline::for_params(params)?;
    pipeline.evaluate_checked(params)?;

    let mut gradient = BTreeMap::new();
    for (name, _) in params.scalars() {
        let seeded = params.map(|field, value| Dual64::new(value, if field == name { 1.0 } else { 0.0 }));
        let (_, costs) = pipeline.evaluate(&seeded)?;
        gradient.insert(name.to_string(), costs.lcoe.eps);
    }

    debug!(
        target: "costing::sensitivity",
        concept = %params.concept,
        parameters = gradient.len(),
        "lcoe gradient"
    );
    Ok(gradient)
}
