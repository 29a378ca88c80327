// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Cross-Concept Comparison
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rank confinement concepts by LCOE for a shared fuel and output.

use serde::Serialize;
use tracing::warn;

use costing_types::config::CostingInput;
use costing_types::{ConfinementConcept, ConfinementFamily, CostingError, CostingResult, Fuel};

use crate::model::{CostModel, ResultBundle};

/// One ranked concept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptComparison {
    pub concept: ConfinementConcept,
    pub family: ConfinementFamily,
    /// [$/MWh]
    pub lcoe: f64,
    pub result: ResultBundle,
}

/// Cost `base` under each of `concepts` and rank by ascending LCOE.
///
/// A concept whose pass fails is logged and dropped. Equal LCOEs keep
/// the order of `concepts`. Fails only if every concept fails.
pub fn compare_concepts(
    base: &CostingInput,
    concepts: &[ConfinementConcept],
) -> CostingResult<Vec<ConceptComparison>> {
    let mut ranked = Vec::with_capacity(concepts.len());
    let mut failures = Vec::new();

    for &concept in concepts {
        let mut input = base.clone();
        input.concept = concept;
        match CostModel::new(concept, base.fuel).forward_input(&input) {
            Ok(result) => ranked.push(ConceptComparison {
                concept,
                family: concept.family(),
                lcoe: result.costs.lcoe,
                result,
            }),
            Err(err) => {
                warn!(
                    target: "costing::compare",
                    concept = %concept,
                    error = %err,
                    "concept dropped from comparison"
                );
                failures.push((concept.to_string(), err.to_string()));
            }
        }
    }

    if ranked.is_empty() && !failures.is_empty() {
        return Err(CostingError::AllConceptsFailed(failures));
    }
    ranked.sort_by(|a, b| a.lcoe.total_cmp(&b.lcoe));
    Ok(ranked)
}

/// Rank every supported concept for `fuel` at the given output.
pub fn compare_all(
    net_electric_mw: f64,
    availability: f64,
    lifetime_yr: f64,
    fuel: Fuel,
) -> CostingResult<Vec<ConceptComparison>> {
    let mut base = CostingInput::new(ConfinementConcept::Tokamak, fuel, net_electric_mw);
    base.availability = availability;
    base.lifetime_yr = lifetime_yr;
    compare_concepts(&base, &ConfinementConcept::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_all_returns_ranking() {
        let results = compare_all(1_000.0, 0.85, 30.0, Fuel::DT).expect("ranking");
        assert_eq!(results.len(), ConfinementConcept::ALL.len());
        for pair in results.windows(2) {
            assert!(pair[0].lcoe <= pair[1].lcoe, "{} > {}", pair[0].lcoe, pair[1].lcoe);
        }
    }

    #[test]
    fn test_failing_concepts_are_dropped() {
        // A zero target factory is fatal for IFE and MIF but ignored by MFE.
        let mut base = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, 1_000.0);
        base.engineering.p_target = Some(0.0);
        let results = compare_concepts(&base, &ConfinementConcept::ALL).expect("MFE survives");
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.family == ConfinementFamily::Mfe));
    }

    #[test]
    fn test_every_concept_failing_is_an_error() {
        let base = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, -1.0);
        let err = compare_concepts(&base, &ConfinementConcept::ALL).unwrap_err();
        match err {
            CostingError::AllConceptsFailed(failures) => assert_eq!(failures.len(), 8),
            other => panic!("expected AllConceptsFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let base = CostingInput::new(ConfinementConcept::Tokamak, Fuel::DT, 1_000.0);
        let results = compare_concepts(
            &base,
            &[ConfinementConcept::Tokamak, ConfinementConcept::Tokamak],
        )
        .expect("ranking");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result, results[1].result);
    }
}
