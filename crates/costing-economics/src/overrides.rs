// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Account Overrides
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Caller-pinned cost account values.
//!
//! A pinned account takes the caller's value in place of its formula.
//! The pin is applied as soon as the account is computed, so every
//! aggregate above it sees the pinned value. A pinned account is a
//! constant and carries no derivative.

use std::collections::BTreeMap;

use costing_types::accounts::CostAccount;
use costing_types::scalar::{constant, Scalar};
use costing_types::{CostingError, CostingResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountOverrides {
    pins: BTreeMap<CostAccount, f64>,
}

impl AccountOverrides {
    /// Parse `cost_overrides`. Every key must name a cost account.
    pub fn parse(raw: &BTreeMap<String, f64>) -> CostingResult<Self> {
        let mut pins = BTreeMap::new();
        for (key, &value) in raw {
            let account: CostAccount = key.parse()?;
            if !value.is_finite() {
                return Err(CostingError::invalid_parameter(
                    key,
                    format!("override {value} is not finite"),
                ));
            }
            pins.insert(account, value);
        }
        Ok(Self { pins })
    }

    /// The pinned value of `account`, or `computed` when it is not pinned.
    #[inline]
    pub fn pin<D: Scalar>(&self, account: CostAccount, computed: D) -> D {
        match self.pins.get(&account) {
            Some(&value) => constant(value),
            None => computed,
        }
    }
}
