// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Cost Accounts
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cost account structure (CAS) keys and the ledger they index.
//!
//! Capital accounts are in M$; CAS70, CAS80 and CAS90 are in M$/yr;
//! `lcoe` is in $/MWh.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CostingError;

macro_rules! cost_accounts {
    ( $( $(#[$doc:meta])* $field:ident => $variant:ident, )* ) => {
        /// Overridable cost account.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum CostAccount {
            $( $(#[$doc])* $variant, )*
        }

        impl CostAccount {
            pub const ALL: &'static [CostAccount] = &[$( CostAccount::$variant ),*];

            pub fn key(self) -> &'static str {
                match self {
                    $( CostAccount::$variant => stringify!($field), )*
                }
            }
        }

        /// Full cost ledger of one forward pass.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct CostBreakdown<T = f64> {
            $( $(#[$doc])* pub $field: T, )*
            /// Overnight capital plus interest during construction [M$].
            pub total_capital: T,
            /// Levelized cost of electricity [$/MWh].
            pub lcoe: T,
        }

        impl<T: Copy> CostBreakdown<T> {
            pub fn get(&self, account: CostAccount) -> T {
                match account {
                    $( CostAccount::$variant => self.$field, )*
                }
            }
        }
    };
}

cost_accounts! {
    /// Land and land rights.
    cas11 => Cas11,
    /// Site permits.
    cas12 => Cas12,
    /// Plant licensing; depends on the fuel's radiological hazard.
    cas13 => Cas13,
    /// Plant permits.
    cas14 => Cas14,
    /// Plant studies.
    cas15 => Cas15,
    /// Plant reports.
    cas16 => Cas16,
    /// Other pre-construction costs.
    cas17 => Cas17,
    /// Pre-construction contingency.
    cas19 => Cas19,
    /// Pre-construction total.
    cas10 => Cas10,
    /// Structures and site facilities.
    cas21 => Cas21,
    /// First wall and blanket.
    cas220101 => Cas220101,
    /// High-temperature shield.
    cas220102 => Cas220102,
    /// Coils and magnets.
    cas220103 => Cas220103,
    /// Supplementary heating or driver.
    cas220104 => Cas220104,
    /// Primary structure.
    cas220105 => Cas220105,
    /// Vacuum system and vessel.
    cas220106 => Cas220106,
    /// Power supplies.
    cas220107 => Cas220107,
    /// Target or liner factory.
    cas220108 => Cas220108,
    /// Direct energy converter.
    cas220109 => Cas220109,
    /// Assembly and installation.
    cas220111 => Cas220111,
    /// Reactor equipment subtotal.
    cas2201 => Cas2201,
    /// Main heat transfer and transport.
    cas2202 => Cas2202,
    /// Auxiliary cooling.
    cas2203 => Cas2203,
    /// Radioactive waste handling.
    cas2204 => Cas2204,
    /// Fuel handling and storage.
    cas2205 => Cas2205,
    /// Other reactor plant equipment.
    cas2206 => Cas2206,
    /// Instrumentation and control.
    cas2207 => Cas2207,
    /// Reactor plant equipment total.
    cas22 => Cas22,
    /// Turbine plant equipment.
    cas23 => Cas23,
    /// Electric plant equipment.
    cas24 => Cas24,
    /// Miscellaneous plant equipment.
    cas25 => Cas25,
    /// Heat rejection.
    cas26 => Cas26,
    /// Special materials.
    cas27 => Cas27,
    /// Digital twin.
    cas28 => Cas28,
    /// Direct-cost contingency.
    cas29 => Cas29,
    /// Direct capital total.
    cas20 => Cas20,
    /// Indirect service costs.
    cas30 => Cas30,
    /// Owner's costs.
    cas40 => Cas40,
    /// Shipping, spare parts and initial inventories.
    cas51 => Cas51,
    /// Decommissioning provision.
    cas58 => Cas58,
    /// Supplementary costs total.
    cas50 => Cas50,
    /// Interest during construction.
    cas60 => Cas60,
    /// Fixed O&M [M$/yr].
    cas71 => Cas71,
    /// Scheduled component replacement [M$/yr].
    cas72 => Cas72,
    /// Variable O&M [M$/yr].
    cas73 => Cas73,
    /// Annual O&M total [M$/yr].
    cas70 => Cas70,
    /// Annual fuel [M$/yr].
    cas80 => Cas80,
    /// Annualized capital charge [M$/yr].
    cas90 => Cas90,
}

impl fmt::Display for CostAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CostAccount {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CostAccount::ALL
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or_else(|| CostingError::UnknownOverride {
                kind: "cost account",
                key: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        for (i, a) in CostAccount::ALL.iter().enumerate() {
            assert_eq!(a.key().parse::<CostAccount>().unwrap(), *a);
            for b in &CostAccount::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_serde_key_matches_field_name() {
        let json = serde_json::to_string(&CostAccount::Cas220103).unwrap();
        assert_eq!(json, "\"cas220103\"");
    }

    #[test]
    fn test_unknown_account_is_an_override_error() {
        match "cas999".parse::<CostAccount>() {
            Err(CostingError::UnknownOverride { kind, key }) => {
                assert_eq!(kind, "cost account");
                assert_eq!(key, "cas999");
            }
            other => panic!("expected UnknownOverride, got {other:?}"),
        }
    }
}
