use crate::amount::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one account in the ledger. Unique across all records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Ee,
    Gb,
    Us,
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CountryCode::Ee => "EE",
            CountryCode::Gb => "GB",
            CountryCode::Us => "US",
        };
        f.write_str(code)
    }
}

/// Full routing details of a beneficiary's bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankInfo {
    pub name: String,
    pub address: String,
    pub country_code: CountryCode,
    pub swift_code: String,
}

/// The ledger's authoritative stored state for one account.
///
/// One variant per destination kind: own-bank accounts carry no identity
/// beyond their number, domestic (SEPA-area) accounts carry the holder's
/// full name, international accounts additionally carry the holder's address
/// and full bank details. Records are only ever replaced whole by the
/// ledger's transfer operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccountRecord {
    Own {
        number: AccountNumber,
        balance: Amount,
    },
    Domestic {
        number: AccountNumber,
        balance: Amount,
        full_name: String,
    },
    International {
        number: AccountNumber,
        balance: Amount,
        full_name: String,
        address: String,
        bank: BankInfo,
    },
}

impl AccountRecord {
    pub fn number(&self) -> &AccountNumber {
        match self {
            AccountRecord::Own { number, .. }
            | AccountRecord::Domestic { number, .. }
            | AccountRecord::International { number, .. } => number,
        }
    }

    pub fn balance(&self) -> Amount {
        match self {
            AccountRecord::Own { balance, .. }
            | AccountRecord::Domestic { balance, .. }
            | AccountRecord::International { balance, .. } => *balance,
        }
    }

    /// Returns a copy of this record with the signed volume applied to its
    /// balance and every other field unchanged. No bounds checking happens
    /// here; the ledger validates before it applies.
    pub fn apply_delta(&self, delta: Decimal) -> AccountRecord {
        let mut next = self.clone();
        match &mut next {
            AccountRecord::Own { balance, .. }
            | AccountRecord::Domestic { balance, .. }
            | AccountRecord::International { balance, .. } => balance.volume += delta,
        }
        next
    }
}
