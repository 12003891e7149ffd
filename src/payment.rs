use crate::account::{AccountNumber, AccountRecord, BankInfo};
use crate::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a transfer. Carried on the payment for downstream processing;
/// validation does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Instant,
    Regular,
    Urgent,
}

/// The declared identity of a payment's counterpart, as stated by the
/// caller. May or may not correspond to a real account record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PaymentParty {
    Own {
        number: AccountNumber,
    },
    Domestic {
        number: AccountNumber,
        full_name: String,
    },
    International {
        number: AccountNumber,
        full_name: String,
        address: String,
        bank: BankInfo,
    },
}

impl PaymentParty {
    pub fn number(&self) -> &AccountNumber {
        match self {
            PaymentParty::Own { number }
            | PaymentParty::Domestic { number, .. }
            | PaymentParty::International { number, .. } => number,
        }
    }

    /// True iff this declared party corresponds exactly to the stored
    /// record: same kind and every identity field equal. A kind mismatch is
    /// a plain non-match, indistinguishable to the caller from an account
    /// that does not exist.
    pub fn matches(&self, record: &AccountRecord) -> bool {
        match (self, record) {
            (PaymentParty::Own { number }, AccountRecord::Own { number: stored, .. }) => {
                number == stored
            }
            (
                PaymentParty::Domestic { number, full_name },
                AccountRecord::Domestic {
                    number: stored,
                    full_name: stored_name,
                    ..
                },
            ) => number == stored && full_name == stored_name,
            (
                PaymentParty::International {
                    number,
                    full_name,
                    address,
                    bank,
                },
                AccountRecord::International {
                    number: stored,
                    full_name: stored_name,
                    address: stored_address,
                    bank: stored_bank,
                    ..
                },
            ) => {
                number == stored
                    && full_name == stored_name
                    && address == stored_address
                    && bank == stored_bank
            }
            _ => false,
        }
    }
}

impl fmt::Display for PaymentParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentParty::Own { number } => write!(f, "account {number}"),
            PaymentParty::Domestic { number, full_name }
            | PaymentParty::International {
                number, full_name, ..
            } => write!(f, "account {number} ({full_name})"),
        }
    }
}

/// An immutable transfer order: who pays, who is declared to receive, how
/// much, and how urgently. The sender is identified by account number only.
///
/// Mandatory-field rules (full name for domestic receivers, note for
/// cross-bank orders, address and bank details for international ones) are
/// enforced by [`crate::builder`] before a `Payment` exists; the ledger
/// assumes a well-formed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub from: AccountNumber,
    pub to: PaymentParty,
    pub amount: Amount,
    pub mode: Mode,
    pub note: Option<String>,
}
