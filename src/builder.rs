//! Turns flat, caller-supplied rows into typed domain values.
//!
//! Mandatory-field enforcement happens here, at construction time, so the
//! ledger only ever receives well-formed payments and records.

use crate::account::{AccountNumber, AccountRecord, BankInfo, CountryCode};
use crate::amount::{Amount, Currency};
use crate::error::OrderError;
use crate::payment::{Mode, Payment, PaymentParty};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Which construction path an order takes.
///
/// `local` and `sepa` both address a domestic receiver; they differ in note
/// requirement and default urgency (same-bank transfers settle instantly and
/// need no note, cross-bank SEPA orders need one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    Own,
    Local,
    Sepa,
    International,
}

/// One transfer order as submitted by the caller, before shape validation.
/// Optional columns may be empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    pub kind: OrderKind,
    pub from: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: Option<Currency>,
    pub mode: Option<Mode>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub bank_name: Option<String>,
    pub bank_address: Option<String>,
    pub bank_country: Option<CountryCode>,
    pub swift_code: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Own,
    Domestic,
    International,
}

/// One seeded ledger entry as listed in the accounts file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRow {
    pub kind: AccountKind,
    pub number: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    pub currency: Currency,
    pub name: Option<String>,
    pub address: Option<String>,
    pub bank_name: Option<String>,
    pub bank_address: Option<String>,
    pub bank_country: Option<CountryCode>,
    pub swift_code: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str, kind: &'static str) -> Result<T, OrderError> {
    value.ok_or(OrderError::MissingField { field, kind })
}

fn bank_info(
    name: Option<String>,
    address: Option<String>,
    country: Option<CountryCode>,
    swift: Option<String>,
    kind: &'static str,
) -> Result<BankInfo, OrderError> {
    Ok(BankInfo {
        name: required(name, "bank name", kind)?,
        address: required(address, "bank address", kind)?,
        country_code: required(country, "bank country", kind)?,
        swift_code: required(swift, "swift code", kind)?,
    })
}

/// Builds a typed payment from a draft, or reports the first missing
/// mandatory field. The currency defaults to EUR, the mode to the kind's
/// usual urgency.
pub fn build_payment(draft: OrderDraft) -> Result<Payment, OrderError> {
    if draft.amount <= Decimal::ZERO {
        return Err(OrderError::NonPositiveAmount(draft.amount));
    }
    let amount = Amount::new(draft.amount, draft.currency.unwrap_or(Currency::Eur));
    let from = AccountNumber::new(draft.from);
    let number = AccountNumber::new(draft.to);

    let (to, mode, note) = match draft.kind {
        OrderKind::Own => (
            PaymentParty::Own { number },
            draft.mode.unwrap_or(Mode::Instant),
            draft.note,
        ),
        OrderKind::Local => (
            PaymentParty::Domestic {
                number,
                full_name: required(draft.name, "full name", "local payments")?,
            },
            draft.mode.unwrap_or(Mode::Instant),
            draft.note,
        ),
        OrderKind::Sepa => (
            PaymentParty::Domestic {
                number,
                full_name: required(draft.name, "full name", "SEPA payments")?,
            },
            draft.mode.unwrap_or(Mode::Regular),
            Some(required(draft.note, "note", "SEPA payments")?),
        ),
        OrderKind::International => (
            PaymentParty::International {
                number,
                full_name: required(draft.name, "full name", "international payments")?,
                address: required(draft.address, "address", "international payments")?,
                bank: bank_info(
                    draft.bank_name,
                    draft.bank_address,
                    draft.bank_country,
                    draft.swift_code,
                    "international payments",
                )?,
            },
            draft.mode.unwrap_or(Mode::Regular),
            Some(required(draft.note, "note", "international payments")?),
        ),
    };

    Ok(Payment {
        from,
        to,
        amount,
        mode,
        note,
    })
}

/// Builds a stored account record from a seed row.
pub fn build_record(row: AccountRow) -> Result<AccountRecord, OrderError> {
    let number = AccountNumber::new(row.number);
    let balance = Amount::new(row.balance, row.currency);

    match row.kind {
        AccountKind::Own => Ok(AccountRecord::Own { number, balance }),
        AccountKind::Domestic => Ok(AccountRecord::Domestic {
            number,
            balance,
            full_name: required(row.name, "full name", "domestic accounts")?,
        }),
        AccountKind::International => Ok(AccountRecord::International {
            number,
            balance,
            full_name: required(row.name, "full name", "international accounts")?,
            address: required(row.address, "address", "international accounts")?,
            bank: bank_info(
                row.bank_name,
                row.bank_address,
                row.bank_country,
                row.swift_code,
                "international accounts",
            )?,
        }),
    }
}
