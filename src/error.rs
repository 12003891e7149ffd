use crate::account::AccountNumber;
use crate::amount::{Amount, Currency};
use crate::payment::PaymentParty;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal outcomes of a single transfer attempt.
///
/// The set is closed: `Ledger::transfer_order` produces nothing outside it,
/// and every variant leaves the ledger exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("insufficient money on the sender account")]
    InsufficientMoneyError,
    #[error("currency mismatch: requested {requested}, account holds {actual}")]
    CurrencyMismatchError {
        requested: Currency,
        actual: Currency,
    },
    /// Covers an unknown sender, an unknown receiver, and a receiver whose
    /// stored identity does not match the declared party. The three cases
    /// are deliberately indistinguishable to the caller.
    #[error("payment party not found: {party}")]
    PaymentPartyNotFound { party: PaymentParty },
    #[error("sender and receiver are the same account: {number}")]
    SameAccountError { number: AccountNumber },
    /// Reserved for a per-transaction ceiling. No validation path produces
    /// it yet.
    #[error("account limit exceeded: requested {requested}, available {available}")]
    AccountLimitError { requested: Amount, available: Amount },
}

/// Shape errors raised while building a payment or an account record from a
/// flat row, before the ledger ever sees it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("'{field}' field is mandatory for {kind}")]
    MissingField {
        field: &'static str,
        kind: &'static str,
    },
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("order error: {0}")]
    OrderError(#[from] OrderError),
    #[error("payment error: {0}")]
    PaymentError(#[from] PaymentError),
}
