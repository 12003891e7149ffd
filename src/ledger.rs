use crate::account::{AccountNumber, AccountRecord};
use crate::amount::Amount;
use crate::error::PaymentError;
use crate::payment::{Payment, PaymentParty};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Outcome of an accepted transfer: the processed payment plus both
/// post-transfer balances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReceipt {
    pub payment: Payment,
    pub remaining_from: Amount,
    pub remaining_to: Amount,
}

/// The in-memory account book plus the transfer engine operating on it.
///
/// The ledger owns its account map exclusively. A transfer's lookups,
/// validation, and both balance writes happen under one write guard, so any
/// interleaving of concurrent `transfer_order` calls is equivalent to some
/// serial order, and no caller can observe a half-applied transfer. A single
/// ledger-wide lock also sidesteps lock ordering: one order touches two
/// arbitrary accounts.
pub struct Ledger {
    accounts: RwLock<HashMap<AccountNumber, AccountRecord>>,
}

impl Ledger {
    /// Creates a ledger holding the given records. Accounts exist for the
    /// lifetime of the ledger; none are opened or closed afterwards.
    pub fn new(seed: impl IntoIterator<Item = AccountRecord>) -> Self {
        let accounts = seed
            .into_iter()
            .map(|record| (record.number().clone(), record))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Validates and, on success, executes one transfer order.
    ///
    /// Checks run in a fixed order and the first failure wins: same-account,
    /// sender lookup, currency compatibility, sufficient funds, receiver
    /// lookup, receiver identity. An identity mismatch is reported as
    /// [`PaymentError::PaymentPartyNotFound`], the same as a missing
    /// account, so a failed caller learns nothing about which field was
    /// wrong. Every failure leaves the ledger untouched.
    pub async fn transfer_order(&self, payment: Payment) -> Result<TransferReceipt, PaymentError> {
        if payment.to.number() == &payment.from {
            return Err(PaymentError::SameAccountError {
                number: payment.from.clone(),
            });
        }

        let mut accounts = self.accounts.write().await;

        let sender = accounts
            .get(&payment.from)
            .ok_or_else(|| PaymentError::PaymentPartyNotFound {
                party: PaymentParty::Own {
                    number: payment.from.clone(),
                },
            })?;

        let debited = sender
            .balance()
            .checked_sub(payment.amount)
            .ok_or_else(|| PaymentError::CurrencyMismatchError {
                requested: payment.amount.currency,
                actual: sender.balance().currency,
            })?;
        if debited.is_negative() {
            return Err(PaymentError::InsufficientMoneyError);
        }

        let receiver = accounts.get(payment.to.number()).ok_or_else(|| {
            PaymentError::PaymentPartyNotFound {
                party: payment.to.clone(),
            }
        })?;
        if !payment.to.matches(receiver) {
            return Err(PaymentError::PaymentPartyNotFound {
                party: payment.to.clone(),
            });
        }

        // Validation passed; swap both records under the same guard.
        let delta = payment.amount.volume;
        let updated_sender = sender.apply_delta(-delta);
        let updated_receiver = receiver.apply_delta(delta);
        let remaining_from = updated_sender.balance();
        let remaining_to = updated_receiver.balance();
        accounts.insert(updated_sender.number().clone(), updated_sender);
        accounts.insert(updated_receiver.number().clone(), updated_receiver);

        debug!(
            from = %payment.from,
            to = %payment.to.number(),
            amount = %payment.amount,
            "transfer executed"
        );

        Ok(TransferReceipt {
            payment,
            remaining_from,
            remaining_to,
        })
    }

    /// Current balance of one account, if it exists.
    pub async fn balance(&self, number: &AccountNumber) -> Option<Amount> {
        let accounts = self.accounts.read().await;
        accounts.get(number).map(AccountRecord::balance)
    }

    /// Snapshot of every record, ordered by account number.
    pub async fn statement(&self) -> Vec<AccountRecord> {
        let accounts = self.accounts.read().await;
        let mut records: Vec<_> = accounts.values().cloned().collect();
        records.sort_by(|a, b| a.number().as_str().cmp(b.number().as_str()));
        records
    }
}
