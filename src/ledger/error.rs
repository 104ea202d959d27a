//! Error types for ledger operations.
//!
//! Every failure is a normal outcome: the ledger never panics and a failed
//! operation leaves balance, PIN, and history untouched.

use thiserror::Error;

use crate::Amount;
use crate::model::ParsePinError;

/// Top-level error returned by [`AccountLedger::apply`](super::AccountLedger::apply).
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("withdrawal failed: {0}")]
    Withdrawal(#[from] WithdrawalError),

    #[error("deposit failed: {0}")]
    Deposit(#[from] DepositError),

    #[error("PIN change failed: {0}")]
    ChangePin(#[from] ChangePinError),
}

/// Error during withdrawal processing.
#[derive(Debug, Error)]
pub enum WithdrawalError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },
}

/// Error during deposit processing.
#[derive(Debug, Error)]
pub enum DepositError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),
}

/// Error during a PIN change.
#[derive(Debug, Error)]
pub enum ChangePinError {
    #[error("current PIN does not match")]
    CurrentPinMismatch,
    #[error("new PIN rejected: {0}")]
    InvalidNewPin(#[from] ParsePinError),
}
