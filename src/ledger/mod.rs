//! The account ledger.
//!
//! The ledger is the sole mutator of account state. It enforces the balance
//! and PIN invariants and keeps an append-only, timestamped history of every
//! successful mutation. It knows nothing about authentication; gating access
//! is [`AuthSession`](crate::AuthSession)'s job.

use tracing::info;

use crate::Amount;
use crate::model::{Operation, Pin, TransactionRecord};

mod error;
pub use error::{ChangePinError, DepositError, LedgerError, WithdrawalError};

/// The single account's balance, PIN, and transaction history.
///
/// Invariants, held across every operation:
/// - balance >= 0
/// - the PIN is always exactly 4 ASCII digits
/// - history is append-only, in call order, and never empty
pub struct AccountLedger {
    balance: Amount,
    pin: Pin,
    history: Vec<TransactionRecord>,
}

/// Public API
impl AccountLedger {
    /// Open the account, seeding the history with a creation record.
    pub fn new(initial_balance: Amount, pin: Pin) -> Self {
        let mut ledger = Self {
            balance: initial_balance,
            pin,
            history: Vec::new(),
        };
        ledger.record(format!(
            "Account created with initial balance: ${initial_balance}"
        ));
        ledger
    }

    /// True iff `candidate` equals the stored PIN exactly. No side effect.
    pub fn validate_pin(&self, candidate: &str) -> bool {
        self.pin.matches(candidate)
    }

    /// Current balance. No side effect.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Read-only view of the history, oldest first.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Apply a single mutating operation on top of the current state.
    pub fn apply(&mut self, op: Operation) -> Result<(), LedgerError> {
        match &op {
            Operation::Withdraw(amount) => {
                let result = self.withdraw(*amount);
                Self::log_result("withdraw", Some(*amount), &result);
                result?;
            }
            Operation::Deposit(amount) => {
                let result = self.deposit(*amount);
                Self::log_result("deposit", Some(*amount), &result);
                result?;
            }
            Operation::ChangePin { current, new } => {
                let result = self.change_pin(current, new);
                Self::log_result("change_pin", None, &result);
                result?;
            }
        }
        Ok(())
    }

    /// Withdraw `amount`:
    /// - Ensure the amount is positive and covered by the balance
    /// - Decrement the balance and append one history record
    ///
    /// Failures append nothing, not even a failed-attempt record.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), WithdrawalError> {
        if amount <= Amount::ZERO {
            return Err(WithdrawalError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(WithdrawalError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.record(format!(
            "Withdrawal: -${amount}, New Balance: ${}",
            self.balance
        ));
        Ok(())
    }

    /// Deposit `amount`:
    /// - Ensure the amount is positive
    /// - Increment the balance and append one history record
    pub fn deposit(&mut self, amount: Amount) -> Result<(), DepositError> {
        if amount <= Amount::ZERO {
            return Err(DepositError::InvalidAmount(amount));
        }

        self.balance += amount;
        self.record(format!(
            "Deposit: +${amount}, New Balance: ${}",
            self.balance
        ));
        Ok(())
    }

    /// Change the PIN:
    /// - Re-validate the current PIN
    /// - Parse the new PIN (exactly 4 ASCII digits)
    /// - Replace it and append one history record
    pub fn change_pin(&mut self, current: &str, new: &str) -> Result<(), ChangePinError> {
        if !self.validate_pin(current) {
            return Err(ChangePinError::CurrentPinMismatch);
        }

        self.pin = new.parse()?;
        self.record("PIN changed successfully");
        Ok(())
    }
}

/// Private API
impl AccountLedger {
    /// Small helper to log `apply` results
    fn log_result<E: std::fmt::Display>(
        op: &str,
        amount: Option<Amount>,
        result: &Result<(), E>,
    ) {
        match (result, amount) {
            (Ok(()), Some(amt)) => {
                info!(amount = %amt, "{op} applied");
            }
            (Ok(()), None) => {
                info!("{op} applied");
            }
            (Err(e), Some(amt)) => {
                info!(amount = %amt, reason = %e, "{op} skipped");
            }
            (Err(e), None) => {
                info!(reason = %e, "{op} skipped");
            }
        }
    }

    fn record(&mut self, description: impl Into<String>) {
        self.history.push(TransactionRecord::now(description));
    }
}
