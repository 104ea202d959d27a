//! Core domain types for the teller.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::Amount;

/// A 4-digit ASCII PIN. The format invariant is enforced at construction,
/// so a stored `Pin` is always exactly four digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin([u8; 4]);

/// Errors that can occur when parsing a PIN from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePinError {
    #[error("PIN must be exactly 4 digits, got {0} characters")]
    WrongLength(usize),
    #[error("PIN must contain only digits")]
    NonDigit,
}

impl Pin {
    /// Exact, byte-for-byte comparison against candidate text.
    /// No trimming or normalization; "12 34" never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.as_bytes() == self.0
    }
}

impl FromStr for Pin {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ParsePinError::WrongLength(s.chars().count()));
        }
        if !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(ParsePinError::NonDigit);
        }
        Ok(Pin([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

// Keep PIN digits out of debug logs.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// One immutable, timestamped entry in the account history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    timestamp: NaiveDateTime,
    description: String,
}

impl TransactionRecord {
    pub fn new(timestamp: NaiveDateTime, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            description: description.into(),
        }
    }

    /// A record stamped with the current local time.
    pub fn now(description: impl Into<String>) -> Self {
        Self::new(chrono::Local::now().naive_local(), description)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description
        )
    }
}

/// A mutating ledger operation, the possible inputs of
/// [`AccountLedger::apply`](crate::AccountLedger::apply).
#[derive(Debug, Clone)]
pub enum Operation {
    /// Debit funds from the balance.
    Withdraw(Amount),
    /// Credit funds to the balance.
    Deposit(Amount),
    /// Replace the PIN after re-validating the current one.
    ChangePin { current: String, new: String },
}
