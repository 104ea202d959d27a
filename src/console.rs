//! The text-menu front-end.
//!
//! A thin presentation layer: it renders prompts, parses typed input, and
//! forwards everything to [`AuthSession`] and [`AccountLedger`]. It holds no
//! business rules of its own. Input arrives as an async stream of lines so
//! the same loop runs against stdin or an in-memory script in tests; output
//! goes to any [`io::Write`] sink.

use std::io::{self, Write};

use tokio_stream::{Stream, StreamExt};

use crate::Amount;
use crate::ledger::AccountLedger;
use crate::model::Operation;
use crate::screen::{MenuAction, Screen, ScreenEvent, transition};
use crate::session::{AuthError, AuthSession};

pub struct Console<W> {
    ledger: AccountLedger,
    session: AuthSession,
    screen: Screen,
    /// Current PIN captured on the first step of a PIN change.
    pending_pin: Option<String>,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(ledger: AccountLedger, out: W) -> Self {
        Self {
            ledger,
            session: AuthSession::new(),
            screen: Screen::Auth,
            pending_pin: None,
            out,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }

    /// Drive the session with the given stream of input lines.
    ///
    /// Runs until the stream ends or a terminal screen is reached. Lockout
    /// ends the run; a fresh process gets a fresh session.
    pub async fn run(&mut self, mut lines: impl Stream<Item = String> + Unpin) -> io::Result<()> {
        writeln!(self.out, "Welcome to the ATM")?;
        self.prompt()?;

        while let Some(line) = lines.next().await {
            self.handle(&line)?;
            if self.screen.is_terminal() {
                break;
            }
            self.prompt()?;
        }

        writeln!(self.out, "Thank you for using the ATM. Goodbye!")?;
        self.out.flush()
    }

    /// Process one line of input for the current screen.
    pub fn handle(&mut self, line: &str) -> io::Result<()> {
        let event = match self.screen {
            Screen::Auth => self.handle_auth(line)?,
            Screen::Menu => self.handle_menu(line)?,
            Screen::Withdraw => self.handle_withdraw(line)?,
            Screen::Deposit => self.handle_deposit(line)?,
            Screen::ChangePinCurrent => {
                // PINs are taken verbatim, no trimming
                self.pending_pin = Some(line.to_string());
                Some(ScreenEvent::CurrentPinEntered)
            }
            Screen::ChangePinNew => self.handle_new_pin(line)?,
            Screen::Locked | Screen::Done => None,
        };

        if let Some(event) = event {
            self.screen = transition(self.screen, event);
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Auth => write!(self.out, "Enter your PIN: ")?,
            Screen::Menu => {
                writeln!(self.out)?;
                writeln!(self.out, "=== ATM Menu ===")?;
                writeln!(self.out, "1. Check Balance")?;
                writeln!(self.out, "2. Withdraw")?;
                writeln!(self.out, "3. Deposit")?;
                writeln!(self.out, "4. Change PIN")?;
                writeln!(self.out, "5. Transaction History")?;
                writeln!(self.out, "6. Exit")?;
                write!(self.out, "Choose an option (1-6): ")?;
            }
            Screen::Withdraw => write!(self.out, "Enter amount to withdraw: $")?,
            Screen::Deposit => write!(self.out, "Enter amount to deposit: $")?,
            Screen::ChangePinCurrent => write!(self.out, "Enter current PIN: ")?,
            Screen::ChangePinNew => write!(self.out, "Enter new 4-digit PIN: ")?,
            Screen::Locked | Screen::Done => {}
        }
        self.out.flush()
    }

    fn handle_auth(&mut self, line: &str) -> io::Result<Option<ScreenEvent>> {
        match self.session.submit_pin(&self.ledger, line) {
            Ok(()) => {
                writeln!(self.out, "Authentication successful!")?;
                Ok(Some(ScreenEvent::Authenticated))
            }
            Err(AuthError::InvalidPin { remaining: 0 }) | Err(AuthError::Locked) => {
                writeln!(self.out, "Too many incorrect attempts. Account locked.")?;
                Ok(Some(ScreenEvent::AuthFailed { locked: true }))
            }
            Err(AuthError::InvalidPin { remaining }) => {
                writeln!(self.out, "Invalid PIN. {remaining} attempts remaining.")?;
                Ok(Some(ScreenEvent::AuthFailed { locked: false }))
            }
            Err(AuthError::AlreadyAuthenticated) => Ok(Some(ScreenEvent::Authenticated)),
        }
    }

    fn handle_menu(&mut self, line: &str) -> io::Result<Option<ScreenEvent>> {
        let Ok(action) = line.trim().parse::<MenuAction>() else {
            writeln!(self.out, "Invalid option. Please try again.")?;
            return Ok(None);
        };

        match action {
            MenuAction::Balance => {
                writeln!(self.out, "Current Balance: ${}", self.ledger.balance())?;
            }
            MenuAction::History => {
                writeln!(self.out)?;
                writeln!(self.out, "=== Transaction History ===")?;
                for record in self.ledger.history() {
                    writeln!(self.out, "{record}")?;
                }
            }
            _ => {}
        }
        Ok(Some(ScreenEvent::Chose(action)))
    }

    fn handle_withdraw(&mut self, line: &str) -> io::Result<Option<ScreenEvent>> {
        match line.trim().parse::<Amount>() {
            Err(_) => {
                // Unparsable text never reaches the ledger
                writeln!(self.out, "Invalid input. Please enter a numeric value.")?;
            }
            Ok(amount) => match self.ledger.apply(Operation::Withdraw(amount)) {
                Ok(()) => {
                    writeln!(
                        self.out,
                        "Withdrawal successful. New Balance: ${}",
                        self.ledger.balance()
                    )?;
                }
                Err(_) => {
                    writeln!(self.out, "Insufficient funds or invalid amount.")?;
                }
            },
        }
        Ok(Some(ScreenEvent::AmountEntered))
    }

    fn handle_deposit(&mut self, line: &str) -> io::Result<Option<ScreenEvent>> {
        match line.trim().parse::<Amount>() {
            Err(_) => {
                writeln!(self.out, "Invalid input. Please enter a numeric value.")?;
            }
            Ok(amount) => match self.ledger.apply(Operation::Deposit(amount)) {
                Ok(()) => {
                    writeln!(
                        self.out,
                        "Deposit successful. New Balance: ${}",
                        self.ledger.balance()
                    )?;
                }
                Err(_) => {
                    writeln!(self.out, "Invalid amount.")?;
                }
            },
        }
        Ok(Some(ScreenEvent::AmountEntered))
    }

    fn handle_new_pin(&mut self, line: &str) -> io::Result<Option<ScreenEvent>> {
        let current = self.pending_pin.take().unwrap_or_default();
        match self.ledger.apply(Operation::ChangePin {
            current,
            new: line.to_string(),
        }) {
            Ok(()) => {
                writeln!(self.out, "PIN changed successfully.")?;
            }
            Err(_) => {
                writeln!(
                    self.out,
                    "Failed to change PIN. Check current PIN or ensure new PIN is 4 digits."
                )?;
            }
        }
        Ok(Some(ScreenEvent::NewPinEntered))
    }
}
