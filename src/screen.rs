//! The front-end screen machine.
//!
//! Screen switching is a plain finite-state machine: each screen is a state,
//! each user action a labeled event, and [`transition`] is a pure function.
//! Nothing here renders anything; the console (or any other front-end) owns
//! presentation and feeds events in.

use std::str::FromStr;

/// One of the six menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Balance,
    Withdraw,
    Deposit,
    ChangePin,
    History,
    Exit,
}

impl FromStr for MenuAction {
    type Err = ();

    /// Maps the menu digits "1".."6" to actions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuAction::Balance),
            "2" => Ok(MenuAction::Withdraw),
            "3" => Ok(MenuAction::Deposit),
            "4" => Ok(MenuAction::ChangePin),
            "5" => Ok(MenuAction::History),
            "6" => Ok(MenuAction::Exit),
            _ => Err(()),
        }
    }
}

/// The screens of the session, auth through exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// PIN prompt.
    #[default]
    Auth,
    /// The six-item action menu.
    Menu,
    /// Awaiting a withdrawal amount.
    Withdraw,
    /// Awaiting a deposit amount.
    Deposit,
    /// Awaiting the current PIN of a PIN change.
    ChangePinCurrent,
    /// Awaiting the new PIN of a PIN change.
    ChangePinNew,
    /// Lockout. Terminal.
    Locked,
    /// Session over. Terminal.
    Done,
}

impl Screen {
    /// Terminal screens end the session loop.
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::Locked | Screen::Done)
    }
}

/// A labeled user action or outcome that moves the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// PIN accepted.
    Authenticated,
    /// PIN rejected; `locked` when it was the last attempt.
    AuthFailed { locked: bool },
    /// A menu choice was made.
    Chose(MenuAction),
    /// A withdraw/deposit amount was handled (either way).
    AmountEntered,
    /// The current PIN of a PIN change was captured.
    CurrentPinEntered,
    /// The new PIN of a PIN change was handled (either way).
    NewPinEntered,
}

/// The pure transition function. Unexpected events leave the screen alone,
/// so a stray event can never corrupt the session flow.
pub fn transition(screen: Screen, event: ScreenEvent) -> Screen {
    use Screen::*;
    use ScreenEvent::*;

    match (screen, event) {
        (Auth, Authenticated) => Menu,
        (Auth, AuthFailed { locked: true }) => Locked,
        (Auth, AuthFailed { locked: false }) => Auth,

        // Balance and history render inline and stay on the menu
        (Menu, Chose(MenuAction::Balance)) => Menu,
        (Menu, Chose(MenuAction::History)) => Menu,
        (Menu, Chose(MenuAction::Withdraw)) => Withdraw,
        (Menu, Chose(MenuAction::Deposit)) => Deposit,
        (Menu, Chose(MenuAction::ChangePin)) => ChangePinCurrent,
        (Menu, Chose(MenuAction::Exit)) => Done,

        (Withdraw, AmountEntered) => Menu,
        (Deposit, AmountEntered) => Menu,
        (ChangePinCurrent, CurrentPinEntered) => ChangePinNew,
        (ChangePinNew, NewPinEntered) => Menu,

        (screen, _) => screen,
    }
}
