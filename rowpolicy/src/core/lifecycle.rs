//! Row lifecycle state machine.
//!
//! Button presses are gated by the visibility policy: a press is accepted only
//! when the button is shown and enabled for the current state.
//!
//! ```text
//! default --edit--> editing --modify--> changed --update--> updated --settle--> default
//! editing/changed --cancel--> default
//! default/editing/changed/updated --delete--> deleting --edit--> default
//! ```

use std::str::FromStr;

use crate::core::policy::{should_disable, should_show};
use crate::core::types::{ButtonType, RowState};

/// Something that happens to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// A row action button was clicked.
    Press(ButtonType),
    /// A cell of the row was edited.
    Modify,
    /// The store acknowledged an update.
    Settle,
}

impl RowEvent {
    pub fn label(self) -> &'static str {
        match self {
            RowEvent::Press(button) => button.as_str(),
            RowEvent::Modify => "modify",
            RowEvent::Settle => "settle",
        }
    }
}

impl FromStr for RowEvent {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "modify" => Ok(RowEvent::Modify),
            "settle" => Ok(RowEvent::Settle),
            _ => match ButtonType::from(label) {
                ButtonType::Unrecognized => Err(format!("unknown event '{}'", label)),
                button => Ok(RowEvent::Press(button)),
            },
        }
    }
}

impl std::fmt::Display for RowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Apply `event` to a row in `state`.
///
/// Returns the next state or a stable rejection message.
pub fn transition(state: RowState, event: RowEvent) -> Result<RowState, String> {
    match event {
        RowEvent::Press(button) => press(state, button),
        RowEvent::Modify => match state {
            RowState::Editing | RowState::Changed => Ok(RowState::Changed),
            _ => Err(format!("cannot modify row in state '{}'", state)),
        },
        RowEvent::Settle => match state {
            RowState::Updated => Ok(RowState::Default),
            _ => Err(format!("cannot settle row in state '{}'", state)),
        },
    }
}

fn press(state: RowState, button: ButtonType) -> Result<RowState, String> {
    if !should_show(button, state) {
        return Err(format!("button '{}' is hidden in state '{}'", button, state));
    }
    if should_disable(button, state) {
        return Err(format!("button '{}' is disabled in state '{}'", button, state));
    }

    match (state, button) {
        (RowState::Default | RowState::Canceling, ButtonType::Edit) => Ok(RowState::Editing),
        (_, ButtonType::Delete) => Ok(RowState::Deleting),
        (RowState::Editing | RowState::Changed, ButtonType::Cancel) => Ok(RowState::Default),
        (RowState::Changed, ButtonType::Update) => Ok(RowState::Updated),
        (RowState::Deleting, ButtonType::Edit) => Ok(RowState::Default),
        _ => Err(format!("no transition for button '{}' in state '{}'", button, state)),
    }
}
