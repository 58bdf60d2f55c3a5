//! Button visibility policy for a single table row.
//!
//! Both decisions are ordered rule lists where the first matching rule wins.
//! Inputs outside the known labels never fail; they fall through to `false`.

use crate::core::types::{ButtonRender, ButtonType, RowState};

/// Whether `button` is rendered for a row in `state`.
///
/// - `default`/`canceling`: `edit`, `delete`.
/// - `editing`/`changed`: `delete`, `update`, `cancel`.
/// - `deleting`: `edit`.
/// - `updated`: `delete`.
/// - anything else: nothing.
pub fn should_show(button: ButtonType, state: RowState) -> bool {
    match state {
        RowState::Default | RowState::Canceling => {
            matches!(button, ButtonType::Edit | ButtonType::Delete)
        }
        RowState::Editing | RowState::Changed => matches!(
            button,
            ButtonType::Delete | ButtonType::Update | ButtonType::Cancel
        ),
        RowState::Deleting => button == ButtonType::Edit,
        RowState::Updated => button == ButtonType::Delete,
        RowState::Unrecognized => false,
    }
}

/// Whether `button` is rendered but not interactable for a row in `state`.
///
/// Only `default` (legacy `canceling` excluded) disables buttons other than
/// `edit`/`delete`, which includes unrecognized buttons.
pub fn should_disable(button: ButtonType, state: RowState) -> bool {
    match state {
        RowState::Default => !matches!(button, ButtonType::Edit | ButtonType::Delete),
        RowState::Deleting => button != ButtonType::Edit,
        RowState::Editing => button == ButtonType::Update,
        _ => false,
    }
}

/// [`should_show`] over raw labels. `None` state means "not supplied".
pub fn should_show_label(button: &str, state: Option<&str>) -> bool {
    should_show(ButtonType::from(button), RowState::from_label(state))
}

/// [`should_disable`] over raw labels. `None` state means "not supplied".
pub fn should_disable_label(button: &str, state: Option<&str>) -> bool {
    should_disable(ButtonType::from(button), RowState::from_label(state))
}

pub fn render_button(button: ButtonType, state: RowState) -> ButtonRender {
    ButtonRender {
        button,
        shown: should_show(button, state),
        disabled: should_disable(button, state),
    }
}

/// Evaluate `buttons` in order for one row.
pub fn render_buttons(state: RowState, buttons: &[ButtonType]) -> Vec<ButtonRender> {
    buttons
        .iter()
        .map(|button| render_button(*button, state))
        .collect()
}
