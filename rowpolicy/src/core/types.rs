//! Shared deterministic types for the row button policy.
//!
//! Labels are parsed leniently: anything outside the known set becomes an
//! `Unrecognized` value instead of an error, so callers passing a misspelled
//! label get a hidden button rather than a failure.

use serde::{Deserialize, Serialize};

/// Row action button being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonType {
    Edit,
    Delete,
    Update,
    Cancel,
    /// Any label outside the known buttons. Never shown.
    Unrecognized,
}

impl ButtonType {
    /// Known buttons in display order.
    pub const ALL: [ButtonType; 4] = [
        ButtonType::Edit,
        ButtonType::Delete,
        ButtonType::Update,
        ButtonType::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Edit => "edit",
            ButtonType::Delete => "delete",
            ButtonType::Update => "update",
            ButtonType::Cancel => "cancel",
            ButtonType::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(self) -> bool {
        self != ButtonType::Unrecognized
    }
}

impl From<&str> for ButtonType {
    fn from(label: &str) -> Self {
        match label {
            "edit" => ButtonType::Edit,
            "delete" => ButtonType::Delete,
            "update" => ButtonType::Update,
            "cancel" => ButtonType::Cancel,
            _ => ButtonType::Unrecognized,
        }
    }
}

impl From<String> for ButtonType {
    fn from(label: String) -> Self {
        ButtonType::from(label.as_str())
    }
}

impl From<ButtonType> for String {
    fn from(button: ButtonType) -> Self {
        button.as_str().to_string()
    }
}

impl std::fmt::Display for ButtonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle label of an editable table row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RowState {
    /// Row at rest; also the value used when no state is supplied.
    #[default]
    Default,
    Editing,
    Changed,
    Deleting,
    Updated,
    /// Legacy label treated like `Default` for visibility. No transition
    /// produces it.
    Canceling,
    /// Any label outside the known states.
    Unrecognized,
}

impl RowState {
    /// States a row can be in, legacy `canceling` included.
    pub const ALL: [RowState; 6] = [
        RowState::Default,
        RowState::Editing,
        RowState::Changed,
        RowState::Deleting,
        RowState::Updated,
        RowState::Canceling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RowState::Default => "default",
            RowState::Editing => "editing",
            RowState::Changed => "changed",
            RowState::Deleting => "deleting",
            RowState::Updated => "updated",
            RowState::Canceling => "canceling",
            RowState::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(self) -> bool {
        self != RowState::Unrecognized
    }

    /// Resolve an optional label; `None` means the caller supplied no state.
    pub fn from_label(label: Option<&str>) -> Self {
        label.map(RowState::from).unwrap_or_default()
    }
}

impl From<&str> for RowState {
    fn from(label: &str) -> Self {
        match label {
            "default" => RowState::Default,
            "editing" => RowState::Editing,
            "changed" => RowState::Changed,
            "deleting" => RowState::Deleting,
            "updated" => RowState::Updated,
            "canceling" => RowState::Canceling,
            _ => RowState::Unrecognized,
        }
    }
}

impl From<String> for RowState {
    fn from(label: String) -> Self {
        RowState::from(label.as_str())
    }
}

impl From<RowState> for String {
    fn from(state: RowState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for RowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both policy answers for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonRender {
    pub button: ButtonType,
    pub shown: bool,
    pub disabled: bool,
}
