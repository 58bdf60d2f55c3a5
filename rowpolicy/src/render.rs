//! Render helpers for `rowpolicy render` and `rowpolicy matrix`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::policy::render_button;
use crate::core::types::{ButtonType, RowState};
use crate::io::config::PolicyConfig;
use crate::io::rows::{RowSnapshot, load_rows};

/// Policy answers for one configured button label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    /// Label as configured, unknown labels included.
    pub button: String,
    pub shown: bool,
    pub disabled: bool,
}

/// Rendered buttons for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    pub id: String,
    /// Label as supplied, or `default` when the row carried none.
    pub state: String,
    /// False when the label matched no known state.
    pub recognized: bool,
    pub buttons: Vec<ButtonView>,
}

/// Rendered buttons for a set of rows, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub rows: Vec<RowReport>,
}

/// Evaluate the configured buttons for one row.
pub fn render_row(id: &str, label: Option<&str>, cfg: &PolicyConfig) -> RowReport {
    let state = RowState::from_label(label);
    let buttons = render_labels(state, cfg);
    RowReport {
        id: id.to_string(),
        state: label.unwrap_or(RowState::Default.as_str()).to_string(),
        recognized: state.is_recognized(),
        buttons,
    }
}

/// Evaluate the configured button labels for a row in `state`.
///
/// Hidden buttons are dropped unless `include_hidden` is set.
pub fn render_labels(state: RowState, cfg: &PolicyConfig) -> Vec<ButtonView> {
    cfg.buttons
        .iter()
        .filter_map(|label| {
            let render = render_button(ButtonType::from(label.as_str()), state);
            (cfg.include_hidden || render.shown).then(|| ButtonView {
                button: label.clone(),
                shown: render.shown,
                disabled: render.disabled,
            })
        })
        .collect()
}

/// Evaluate the configured buttons for every row of a snapshot.
pub fn render_rows(rows: &[RowSnapshot], cfg: &PolicyConfig) -> RenderReport {
    let rows = rows
        .iter()
        .map(|row| {
            let report = render_row(&row.id, row.state.as_deref(), cfg);
            if !report.recognized {
                warn!(id = %report.id, state = %report.state, "unrecognized row state");
            }
            report
        })
        .collect();
    RenderReport { rows }
}

/// Load a snapshot file and render it.
pub fn render_file(path: &Path, cfg: &PolicyConfig) -> Result<RenderReport> {
    let rows = load_rows(path).with_context(|| "load rows for render")?;
    let report = render_rows(&rows, cfg);
    debug!(rows = report.rows.len(), "rows rendered");
    Ok(report)
}

/// Decision matrix: one row per known state, every configured button kept.
pub fn policy_matrix(cfg: &PolicyConfig) -> RenderReport {
    let cfg = PolicyConfig {
        include_hidden: true,
        ..cfg.clone()
    };
    let rows = RowState::ALL
        .into_iter()
        .map(|state| render_row(state.as_str(), Some(state.as_str()), &cfg))
        .collect();
    RenderReport { rows }
}

/// Tab-separated text: `id  state  buttons...`.
///
/// Disabled buttons carry a `[disabled]` suffix, hidden ones (only present
/// with `include_hidden`) a `[hidden]` suffix.
pub fn format_text(report: &RenderReport) -> String {
    let mut out = String::new();
    for row in &report.rows {
        out.push_str(&row.id);
        out.push('\t');
        out.push_str(&row.state);
        out.push('\t');
        out.push_str(&format_buttons(&row.buttons));
        out.push('\n');
    }
    out
}

pub(crate) fn format_buttons(buttons: &[ButtonView]) -> String {
    if buttons.is_empty() {
        return "(none)".to_string();
    }
    buttons
        .iter()
        .map(|render| {
            let mut label = render.button.clone();
            if !render.shown {
                label.push_str("[hidden]");
            } else if render.disabled {
                label.push_str("[disabled]");
            }
            label
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{row, sample_rows, write_rows_file};

    #[test]
    fn hidden_buttons_are_dropped_by_default() {
        let report = render_row("a", Some("deleting"), &PolicyConfig::default());
        assert_eq!(
            report,
            RowReport {
                id: "a".to_string(),
                state: "deleting".to_string(),
                recognized: true,
                buttons: vec![ButtonView {
                    button: "edit".to_string(),
                    shown: true,
                    disabled: false,
                }],
            }
        );
    }

    #[test]
    fn include_hidden_keeps_every_configured_button() {
        let cfg = PolicyConfig {
            include_hidden: true,
            ..PolicyConfig::default()
        };
        let report = render_row("a", None, &cfg);
        assert_eq!(report.state, "default");
        assert_eq!(report.buttons.len(), 4);
        assert_eq!(format_buttons(&report.buttons), "edit delete update[hidden] cancel[hidden]");
    }

    #[test]
    fn unrecognized_state_renders_no_buttons() {
        let report = render_rows(&[row("x", Some("archived"))], &PolicyConfig::default());
        assert!(!report.rows[0].recognized);
        assert_eq!(report.rows[0].state, "archived");
        assert!(report.rows[0].buttons.is_empty());
    }

    #[test]
    fn unknown_button_labels_render_as_written() {
        let cfg = PolicyConfig {
            buttons: vec!["edit".to_string(), "archive".to_string(), "save".to_string()],
            include_hidden: true,
            ..PolicyConfig::default()
        };
        let report = render_row("a", Some("default"), &cfg);
        let labels: Vec<&str> = report.buttons.iter().map(|view| view.button.as_str()).collect();
        assert_eq!(labels, vec!["edit", "archive", "save"]);
        assert!(!report.buttons[1].shown);
        assert!(!report.buttons[2].shown);
        assert_eq!(format_buttons(&report.buttons), "edit archive[hidden] save[hidden]");
    }

    #[test]
    fn text_output_marks_disabled_buttons() {
        let report = render_rows(&sample_rows(), &PolicyConfig::default());
        assert_eq!(
            format_text(&report),
            "r1\tdefault\tedit delete\n\
             r2\tediting\tdelete update[disabled] cancel\n\
             r3\tchanged\tdelete update cancel\n\
             r4\tdeleting\tedit\n\
             r5\tupdated\tdelete\n\
             r6\tarchived\t(none)\n"
        );
    }

    #[test]
    fn matrix_covers_every_known_state() {
        let cfg = PolicyConfig {
            buttons: vec!["update".to_string()],
            ..PolicyConfig::default()
        };
        let report = policy_matrix(&cfg);
        let states: Vec<&str> = report.rows.iter().map(|row| row.state.as_str()).collect();
        assert_eq!(states, vec!["default", "editing", "changed", "deleting", "updated", "canceling"]);
        assert!(report.rows.iter().all(|row| row.buttons.len() == 1));
    }

    #[test]
    fn render_file_reads_snapshot() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_rows_file(temp.path(), &sample_rows()).expect("write rows");
        let report = render_file(&path, &PolicyConfig::default()).expect("render");
        assert_eq!(report.rows.len(), 6);
    }
}
