//! Event walk for `rowpolicy walk`.
//!
//! Drives one row through a sequence of events and records the buttons
//! rendered after every accepted step.

use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::lifecycle::{RowEvent, transition};
use crate::core::types::RowState;
use crate::io::config::PolicyConfig;
use crate::render::{ButtonView, format_buttons, render_labels};

/// One accepted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkStep {
    pub event: String,
    pub from: RowState,
    pub to: RowState,
    /// Buttons rendered in the `to` state.
    pub buttons: Vec<ButtonView>,
}

/// The event that stopped the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based position of the event in the input.
    pub index: usize,
    pub event: String,
    pub state: RowState,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkOutcome {
    pub start: RowState,
    pub steps: Vec<WalkStep>,
    pub rejected: Option<Rejection>,
}

impl WalkOutcome {
    /// State after the last accepted event.
    pub fn final_state(&self) -> RowState {
        self.steps.last().map(|step| step.to).unwrap_or(self.start)
    }
}

/// Parse event labels, failing on the first unknown one.
pub fn parse_events(labels: &[String]) -> Result<Vec<RowEvent>> {
    labels
        .iter()
        .map(|label| label.parse::<RowEvent>().map_err(|err| anyhow!(err)))
        .collect()
}

/// Apply `events` to a row starting in `start`, stopping at the first rejection.
pub fn walk(start: RowState, events: &[RowEvent], cfg: &PolicyConfig) -> WalkOutcome {
    let mut outcome = WalkOutcome {
        start,
        steps: Vec::new(),
        rejected: None,
    };

    let mut state = start;
    for (index, event) in events.iter().enumerate() {
        match transition(state, *event) {
            Ok(next) => {
                debug!(%event, from = %state, to = %next, "transition");
                let buttons = render_labels(next, cfg);
                outcome.steps.push(WalkStep {
                    event: event.to_string(),
                    from: state,
                    to: next,
                    buttons,
                });
                state = next;
            }
            Err(reason) => {
                info!(index, %event, %state, %reason, "transition rejected");
                outcome.rejected = Some(Rejection {
                    index,
                    event: event.to_string(),
                    state,
                    reason,
                });
                break;
            }
        }
    }

    outcome
}

/// One line per step: `event  from -> to  buttons...`, then the rejection.
pub fn format_text(outcome: &WalkOutcome) -> String {
    let mut out = String::new();
    for step in &outcome.steps {
        out.push_str(&format!(
            "{}\t{} -> {}\t{}\n",
            step.event,
            step.from,
            step.to,
            format_buttons(&step.buttons)
        ));
    }
    if let Some(rejected) = &outcome.rejected {
        out.push_str(&format!(
            "rejected: event {} ({}): {}\n",
            rejected.index, rejected.event, rejected.reason
        ));
    }
    out
}
