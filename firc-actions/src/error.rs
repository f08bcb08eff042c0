use firc_expr::{EventInfo, GrammarError};
use thiserror::Error;

/// Why an action attribute, or an element's set of them, could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// Wrong number of key parameters, or empty ones.
    #[error("x-fir-{action}: {reason}")]
    ParamArity { action: String, reason: String },

    /// A name missing from the actions map, or mapped to an empty value.
    #[error("action '{name}' {reason}")]
    Lookup { name: String, reason: &'static str },

    /// The value of an action attribute names its own action with `=>`.
    #[error("{attr}: the action comes from the attribute key, '=>' is not allowed in the value")]
    ExplicitAction { attr: String },

    /// Two attributes on one element would fight over the same node.
    #[error("'{first}' conflicts with '{second}' on {}", join_events(.events))]
    Conflict {
        first: String,
        second: String,
        events: Vec<EventInfo>,
    },
}

fn join_events(events: &[EventInfo]) -> String {
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
