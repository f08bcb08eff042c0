use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which outcome of a server event triggers a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EventState {
    #[default]
    Ok,
    Error,
    Pending,
    Done,
}

impl EventState {
    pub const ALL: [EventState; 4] = [Self::Ok, Self::Error, Self::Pending, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl FromStr for EventState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "error" => Ok(Self::Error),
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `event[:state][.modifier]*` as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventExpr {
    pub name: String,
    pub state: Option<EventState>,
    pub modifiers: Vec<String>,
}

/// The `=>` half of a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRef {
    /// A name resolved through the caller's action map, or used verbatim.
    Ident(String),
    /// A `$fir.<name>()` literal, never looked up.
    FirCall(String),
}

/// `[-> template] [=> action]`; both halves optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub template: Option<String>,
    pub action: Option<ActionRef>,
}

/// One or more events bound to a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub events: Vec<EventExpr>,
    pub target: Target,
}

/// Comma-joined bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub bindings: Vec<Binding>,
}

/// A resolved `name:state` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventInfo {
    pub name: String,
    pub state: EventState,
}

impl EventInfo {
    pub fn new(name: impl Into<String>, state: EventState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

impl fmt::Display for EventInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.state)
    }
}

/// A binding after defaults are filled and the action is resolved.
///
/// `events` is never empty and keeps declaration order; `modifiers` is
/// deduplicated and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAttribute {
    pub events: Vec<EventInfo>,
    pub template: Option<String>,
    pub action: String,
    pub modifiers: BTreeSet<String>,
}
