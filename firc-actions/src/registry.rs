use std::collections::HashMap;
use std::sync::LazyLock;

use crate::handler::{ActionHandler, JS_ACTION_PREFIX};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Name -> handler table. Immutable once built.
///
/// Production code reads [`Registry::global`]; tests that need a different
/// table build their own with [`Registry::from_handlers`].
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<&'static str, ActionHandler>,
}

impl Registry {
    /// Every built-in handler.
    pub fn builtin() -> Self {
        Self::from_handlers(ActionHandler::ALL)
    }

    pub fn from_handlers(handlers: impl IntoIterator<Item = ActionHandler>) -> Self {
        Self {
            handlers: handlers.into_iter().map(|h| (h.name(), h)).collect(),
        }
    }

    /// The process-wide built-in table, built on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Exact name lookup.
    pub fn get(&self, name: &str) -> Option<ActionHandler> {
        self.handlers.get(name).copied()
    }

    /// Lookup for a parsed action name: exact first, then `action-<name>`
    /// falls through to the `js` handler.
    pub fn resolve(&self, action_name: &str) -> Option<ActionHandler> {
        self.get(action_name).or_else(|| {
            action_name
                .strip_prefix(JS_ACTION_PREFIX)
                .filter(|rest| !rest.is_empty())
                .and_then(|_| self.get(ActionHandler::JsPrefix.name()))
        })
    }

    /// Registered handlers, lowest precedence number first.
    pub fn handlers(&self) -> Vec<ActionHandler> {
        let mut handlers: Vec<_> = self.handlers.values().copied().collect();
        handlers.sort_by_key(|h| (h.precedence(), h.name()));
        handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
