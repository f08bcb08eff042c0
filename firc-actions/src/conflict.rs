use std::collections::BTreeSet;

use firc_expr::{EventInfo, declared_events};

use crate::error::ActionError;
use crate::handler::ActionHandler;
use crate::info::ActionInfo;

/// A handler resolved for one attribute of the element being compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedAction {
    handler: ActionHandler,
    info: ActionInfo,
    events: BTreeSet<EventInfo>,
}

impl CollectedAction {
    /// Parses the attribute value up front so its events are known before
    /// anything on the element is emitted.
    pub fn new(handler: ActionHandler, info: ActionInfo) -> Result<Self, ActionError> {
        let events = declared_events(&info.value)?;
        Ok(Self {
            handler,
            info,
            events,
        })
    }

    pub fn handler(&self) -> ActionHandler {
        self.handler
    }

    pub fn info(&self) -> &ActionInfo {
        &self.info
    }

    /// `event:state` pairs the value listens to.
    pub fn events(&self) -> &BTreeSet<EventInfo> {
        &self.events
    }
}

/// Events both actions listen to.
pub fn shared_events(a: &CollectedAction, b: &CollectedAction) -> Vec<EventInfo> {
    a.events.intersection(&b.events).cloned().collect()
}

/// Whether two actions would fight over the same DOM node. Symmetric.
pub fn conflicts(a: &CollectedAction, b: &CollectedAction) -> bool {
    if a.handler.coexists() || b.handler.coexists() {
        return false;
    }
    if a.events.is_disjoint(&b.events) {
        return false;
    }
    a.handler.exclusive_with().contains(&b.handler) || b.handler.exclusive_with().contains(&a.handler)
}

/// First conflicting pair, in slice order, as an error.
pub fn check_conflicts(actions: &[CollectedAction]) -> Result<(), ActionError> {
    for (i, a) in actions.iter().enumerate() {
        for b in &actions[i + 1..] {
            if conflicts(a, b) {
                return Err(ActionError::Conflict {
                    first: a.info.attr_name.clone(),
                    second: b.info.attr_name.clone(),
                    events: shared_events(a, b),
                });
            }
        }
    }
    Ok(())
}
