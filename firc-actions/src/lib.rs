//! `x-fir-*` action attributes: the handler registry, conflict detection
//! between actions on one element, and the per-element compile pipeline.

pub mod conflict;
pub mod element;
pub mod error;
pub mod handler;
pub mod info;
pub mod registry;

pub use conflict::{CollectedAction, check_conflicts, conflicts, shared_events};
pub use element::{ALPINE_BINDING_PREFIX, RENDER_KEY, compile_element};
pub use error::ActionError;
pub use handler::{ActionHandler, JS_ACTION_PREFIX, NOHTML};
pub use info::ActionInfo;
pub use registry::Registry;

use firc_expr::{ActionsMap, compile_expression, render_lines};

/// Translate a single action attribute through `registry`.
///
/// `x-fir-render` values are compiled as full binding expressions, the same
/// way [`compile_element`] treats them. Returns `Ok(None)` when no handler is
/// registered for the key's action name.
pub fn translate_action(
    key: &str,
    value: &str,
    registry: &Registry,
    actions: &ActionsMap,
) -> Result<Option<String>, ActionError> {
    if key == RENDER_KEY {
        return Ok(Some(render_lines(&compile_expression(value, actions)?)));
    }
    let info = ActionInfo::parse(key, value)?;
    match registry.resolve(&info.action_name) {
        Some(handler) => handler.translate(&info, actions).map(Some),
        None => Ok(None),
    }
}
