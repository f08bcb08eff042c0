use firc_expr::{
    ACTION_PREFIX, ActionsMap, BINDING_PREFIX, CanonicalAttr, compile_binding_key, compile_expression,
};

use crate::conflict::{CollectedAction, check_conflicts};
use crate::error::ActionError;
use crate::info::ActionInfo;
use crate::registry::Registry;

/// Key whose value is a full binding expression, targets included.
pub const RENDER_KEY: &str = "x-fir-render";

/// Alpine-style spelling of [`BINDING_PREFIX`].
pub const ALPINE_BINDING_PREFIX: &str = "x-on:fir:";

/// Compile one element's attributes to canonical `@fir:` attributes.
///
/// `x-fir-render` values and existing `@fir:` / `x-on:fir:` attributes come
/// first, in document order. Existing bindings are re-parsed and emitted in
/// canonical form, so a bad state or bracket in their key is an error. Action attributes follow, ordered by handler
/// precedence. Unknown `x-fir-<name>` actions are logged and skipped; any
/// other error, including a conflict between two actions, fails the whole
/// element before anything is emitted.
pub fn compile_element<I, K, V>(
    attrs: I,
    registry: &Registry,
    actions: &ActionsMap,
) -> Result<Vec<CanonicalAttr>, ActionError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = Vec::new();
    let mut collected = Vec::new();

    for (key, value) in attrs {
        let (key, value) = (key.as_ref(), value.as_ref());
        if key == RENDER_KEY {
            out.extend(compile_expression(value, actions)?);
        } else if let Some(rest) = key
            .strip_prefix(BINDING_PREFIX)
            .or_else(|| key.strip_prefix(ALPINE_BINDING_PREFIX))
        {
            out.push(compile_binding_key(rest, value)?);
        } else if key.starts_with(ACTION_PREFIX) {
            let info = ActionInfo::parse(key, value)?;
            match registry.resolve(&info.action_name) {
                Some(handler) => collected.push(CollectedAction::new(handler, info)?),
                None => tracing::warn!(attr = key, "no handler for action attribute, skipping"),
            }
        }
    }

    collected.sort_by_key(|c| c.handler().precedence());
    check_conflicts(&collected)?;

    for action in &collected {
        out.extend(action.handler().translate_attrs(action.info(), actions)?);
    }
    tracing::debug!(
        actions = collected.len(),
        lines = out.len(),
        "compiled element"
    );
    Ok(out)
}
