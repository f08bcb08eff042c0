use std::collections::BTreeSet;

use crate::ast::{EventInfo, Expression};
use crate::canonical::{CanonicalAttr, render_lines};
use crate::error::GrammarError;
use crate::normalize::{ActionsMap, Normalizer};
use crate::normalize::DEFAULT_ACTION;
use crate::parser::{parse, parse_binding_key};

/// Parse and canonicalize a binding expression, one attribute per binding.
pub fn compile_expression(
    input: &str,
    actions: &ActionsMap,
) -> Result<Vec<CanonicalAttr>, GrammarError> {
    let expressions = parse(input)?;
    Ok(compile_bindings(&expressions, &Normalizer::new(actions)))
}

/// [`compile_expression`] rendered as newline-joined `key="value"` lines.
pub fn translate_expression(input: &str, actions: &ActionsMap) -> Result<String, GrammarError> {
    let attrs = compile_expression(input, actions)?;
    tracing::debug!(input, lines = attrs.len(), "translated binding expression");
    Ok(render_lines(&attrs))
}

/// Normalize every binding of already-parsed expressions, in source order.
pub fn compile_bindings(expressions: &[Expression], normalizer: &Normalizer<'_>) -> Vec<CanonicalAttr> {
    expressions
        .iter()
        .flat_map(|expr| &expr.bindings)
        .map(|binding| CanonicalAttr::from(&normalizer.normalize(binding)))
        .collect()
}

/// Re-canonicalize an attribute already written as a binding.
///
/// `key` is the part after the `@fir:` (or `x-on:fir:`) prefix and `value`
/// is used as the action verbatim; an empty value gets [`DEFAULT_ACTION`].
/// Unstated events become `ok` and modifiers are sorted.
pub fn compile_binding_key(key: &str, value: &str) -> Result<CanonicalAttr, GrammarError> {
    let binding = parse_binding_key(key)?;
    let action = match value.trim() {
        "" => DEFAULT_ACTION,
        action => action,
    };
    Ok(CanonicalAttr::from(
        &Normalizer::default().with_action(action).normalize(&binding),
    ))
}

/// Every `event:state` pair an expression listens to, unstated events as `ok`.
/// Modifiers and targets are ignored.
pub fn declared_events(input: &str) -> Result<BTreeSet<EventInfo>, GrammarError> {
    let expressions = parse(input)?;
    Ok(expressions
        .iter()
        .flat_map(|expr| &expr.bindings)
        .flat_map(|binding| &binding.events)
        .map(|event| EventInfo::new(&event.name, event.state.unwrap_or_default()))
        .collect())
}
