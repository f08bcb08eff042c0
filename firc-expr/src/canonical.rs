use std::fmt;

use crate::ast::ParsedAttribute;

/// Key prefix of every emitted binding attribute.
pub const BINDING_PREFIX: &str = "@fir:";

/// One emitted `key="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAttr {
    pub key: String,
    pub value: String,
}

impl fmt::Display for CanonicalAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

impl From<&ParsedAttribute> for CanonicalAttr {
    fn from(attr: &ParsedAttribute) -> Self {
        Self {
            key: canonical_key(attr),
            value: attr.action.clone(),
        }
    }
}

/// `@fir:<events>[::<template>][.<modifiers>]`
///
/// A single event renders bare; two or more render as a bracket list in
/// declaration order.
pub fn canonical_key(attr: &ParsedAttribute) -> String {
    let mut key = String::from(BINDING_PREFIX);

    let events: Vec<String> = attr.events.iter().map(ToString::to_string).collect();
    if events.len() == 1 {
        key.push_str(&events[0]);
    } else {
        key.push('[');
        key.push_str(&events.join(","));
        key.push(']');
    }

    if let Some(template) = &attr.template {
        key.push_str("::");
        key.push_str(template);
    }
    for modifier in &attr.modifiers {
        key.push('.');
        key.push_str(modifier);
    }
    key
}

/// Render attributes one per line.
pub fn render_lines(attrs: &[CanonicalAttr]) -> String {
    attrs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
