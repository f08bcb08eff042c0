use pest::Parser;
use pest::error::InputLocation;

use crate::error::GrammarError;

#[derive(pest_derive::Parser)]
#[grammar = "action_key.pest"]
struct ActionKeyParser;

/// Prefix of every action attribute key.
pub const ACTION_PREFIX: &str = "x-fir-";

/// A parsed `x-fir-<name>[:params]` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionKey {
    pub name: String,
    /// Empty (never absent) when the key has no `:` part or an empty `[]`.
    pub params: Vec<String>,
}

pub fn parse_action_key(key: &str) -> Result<ActionKey, GrammarError> {
    if !key.starts_with(ACTION_PREFIX) {
        return Err(GrammarError::ActionKey {
            key: key.to_string(),
            reason: format!("missing '{ACTION_PREFIX}' prefix"),
        });
    }

    let mut pairs = ActionKeyParser::parse(Rule::action_key, key).map_err(|e| {
        let offset = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        GrammarError::ActionKey {
            key: key.to_string(),
            reason: format!("{} at offset {offset}", e.variant.message()),
        }
    })?;

    let root = pairs.next().ok_or_else(|| GrammarError::ActionKey {
        key: key.to_string(),
        reason: "empty key".to_string(),
    })?;
    debug_assert!(root.as_rule() == Rule::action_key);

    let mut parsed = ActionKey {
        name: String::new(),
        params: Vec::new(),
    };
    for node in root.into_inner() {
        match node.as_rule() {
            Rule::name => parsed.name = node.as_str().to_string(),
            Rule::param => parsed.params.push(node.as_str().to_string()),
            Rule::param_list => {
                for p in node.into_inner() {
                    if p.as_rule() == Rule::param {
                        parsed.params.push(p.as_str().to_string());
                    }
                }
            }
            _ => {}
        }
    }
    Ok(parsed)
}
