use firc_expr::{GrammarError, parse_action_key};

/// One `x-fir-*` attribute, its key split into name and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    /// The key exactly as written.
    pub attr_name: String,
    /// e.g. `append`, or `action-doSave`.
    pub action_name: String,
    pub params: Vec<String>,
    /// The raw attribute value: a binding expression without its action half.
    pub value: String,
}

impl ActionInfo {
    pub fn parse(key: &str, value: &str) -> Result<Self, GrammarError> {
        let parsed = parse_action_key(key)?;
        Ok(Self {
            attr_name: key.to_string(),
            action_name: parsed.name,
            params: parsed.params,
            value: value.to_string(),
        })
    }

    /// Parameters with blank entries dropped.
    pub fn non_empty_params(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect()
    }
}
