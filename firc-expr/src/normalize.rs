use std::collections::{BTreeSet, HashMap};

use crate::ast::{ActionRef, Binding, EventInfo, EventState, ParsedAttribute};

/// Caller-supplied `name -> action` table used to resolve `=>name`.
pub type ActionsMap = HashMap<String, String>;

/// Action used when a binding names none.
pub const DEFAULT_ACTION: &str = "$fir.replace()";

/// Fills defaults and resolves actions on parsed bindings.
///
/// The plain form (`Normalizer::new(&actions)`) implements the binding
/// expression rules. Action handlers use the `with_*` setters to supply the
/// action half themselves.
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    actions: Option<&'a ActionsMap>,
    modifiers: Vec<String>,
    action: Option<String>,
    template: Option<String>,
    implicit_states: &'a [EventState],
}

impl Default for Normalizer<'_> {
    fn default() -> Self {
        Self {
            actions: None,
            modifiers: Vec::new(),
            action: None,
            template: None,
            implicit_states: &[EventState::Ok],
        }
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(actions: &'a ActionsMap) -> Self {
        Self {
            actions: Some(actions),
            ..Self::default()
        }
    }

    /// Modifiers unioned into every binding's own.
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers.extend(modifiers.into_iter().map(Into::into));
        self
    }

    /// Replaces whatever action the binding resolves to.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Replaces the binding's template, if `Some`.
    pub fn with_template(mut self, template: Option<String>) -> Self {
        if template.is_some() {
            self.template = template;
        }
        self
    }

    /// States given to events written without one. Defaults to `[ok]`.
    pub fn with_implicit_states(mut self, states: &'a [EventState]) -> Self {
        self.implicit_states = states;
        self
    }

    pub fn normalize(&self, binding: &Binding) -> ParsedAttribute {
        let mut events = Vec::with_capacity(binding.events.len());
        let mut modifiers: BTreeSet<String> = self.modifiers.iter().cloned().collect();

        for event in &binding.events {
            match event.state {
                Some(state) => events.push(EventInfo::new(&event.name, state)),
                None => events.extend(
                    self.implicit_states
                        .iter()
                        .map(|&state| EventInfo::new(&event.name, state)),
                ),
            }
            modifiers.extend(event.modifiers.iter().cloned());
        }

        let action = match &self.action {
            Some(action) => action.clone(),
            None => self.resolve(binding.target.action.as_ref()),
        };

        ParsedAttribute {
            events,
            template: self
                .template
                .clone()
                .or_else(|| binding.target.template.clone()),
            action,
            modifiers,
        }
    }

    fn resolve(&self, action: Option<&ActionRef>) -> String {
        match action {
            None => DEFAULT_ACTION.to_string(),
            Some(ActionRef::FirCall(lit)) => lit.clone(),
            Some(ActionRef::Ident(name)) => self
                .actions
                .and_then(|map| map.get(name))
                .cloned()
                .unwrap_or_else(|| name.clone()),
        }
    }
}
