use firc_expr::{
    ActionsMap, Binding, CanonicalAttr, DEFAULT_ACTION, EventState, Expression, Normalizer,
    compile_bindings, parse, render_lines,
};

use crate::error::ActionError;
use crate::info::ActionInfo;

/// Modifier added to bindings whose action needs no rendered HTML.
pub const NOHTML: &str = "nohtml";

/// Action names with this prefix resolve to [`ActionHandler::JsPrefix`].
pub const JS_ACTION_PREFIX: &str = "action-";

/// The built-in `x-fir-*` actions.
///
/// Each handler supplies the action half of a binding; the attribute value
/// supplies the events, modifiers and (for refresh/append/prepend) template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionHandler {
    Refresh,
    Remove,
    RemoveParent,
    Append,
    Prepend,
    Reset,
    ToggleDisabled,
    ToggleClass,
    Dispatch,
    Runjs,
    Redirect,
    JsPrefix,
}

impl ActionHandler {
    pub const ALL: [ActionHandler; 12] = [
        Self::Refresh,
        Self::Remove,
        Self::RemoveParent,
        Self::Append,
        Self::Prepend,
        Self::Reset,
        Self::ToggleDisabled,
        Self::ToggleClass,
        Self::Dispatch,
        Self::Runjs,
        Self::Redirect,
        Self::JsPrefix,
    ];

    /// Registry key; matches the `<name>` of `x-fir-<name>`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Remove => "remove",
            Self::RemoveParent => "remove-parent",
            Self::Append => "append",
            Self::Prepend => "prepend",
            Self::Reset => "reset",
            Self::ToggleDisabled => "toggle-disabled",
            Self::ToggleClass => "toggleClass",
            Self::Dispatch => "dispatch",
            Self::Runjs => "runjs",
            Self::Redirect => "redirect",
            Self::JsPrefix => "js",
        }
    }

    /// Emission order among handlers on one element; lower goes first.
    pub fn precedence(self) -> i32 {
        match self {
            Self::Refresh => 20,
            Self::Remove => 30,
            Self::Runjs => 32,
            Self::ToggleClass | Self::Dispatch => 33,
            Self::ToggleDisabled => 34,
            Self::Reset => 35,
            Self::RemoveParent => 40,
            Self::Append => 50,
            Self::Prepend => 60,
            Self::Redirect => 90,
            Self::JsPrefix => 100,
        }
    }

    /// Handlers that never conflict with anything.
    pub fn coexists(self) -> bool {
        matches!(
            self,
            Self::Reset | Self::ToggleDisabled | Self::ToggleClass | Self::Runjs | Self::JsPrefix
        )
    }

    /// DOM operations this one cannot share an event with.
    pub fn exclusive_with(self) -> &'static [ActionHandler] {
        match self {
            Self::Refresh => &[Self::Remove, Self::RemoveParent],
            Self::Remove => &[Self::Refresh, Self::RemoveParent, Self::Append, Self::Prepend],
            Self::RemoveParent => &[Self::Refresh, Self::Remove, Self::Append, Self::Prepend],
            Self::Append => &[Self::Remove, Self::RemoveParent, Self::Prepend],
            Self::Prepend => &[Self::Remove, Self::RemoveParent, Self::Append],
            _ => &[],
        }
    }

    /// Translate one attribute to newline-joined canonical lines.
    pub fn translate(self, info: &ActionInfo, actions: &ActionsMap) -> Result<String, ActionError> {
        Ok(render_lines(&self.translate_attrs(info, actions)?))
    }

    pub fn translate_attrs(
        self,
        info: &ActionInfo,
        actions: &ActionsMap,
    ) -> Result<Vec<CanonicalAttr>, ActionError> {
        let params = info.non_empty_params();
        let expressions = parse(&info.value)?;
        if bindings(&expressions).any(|b| b.target.action.is_some()) {
            return Err(ActionError::ExplicitAction {
                attr: info.attr_name.clone(),
            });
        }

        let normalizer = match self {
            Self::Refresh => {
                self.arity(&params, 0, Some(0))?;
                Normalizer::default().with_action(DEFAULT_ACTION)
            }
            Self::Remove => {
                self.arity(&params, 0, Some(0))?;
                no_html("$fir.removeEl()")
            }
            Self::RemoveParent => {
                self.arity(&params, 0, Some(0))?;
                no_html("$fir.removeParentEl()")
            }
            Self::Append | Self::Prepend => {
                self.arity(&params, 0, Some(1))?;
                let template = params.first().map(|t| t.to_string());
                if template.is_none() && bindings(&expressions).any(|b| b.target.template.is_none()) {
                    return Err(self.arity_error(format!(
                        "requires a template name, as x-fir-{}:<template> or '->template'",
                        self.name()
                    )));
                }
                let action = if self == Self::Append {
                    "$fir.appendEl()"
                } else {
                    "$fir.prependEl()"
                };
                Normalizer::default()
                    .with_action(action)
                    .with_template(template)
            }
            Self::Reset => {
                self.arity(&params, 0, Some(0))?;
                no_html("$el.reset()")
            }
            Self::ToggleDisabled => {
                self.arity(&params, 0, Some(0))?;
                no_html("$fir.toggleDisabled()")
                    .with_implicit_states(&[EventState::Pending, EventState::Done])
            }
            Self::ToggleClass => {
                self.arity(&params, 1, None)?;
                let classes: Vec<String> = params.iter().map(|c| format!("'{c}'")).collect();
                no_html(format!("$fir.toggleClass({})", classes.join(",")))
            }
            Self::Dispatch => {
                self.arity(&params, 1, None)?;
                let calls: Vec<String> = params.iter().map(|e| format!("$dispatch('{e}')")).collect();
                no_html(calls.join("; "))
            }
            Self::Runjs => {
                self.arity(&params, 1, Some(1))?;
                no_html(lookup(actions, params[0])?)
            }
            Self::Redirect => {
                self.arity(&params, 0, Some(1))?;
                match params.first() {
                    Some(path) => no_html(format!("$fir.redirect('/{path}')")),
                    None => no_html("$fir.redirect('/')"),
                }
            }
            Self::JsPrefix => {
                let name = self.js_action_name(info, &params)?;
                let action = actions
                    .get(name)
                    .filter(|v| !v.trim().is_empty())
                    .cloned()
                    .unwrap_or_else(|| name.to_string());
                no_html(action)
            }
        };

        let attrs = compile_bindings(&expressions, &normalizer);
        tracing::debug!(
            attr = %info.attr_name,
            handler = self.name(),
            lines = attrs.len(),
            "translated action attribute"
        );
        Ok(attrs)
    }

    /// `x-fir-action-<name>` carries the name in the key, `x-fir-js:<name>`
    /// in its single parameter.
    fn js_action_name<'i>(self, info: &'i ActionInfo, params: &[&'i str]) -> Result<&'i str, ActionError> {
        match info.action_name.strip_prefix(JS_ACTION_PREFIX) {
            Some(name) if !name.is_empty() => {
                self.arity(params, 0, Some(0))?;
                Ok(name)
            }
            _ => {
                self.arity(params, 1, Some(1))?;
                Ok(params[0])
            }
        }
    }

    fn arity(self, params: &[&str], min: usize, max: Option<usize>) -> Result<(), ActionError> {
        let n = params.len();
        let reason = match max {
            Some(0) if n > 0 => format!("takes no parameters, got {n}"),
            Some(max) if min == max && n != max => {
                format!("takes exactly {max} parameter(s), got {n}")
            }
            Some(max) if n > max => format!("takes at most {max} parameter(s), got {n}"),
            _ if n < min => format!("requires at least {min} non-empty parameter(s), got {n}"),
            _ => return Ok(()),
        };
        Err(self.arity_error(reason))
    }

    fn arity_error(self, reason: String) -> ActionError {
        ActionError::ParamArity {
            action: self.name().to_string(),
            reason,
        }
    }
}

fn bindings(expressions: &[Expression]) -> impl Iterator<Item = &Binding> {
    expressions.iter().flat_map(|e| &e.bindings)
}

fn no_html<'a>(action: impl Into<String>) -> Normalizer<'a> {
    Normalizer::default()
        .with_action(action)
        .with_modifiers([NOHTML])
}

fn lookup(actions: &ActionsMap, name: &str) -> Result<String, ActionError> {
    match actions.get(name) {
        None => Err(ActionError::Lookup {
            name: name.to_string(),
            reason: "is not in the actions map",
        }),
        Some(value) if value.trim().is_empty() => Err(ActionError::Lookup {
            name: name.to_string(),
            reason: "has an empty value",
        }),
        Some(value) => Ok(value.clone()),
    }
}
