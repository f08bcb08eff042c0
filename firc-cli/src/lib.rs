use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use firc_actions::{Registry, compile_element, translate_action};
use firc_expr::{ActionsMap, CanonicalAttr, render_lines, translate_expression};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `key="value"` attribute per line
    #[default]
    Lines,
    /// A JSON array of `{ "key", "value" }` objects
    Json,
}

#[derive(Serialize)]
struct JsonAttr<'a> {
    key: &'a str,
    value: &'a str,
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `verbose`.
pub fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("firc=debug,firc_expr=debug,firc_actions=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load a JSON object of `name -> action` strings; no path means an empty map.
pub fn load_actions(path: Option<&Path>) -> Result<ActionsMap> {
    let Some(path) = path else {
        return Ok(ActionsMap::new());
    };
    let src =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let actions: ActionsMap = serde_json::from_str(&src)
        .with_context(|| format!("{} must be a JSON object of strings", path.display()))?;
    tracing::debug!(path = %path.display(), entries = actions.len(), "loaded actions map");
    Ok(actions)
}

/// Translate a binding expression.
pub fn run_translate(expr: &str, actions: &ActionsMap) -> Result<String> {
    translate_expression(expr, actions).with_context(|| format!("invalid expression {expr:?}"))
}

/// Translate one `x-fir-*` attribute through the built-in registry.
pub fn run_action(key: &str, value: &str, actions: &ActionsMap) -> Result<String> {
    match translate_action(key, value, Registry::global(), actions)
        .with_context(|| format!("invalid action attribute {key}={value:?}"))?
    {
        Some(out) => Ok(out),
        None => bail!("no handler registered for {key}"),
    }
}

/// Compile a whole element given as `KEY=VALUE` attributes.
pub fn run_element(attrs: &[String], actions: &ActionsMap, format: OutputFormat) -> Result<String> {
    let attrs = attrs
        .iter()
        .map(|a| split_attr(a))
        .collect::<Result<Vec<_>>>()?;
    let out = compile_element(attrs, Registry::global(), actions).context("element rejected")?;
    render(&out, format)
}

/// `KEY=VALUE`, split at the first `=`. A bare `KEY` has an empty value.
pub fn split_attr(attr: &str) -> Result<(&str, &str)> {
    let (key, value) = attr.split_once('=').unwrap_or((attr, ""));
    if key.trim().is_empty() {
        bail!("attribute {attr:?} has no key");
    }
    Ok((key.trim(), value))
}

fn render(attrs: &[CanonicalAttr], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(render_lines(attrs)),
        OutputFormat::Json => {
            let json: Vec<_> = attrs
                .iter()
                .map(|a| JsonAttr {
                    key: &a.key,
                    value: &a.value,
                })
                .collect();
            serde_json::to_string_pretty(&json).context("failed to encode output")
        }
    }
}
