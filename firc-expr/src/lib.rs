//! Compiler for `@fir:` binding expressions and `x-fir-*` action keys.
//!
//! Binding expressions (`create:ok.debounce->todo=>save`) are lexed, parsed,
//! normalized and rendered back as canonical attributes
//! (`@fir:create:ok::todo.debounce="..."`). Action keys
//! (`x-fir-append:todo`) have their own small grammar in [`action_key`].

pub mod action_key;
pub mod ast;
pub mod canonical;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod translate;

pub use action_key::{ACTION_PREFIX, ActionKey, parse_action_key};
pub use ast::{ActionRef, Binding, EventExpr, EventInfo, EventState, Expression, ParsedAttribute, Target};
pub use canonical::{BINDING_PREFIX, CanonicalAttr, canonical_key, render_lines};
pub use error::GrammarError;
pub use normalize::{ActionsMap, DEFAULT_ACTION, Normalizer};
pub use parser::{parse, parse_binding_key};
pub use translate::{
    compile_binding_key, compile_bindings, compile_expression, declared_events, translate_expression,
};
