//! Tokenizer for binding expressions.
//!
//! Input is first passed through [`normalize`], which pads `->` and `=>` with
//! spaces and collapses whitespace runs. Identifiers may contain `-`, so
//! without the padding `todo->list` would lex as the identifier `todo-`.

use crate::ast::EventState;
use crate::error::GrammarError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    /// `:ok`, `:error`, `:pending`, `:done`
    State(EventState),
    /// `.name`
    Modifier(String),
    /// `->`
    Arrow,
    /// `=>`
    DoubleArrow,
    /// `::`, separates events from the template in binding keys
    DoubleColon,
    /// `$fir.<name>()`, kept verbatim
    FirAction(String),
    Comma,
    Semicolon,
    LBracket,
    RBracket,
}

impl TokenKind {
    /// Short human description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Ident(name) => format!("identifier '{name}'"),
            Self::State(state) => format!("state ':{state}'"),
            Self::Modifier(name) => format!("modifier '.{name}'"),
            Self::Arrow => "'->'".to_string(),
            Self::DoubleArrow => "'=>'".to_string(),
            Self::DoubleColon => "'::'".to_string(),
            Self::FirAction(lit) => format!("action '{lit}'"),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset into the normalized input.
    pub offset: usize,
}

/// Pad arrows with spaces and collapse whitespace runs to a single space.
pub fn normalize(input: &str) -> String {
    let spaced = input.replace("->", " -> ").replace("=>", " => ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize an already-normalized expression.
pub fn tokenize(src: &str) -> Result<Vec<Token>, GrammarError> {
    let bytes = src.as_bytes();
    let mut i = 0usize;
    let mut tokens = Vec::new();

    while i < bytes.len() {
        let start = i;
        let kind = match bytes[i] {
            b' ' => {
                i += 1;
                continue;
            }
            b',' => {
                i += 1;
                TokenKind::Comma
            }
            b';' => {
                i += 1;
                TokenKind::Semicolon
            }
            b'[' => {
                i += 1;
                TokenKind::LBracket
            }
            b']' => {
                i += 1;
                TokenKind::RBracket
            }
            b'-' if bytes.get(i + 1) == Some(&b'>') => {
                i += 2;
                TokenKind::Arrow
            }
            b'=' if bytes.get(i + 1) == Some(&b'>') => {
                i += 2;
                TokenKind::DoubleArrow
            }
            b':' if bytes.get(i + 1) == Some(&b':') => {
                i += 2;
                TokenKind::DoubleColon
            }
            b':' => {
                i += 1;
                let state = read_ident(src, &mut i);
                match state.parse::<EventState>() {
                    Ok(state) => TokenKind::State(state),
                    Err(()) => {
                        return Err(GrammarError::InvalidState {
                            state: state.to_string(),
                            offset: start,
                        });
                    }
                }
            }
            b'.' => {
                i += 1;
                let name = read_ident(src, &mut i);
                if name.is_empty() {
                    return Err(GrammarError::DanglingModifier { offset: start });
                }
                TokenKind::Modifier(name.to_string())
            }
            b'$' => TokenKind::FirAction(read_fir_action(src, &mut i)?),
            c if is_ident_start(c) => TokenKind::Ident(read_ident(src, &mut i).to_string()),
            _ => {
                let ch = src[i..].chars().next().unwrap_or_default();
                return Err(GrammarError::UnexpectedChar { ch, offset: i });
            }
        };
        tokens.push(Token { kind, offset: start });
    }

    tracing::trace!(tokens = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'-'
}

/// Reads `[a-zA-Z_][a-zA-Z0-9_-]*`; returns "" when no identifier starts at `i`.
fn read_ident<'a>(src: &'a str, i: &mut usize) -> &'a str {
    let bytes = src.as_bytes();
    let start = *i;
    if *i < bytes.len() && is_ident_start(bytes[*i]) {
        *i += 1;
        while *i < bytes.len() && is_ident_char(bytes[*i]) {
            *i += 1;
        }
    }
    &src[start..*i]
}

fn read_fir_action(src: &str, i: &mut usize) -> Result<String, GrammarError> {
    const PREFIX: &str = "$fir.";
    let start = *i;
    let malformed = |i: &mut usize| {
        let bytes = src.as_bytes();
        while *i < bytes.len() && !matches!(bytes[*i], b' ' | b',' | b';') {
            *i += 1;
        }
        GrammarError::MalformedAction {
            text: src[start..*i].to_string(),
            offset: start,
        }
    };

    if !src[*i..].starts_with(PREFIX) {
        return Err(malformed(i));
    }
    *i += PREFIX.len();
    if read_ident(src, i).is_empty() || !src[*i..].starts_with("()") {
        return Err(malformed(i));
    }
    *i += 2;
    Ok(src[start..*i].to_string())
}
