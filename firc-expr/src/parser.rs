//! Recursive-descent parser for binding expressions:
//!
//! ```text
//! Expressions := Expression (';' Expression)* ';'?
//! Expression  := Binding (',' Binding)*
//! Binding     := EventGroup (',' EventGroup)* Target
//! EventGroup  := EventExpr | '[' EventExpr (',' EventExpr)* ']' Modifier*
//! EventExpr   := Ident State? Modifier*
//! Target      := ('->' Ident)? ('=>' (Ident | FirAction))?
//! ```
//!
//! Binding keys (the part of `@fir:create:ok::todo.debounce` after the
//! prefix) use the canonical shape instead:
//!
//! ```text
//! BindingKey  := EventGroup (',' EventGroup)* ('::' Ident Modifier*)?
//! ```
//!
//! A binding's event list is greedy: commas keep adding events until a target
//! closes the binding, so `a,b->t,c` is two bindings (`a,b->t` and `c`).

use crate::ast::{ActionRef, Binding, EventExpr, Expression, Target};
use crate::error::GrammarError;
use crate::lexer::{Token, TokenKind, normalize, tokenize};

/// Parse an attribute value into its `;`-separated expressions.
///
/// Either the whole input parses or an error is returned.
pub fn parse(input: &str) -> Result<Vec<Expression>, GrammarError> {
    let src = normalize(input);
    if src.is_empty() {
        return Err(GrammarError::Empty);
    }
    let tokens = tokenize(&src)?;
    Parser {
        tokens: &tokens,
        pos: 0,
        end: src.len(),
    }
    .expressions()
}

/// Parse the event half of an already-written binding attribute key, with
/// the `@fir:` (or `x-on:fir:`) prefix stripped.
///
/// The key carries no action; the returned binding's target holds only the
/// template. Modifiers written after the template are attached to the last
/// event.
pub fn parse_binding_key(key: &str) -> Result<Binding, GrammarError> {
    if key.is_empty() {
        return Err(GrammarError::Empty);
    }
    let tokens = tokenize(key)?;
    Parser {
        tokens: &tokens,
        pos: 0,
        end: key.len(),
    }
    .binding_key()
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    /// Offset reported for errors at end of input.
    end: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |t| t.offset)
    }

    fn found(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), TokenKind::describe)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expected(&self, expected: &'static str) -> GrammarError {
        GrammarError::Expected {
            expected,
            found: self.found(),
            offset: self.offset(),
        }
    }

    fn ident(&mut self, expected: &'static str) -> Result<String, GrammarError> {
        match self.peek() {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.expected(expected)),
        }
    }

    fn expressions(mut self) -> Result<Vec<Expression>, GrammarError> {
        let mut out = vec![self.expression()?];
        loop {
            match self.peek() {
                None => return Ok(out),
                Some(TokenKind::Semicolon) => {
                    self.pos += 1;
                    match self.peek() {
                        // a single trailing ';' is dropped
                        None => return Ok(out),
                        Some(TokenKind::Semicolon) => {
                            return Err(GrammarError::EmptyExpression {
                                offset: self.offset(),
                            });
                        }
                        Some(_) => out.push(self.expression()?),
                    }
                }
                Some(_) => return Err(self.expected("',' or ';'")),
            }
        }
    }

    fn binding_key(mut self) -> Result<Binding, GrammarError> {
        let mut events = self.event_group()?;
        while self.eat(&TokenKind::Comma) {
            events.extend(self.event_group()?);
        }
        let mut target = Target::default();
        if self.eat(&TokenKind::DoubleColon) {
            target.template = Some(self.ident("template name after '::'")?);
            let modifiers = self.modifiers();
            if let Some(last) = events.last_mut() {
                last.modifiers.extend(modifiers);
            }
        }
        if self.peek().is_some() {
            return Err(self.expected("end of binding key"));
        }
        Ok(Binding { events, target })
    }

    fn expression(&mut self) -> Result<Expression, GrammarError> {
        let mut bindings = vec![self.binding()?];
        while self.eat(&TokenKind::Comma) {
            bindings.push(self.binding()?);
        }
        Ok(Expression { bindings })
    }

    fn binding(&mut self) -> Result<Binding, GrammarError> {
        let mut events = self.event_group()?;
        while self.eat(&TokenKind::Comma) {
            events.extend(self.event_group()?);
        }
        let target = self.target()?;
        Ok(Binding { events, target })
    }

    fn event_group(&mut self) -> Result<Vec<EventExpr>, GrammarError> {
        if self.peek() != Some(&TokenKind::LBracket) {
            return Ok(vec![self.event_expr()?]);
        }
        let open = self.offset();
        self.pos += 1;
        let mut events = vec![self.event_expr()?];
        while self.eat(&TokenKind::Comma) {
            events.push(self.event_expr()?);
        }
        if !self.eat(&TokenKind::RBracket) {
            return Err(GrammarError::UnclosedBracket { offset: open });
        }
        let modifiers = self.modifiers();
        if let Some(last) = events.last_mut() {
            last.modifiers.extend(modifiers);
        }
        Ok(events)
    }

    fn event_expr(&mut self) -> Result<EventExpr, GrammarError> {
        let name = self.ident("event identifier")?;
        let state = match self.peek() {
            Some(TokenKind::State(state)) => {
                let state = *state;
                self.pos += 1;
                Some(state)
            }
            _ => None,
        };
        let modifiers = self.modifiers();
        Ok(EventExpr {
            name,
            state,
            modifiers,
        })
    }

    fn modifiers(&mut self) -> Vec<String> {
        let mut modifiers = Vec::new();
        while let Some(TokenKind::Modifier(name)) = self.peek() {
            modifiers.push(name.clone());
            self.pos += 1;
        }
        modifiers
    }

    fn target(&mut self) -> Result<Target, GrammarError> {
        let mut target = Target::default();
        if self.eat(&TokenKind::Arrow) {
            target.template = Some(self.ident("template name after '->'")?);
        }
        if self.eat(&TokenKind::DoubleArrow) {
            target.action = Some(match self.peek() {
                Some(TokenKind::Ident(name)) => ActionRef::Ident(name.clone()),
                Some(TokenKind::FirAction(lit)) => ActionRef::FirCall(lit.clone()),
                _ => return Err(self.expected("action after '=>'")),
            });
            self.pos += 1;
        }
        Ok(target)
    }
}
