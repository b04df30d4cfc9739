use std::ops::Range;

use crate::ast::*;
use crate::error::{FolioError, Result};
use crate::token::{Spanned, Token};

/// Recursive descent parser for the `.folio` language.
///
/// ```text
/// file     := 'folio' STRING '{' item* '}'
/// item     := property | 'kinetic' block | 'hover' block | project
/// project  := 'project' STRING '{' property* '}'
/// block    := '{' property* '}'
/// property := IDENT ':' value ','?
/// value    := STRING | INT | FLOAT | IDENT ( '(' number (',' number)* ')' )?
/// ```
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0 }
    }

    // ── Helpers ────────────────────────────────────────────────────────

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn peek_spanned(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<Range<usize>> {
        match self.peek_spanned() {
            Some(s) if &s.token == expected => {
                let span = s.span.clone();
                self.pos += 1;
                Ok(span)
            }
            Some(s) => Err(FolioError::unexpected_token(
                expected.describe(),
                s.token.describe(),
                s.span.clone(),
            )),
            None => Err(FolioError::unexpected_eof(expected.describe())),
        }
    }

    fn expect_string(&mut self) -> Result<(String, Range<usize>)> {
        match self.advance() {
            Some(Spanned {
                token: Token::String(s),
                span,
            }) => Ok((s.clone(), span.clone())),
            Some(other) => Err(FolioError::unexpected_token(
                "string",
                other.token.describe(),
                other.span.clone(),
            )),
            None => Err(FolioError::unexpected_eof("string")),
        }
    }

    fn expect_number(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Spanned {
                token: Token::Int(v),
                ..
            }) => Ok(*v as f64),
            Some(Spanned {
                token: Token::Float(v),
                ..
            }) => Ok(*v),
            Some(other) => Err(FolioError::unexpected_token(
                "number",
                other.token.describe(),
                other.span.clone(),
            )),
            None => Err(FolioError::unexpected_eof("number")),
        }
    }

    fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn last_span(&self) -> Range<usize> {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span.clone()
        } else {
            0..0
        }
    }

    // ── Top-level ──────────────────────────────────────────────────────

    /// Parse a complete `.folio` file.
    pub fn parse(&mut self) -> Result<FolioFile> {
        let file = self.parse_folio()?;
        if let Some(s) = self.peek_spanned() {
            return Err(FolioError::unexpected_token(
                "end of file",
                s.token.describe(),
                s.span.clone(),
            ));
        }
        Ok(file)
    }

    fn parse_folio(&mut self) -> Result<FolioFile> {
        self.expect(&Token::Folio)?;
        let (name, name_span) = self.expect_string()?;
        self.expect(&Token::LBrace)?;

        let mut file = FolioFile {
            name,
            name_span,
            properties: Vec::new(),
            kinetic: None,
            hover: None,
            projects: Vec::new(),
        };

        while !self.at(&Token::RBrace) {
            match self.peek_spanned() {
                None => return Err(FolioError::unexpected_eof("'}'")),
                Some(Spanned {
                    token: Token::Project,
                    ..
                }) => {
                    file.projects.push(self.parse_project()?);
                }
                Some(Spanned {
                    token: Token::Kinetic,
                    span,
                }) => {
                    let span = span.clone();
                    if file.kinetic.is_some() {
                        return Err(FolioError::at("duplicate 'kinetic' block", span));
                    }
                    self.advance();
                    file.kinetic = Some(self.parse_settings(span.start)?);
                }
                Some(Spanned {
                    token: Token::Hover,
                    span,
                }) => {
                    let span = span.clone();
                    if file.hover.is_some() {
                        return Err(FolioError::at("duplicate 'hover' block", span));
                    }
                    self.advance();
                    file.hover = Some(self.parse_settings(span.start)?);
                }
                Some(Spanned {
                    token: Token::Ident(_),
                    ..
                }) => {
                    file.properties.push(self.parse_property()?);
                }
                Some(s) => {
                    return Err(FolioError::unexpected_token(
                        "project, kinetic, hover, or property",
                        s.token.describe(),
                        s.span.clone(),
                    ));
                }
            }
        }

        self.expect(&Token::RBrace)?;
        Ok(file)
    }

    // ── Blocks ─────────────────────────────────────────────────────────

    fn parse_project(&mut self) -> Result<ProjectBlock> {
        let start = self.expect(&Token::Project)?.start;
        let (title, _) = self.expect_string()?;
        let properties = self.parse_property_block()?;
        Ok(ProjectBlock {
            title,
            properties,
            span: start..self.last_span().end,
        })
    }

    fn parse_settings(&mut self, start: usize) -> Result<SettingsBlock> {
        let properties = self.parse_property_block()?;
        Ok(SettingsBlock {
            properties,
            span: start..self.last_span().end,
        })
    }

    fn parse_property_block(&mut self) -> Result<Vec<Property>> {
        self.expect(&Token::LBrace)?;
        let mut properties = Vec::new();
        while !self.at(&Token::RBrace) {
            if self.peek().is_none() {
                return Err(FolioError::unexpected_eof("'}'"));
            }
            properties.push(self.parse_property()?);
        }
        self.expect(&Token::RBrace)?;
        Ok(properties)
    }

    // ── Properties ─────────────────────────────────────────────────────

    fn parse_property(&mut self) -> Result<Property> {
        let (name, start) = match self.advance() {
            Some(Spanned {
                token: Token::Ident(name),
                span,
            }) => (name.clone(), span.start),
            Some(other) => {
                return Err(FolioError::unexpected_token(
                    "property name",
                    other.token.describe(),
                    other.span.clone(),
                ))
            }
            None => return Err(FolioError::unexpected_eof("property name")),
        };
        self.expect(&Token::Colon)?;
        let value = self.parse_value()?;
        let span = start..self.last_span().end;

        // Optional separator, so `{ a: 1, b: 2 }` and `{ a: 1 b: 2 }` both parse.
        if self.at(&Token::Comma) {
            self.advance();
        }

        Ok(Property { name, value, span })
    }

    fn parse_value(&mut self) -> Result<Value> {
        let value = match self.advance() {
            Some(s) => match &s.token {
                Token::String(v) => Value::Str(v.clone()),
                Token::Int(v) => Value::Int(*v),
                Token::Float(v) => Value::Float(*v),
                Token::Ident(v) => Value::Ident(v.clone()),
                other => {
                    return Err(FolioError::unexpected_token(
                        "value",
                        other.describe(),
                        s.span.clone(),
                    ))
                }
            },
            None => return Err(FolioError::unexpected_eof("value")),
        };

        let Value::Ident(name) = value else {
            return Ok(value);
        };
        if !self.at(&Token::LParen) {
            return Ok(Value::Ident(name));
        }

        self.advance();
        let mut args = Vec::new();
        while !self.at(&Token::RParen) {
            if !args.is_empty() {
                self.expect(&Token::Comma)?;
            }
            args.push(self.expect_number()?);
        }
        self.expect(&Token::RParen)?;
        Ok(Value::Call { name, args })
    }
}
