use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_RULE, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// A category paired with a pattern anchored at the scan cursor.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: TokenKind,
    pattern: String,
    regex: Regex,
}

impl Rule {
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Rule, Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: err.to_string(),
                },
                Position::null(),
            )
        })?;

        Ok(Rule {
            kind,
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text this rule matches at the start of `remainder`. Empty matches
    /// count as no match so the cursor always moves.
    pub fn match_at<'s>(&self, remainder: &'s str) -> Option<&'s str> {
        self.regex
            .find(remainder)
            .map(|found| found.as_str())
            .filter(|found| !found.is_empty())
    }
}

lazy_static! {
    /// The Pluto lexicon, highest priority first.
    ///
    /// Order is semantics: a keyword must come before `Identifier` or it can
    /// never be reached, a two-character operator must come before the
    /// one-character operator that prefixes it, and `Mismatch` must be last.
    pub static ref PLUTO_RULES: Vec<Rule> = vec![
        MK_RULE!(TokenKind::Lang, r"Lang\."),
        MK_RULE!(TokenKind::Num, r"Num"),
        MK_RULE!(TokenKind::Deci, r"Deci"),
        MK_RULE!(TokenKind::Alpha, r"Alpha"),
        MK_RULE!(TokenKind::Flag, r"Flag"),
        MK_RULE!(TokenKind::Is, r"Is"),
        MK_RULE!(TokenKind::Es, r"Es"),
        MK_RULE!(TokenKind::Tab, r"Tab"),
        MK_RULE!(TokenKind::Jab, r"Jab"),
        MK_RULE!(TokenKind::GreaterEquals, r">="),
        MK_RULE!(TokenKind::LessEquals, r"<="),
        MK_RULE!(TokenKind::Equals, r"=="),
        MK_RULE!(TokenKind::NotEquals, r"!="),
        MK_RULE!(TokenKind::Greater, r">"),
        MK_RULE!(TokenKind::Less, r"<"),
        MK_RULE!(TokenKind::Plus, r"\+"),
        MK_RULE!(TokenKind::Minus, r"-"),
        MK_RULE!(TokenKind::Mult, r"\*"),
        MK_RULE!(TokenKind::Div, r"/"),
        MK_RULE!(TokenKind::OpenCurly, r"\{"),
        MK_RULE!(TokenKind::CloseCurly, r"\}"),
        MK_RULE!(TokenKind::Char, r"'[a-zA-Z0-9]'"),
        MK_RULE!(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*"),
        MK_RULE!(TokenKind::Number, r"\d+(\.\d+)?"),
        MK_RULE!(TokenKind::Assignment, r"="),
        MK_RULE!(TokenKind::End, r";"),
        MK_RULE!(TokenKind::Skip, r"[ \t]+"),
        MK_RULE!(TokenKind::Newline, r"\n"),
        MK_RULE!(TokenKind::Mismatch, r"."),
    ];
}

/// Position state for a single `tokenize` call.
struct Cursor<'s> {
    source: &'s str,
    pos: usize,
    line: usize,
}

impl<'s> Cursor<'s> {
    fn new(source: &'s str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.pos,
        }
    }

    fn unrecognised(&self, character: char) -> Error {
        debug!(?character, line = self.line, offset = self.pos, "unrecognised character");
        Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            self.position(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Cow<'static, [Rule]>,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl Lexer {
    /// A lexer over the built-in Pluto catalogue. The compiled rules are
    /// shared, not cloned.
    pub fn new() -> Lexer {
        Lexer {
            rules: Cow::Borrowed(PLUTO_RULES.as_slice()),
        }
    }

    /// A lexer over a caller-supplied catalogue, listed highest priority
    /// first. The catalogue must end with its only `Mismatch` rule.
    pub fn with_rules(rules: Vec<Rule>) -> Result<Lexer, Error> {
        let invalid = |reason: &str| {
            Error::new(
                ErrorImpl::InvalidCatalogue {
                    reason: reason.to_string(),
                },
                Position::null(),
            )
        };

        match rules.last() {
            None => return Err(invalid("is empty")),
            Some(rule) if rule.kind != TokenKind::Mismatch => {
                return Err(invalid("does not end with a catch-all rule"))
            }
            Some(_) => {}
        }

        if rules[..rules.len() - 1]
            .iter()
            .any(|rule| rule.kind == TokenKind::Mismatch)
        {
            return Err(invalid("lists a catch-all rule before its end"));
        }

        Ok(Lexer {
            rules: Cow::Owned(rules),
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule, in priority order, matching at the start of `remainder`.
    fn match_at<'s>(&self, remainder: &'s str) -> Option<(TokenKind, &'s str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_at(remainder).map(|found| (rule.kind, found)))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        let mut cursor = Cursor::new(source);
        let mut tokens = vec![];

        while let Some(current) = cursor.at() {
            let Some((kind, matched)) = self.match_at(cursor.remainder()) else {
                return Err(cursor.unrecognised(current));
            };

            match kind {
                TokenKind::Newline => cursor.line += 1,
                TokenKind::Skip => {}
                TokenKind::Mismatch => return Err(cursor.unrecognised(current)),
                _ => {
                    trace!(%kind, value = matched, line = cursor.line, "token");
                    tokens.push(MK_TOKEN!(kind, matched.to_string(), cursor.line));
                }
            }

            cursor.advance_n(matched.len());
        }

        debug_assert!(cursor.at_eof());
        debug!(count = tokens.len(), lines = cursor.line, "tokenized");
        Ok(tokens)
    }
}

/// Tokenizes `source` with the built-in Pluto catalogue.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new().tokenize(source)
}
