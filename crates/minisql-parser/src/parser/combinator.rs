//! Parser-combinator primitives.
//!
//! A grammar function takes the [`Cursor`] and returns an [`Outcome`]:
//!
//! - `Ok(Match::One | Match::Many)`: matched, producing nodes,
//! - `Ok(Match::Empty)`: matched without producing anything (an absent
//!   optional),
//! - `Ok(Match::NoMatch)`: did not match,
//! - `Err(ParseError)`: a syntax error (recoverable by [`alternation`] and
//!   [`optional`]) or a lexical error (always fatal).
//!
//! The primitives know nothing about SQL. Each one takes grammar functions
//! and returns a new grammar function, so rules compose by nesting:
//!
//! ```rust
//! use minisql_parser::lexer::TokenKind;
//! use minisql_parser::parser::combinator::{
//!     optional, repetition, sequence, terminal, Cursor, Outcome,
//! };
//!
//! // '*' { ',' '*' }
//! fn stars(cursor: &mut Cursor<'_>) -> Outcome {
//!     sequence(&[
//!         &terminal(TokenKind::Star),
//!         &optional(&repetition(
//!             "'*'",
//!             &sequence(&[&terminal(TokenKind::Comma), &terminal(TokenKind::Star)]),
//!         )),
//!     ])(cursor)
//! }
//!
//! let mut cursor = Cursor::new("*, *, *").unwrap();
//! let nodes = stars(&mut cursor).unwrap().into_nodes();
//! assert_eq!(nodes.len(), 5);
//! assert!(cursor.is_at_end());
//! ```

use tracing::trace;

use crate::lexer::{Lexer, Token, TokenKind};
use crate::tree::{Node, RuleType};

use super::error::{ParseError, Result};

/// What a grammar function matched.
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// Matched, producing one node.
    One(Node),
    /// Matched, producing sibling nodes to attach in order.
    Many(Vec<Node>),
    /// Matched zero occurrences of an optional part.
    Empty,
    /// Did not match.
    NoMatch,
}

impl Match {
    /// Returns true unless this is `NoMatch`.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// The produced nodes, in order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Self::One(node) => vec![node],
            Self::Many(nodes) => nodes,
            Self::Empty | Self::NoMatch => Vec::new(),
        }
    }
}

/// Result of applying a grammar function.
pub type Outcome = Result<Match>;

/// A borrowed grammar function.
pub type Rule<'r> = &'r dyn Fn(&mut Cursor<'_>) -> Outcome;

/// Saved cursor state to rewind to.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    offset: usize,
    current: Token,
}

impl Checkpoint {
    /// Byte offset of the token that was current when the checkpoint was
    /// taken.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current.span.start
    }
}

/// Per-parse state: the lexer, the current lookahead token, and the syntax
/// error that got furthest into the input while backtracking.
///
/// A cursor lives for a single parse call.
#[derive(Debug)]
pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    furthest: Option<ParseError>,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned on the first token of `input`.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(input: &'src str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            furthest: None,
        })
    }

    /// The source being parsed.
    #[must_use]
    pub const fn input(&self) -> &'src str {
        self.lexer.input()
    }

    /// The current (not yet consumed) token.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Consumes the current token, scanning the next one, and returns the
    /// consumed token.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if the following token cannot be scanned.
    pub fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    /// Saves the current position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.lexer.offset(),
            current: self.current.clone(),
        }
    }

    /// Rewinds to a saved position.
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        self.lexer.seek(checkpoint.offset);
        self.current = checkpoint.current.clone();
    }

    /// A syntax error saying `what` was expected at the current token.
    #[must_use]
    pub fn expected(&self, what: &str) -> ParseError {
        ParseError::unexpected(what, &self.current)
    }

    /// Remembers a syntax error swallowed by backtracking if it got further
    /// than any previous one.
    pub fn record(&mut self, err: ParseError) {
        let further = self
            .furthest
            .as_ref()
            .is_none_or(|best| err.position() > best.position());
        if further {
            self.furthest = Some(err);
        }
    }

    /// The furthest swallowed syntax error, if any.
    #[must_use]
    pub const fn furthest(&self) -> Option<&ParseError> {
        self.furthest.as_ref()
    }

    /// Takes the furthest swallowed syntax error out of the cursor.
    pub fn take_furthest(&mut self) -> Option<ParseError> {
        self.furthest.take()
    }

    /// Rewinds after a failed branch, recording the error it failed with.
    fn backtrack(&mut self, checkpoint: &Checkpoint, err: Option<ParseError>) {
        if let Some(err) = err {
            trace!(
                rewind_to = checkpoint.position(),
                failed_at = err.position(),
                error = %err.message,
                "Backtracking over failed branch"
            );
            // Failing on its first token only says the branch did not apply.
            if err.position() > checkpoint.position() {
                self.record(err);
            }
        }
        self.restore(checkpoint);
    }
}

/// Matches one token of `kind`; a mismatch is `NoMatch`.
#[must_use]
pub fn terminal(kind: TokenKind) -> impl Fn(&mut Cursor<'_>) -> Outcome {
    move |cursor: &mut Cursor<'_>| match_terminal(cursor, kind, false)
}

/// Matches one token of `kind`; a mismatch is a syntax error.
#[must_use]
pub fn expect(kind: TokenKind) -> impl Fn(&mut Cursor<'_>) -> Outcome {
    move |cursor: &mut Cursor<'_>| match_terminal(cursor, kind, true)
}

fn match_terminal(cursor: &mut Cursor<'_>, kind: TokenKind, required: bool) -> Outcome {
    if cursor.peek().kind == kind {
        let token = cursor.advance()?;
        return Ok(Match::One(Node::leaf(RuleType::Terminal, token)));
    }
    if required {
        return Err(cursor.expected(kind.describe()));
    }
    Ok(Match::NoMatch)
}

/// Consumes the current token as a `rule` leaf if `accept` approves it.
///
/// # Errors
///
/// Returns a lexical error if the following token cannot be scanned.
pub fn leaf(cursor: &mut Cursor<'_>, rule: RuleType, accept: impl Fn(&Token) -> bool) -> Outcome {
    if !accept(cursor.peek()) {
        return Ok(Match::NoMatch);
    }
    let token = cursor.advance()?;
    Ok(Match::One(Node::leaf(rule, token)))
}

/// Applies every rule in order; matches only if all of them match.
///
/// The first `NoMatch` aborts the sequence and discards what was produced
/// so far. Tokens already consumed are not given back; enclosing
/// alternations and optionals rewind.
#[must_use]
pub fn sequence<'r>(rules: &'r [Rule<'r>]) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| {
        let mut nodes = Vec::new();
        for rule in rules {
            match rule(cursor)? {
                Match::NoMatch => return Ok(Match::NoMatch),
                Match::Empty => {}
                Match::One(node) => nodes.push(node),
                Match::Many(more) => nodes.extend(more),
            }
        }
        Ok(Match::Many(nodes))
    }
}

/// Tries each rule in order from the same position and returns the first
/// match.
///
/// A branch that does not match, or fails with a syntax error, is rewound
/// before the next branch is tried. Lexical errors propagate.
#[must_use]
pub fn alternation<'r>(rules: &'r [Rule<'r>]) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| {
        let start = cursor.checkpoint();
        for rule in rules {
            match rule(cursor) {
                Ok(Match::NoMatch) => cursor.backtrack(&start, None),
                Ok(found) => return Ok(found),
                Err(err) if err.is_syntax() => cursor.backtrack(&start, Some(err)),
                Err(err) => return Err(err),
            }
        }
        Ok(Match::NoMatch)
    }
}

/// Applies `rule` until it stops matching; at least one match is required.
///
/// Zero matches is a syntax error naming `what`. A `Match::Empty`, or an
/// iteration that consumed no input, ends the loop so a nested optional
/// cannot spin forever.
#[must_use]
pub fn repetition<'r>(
    what: &'static str,
    rule: Rule<'r>,
) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| {
        let mut nodes = Vec::new();
        let mut matched = false;
        loop {
            let before = cursor.peek().position();
            match rule(cursor)? {
                Match::NoMatch => break,
                Match::Empty => {
                    matched = true;
                    break;
                }
                Match::One(node) => nodes.push(node),
                Match::Many(more) => nodes.extend(more),
            }
            matched = true;
            if cursor.peek().position() == before {
                break;
            }
        }
        if !matched {
            return Err(cursor.expected(what));
        }
        Ok(Match::Many(nodes))
    }
}

/// Applies `rule` zero or one time.
///
/// A `NoMatch` or a syntax error rewinds and yields `Match::Empty`.
/// Lexical errors propagate.
#[must_use]
pub fn optional<'r>(rule: Rule<'r>) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| {
        let start = cursor.checkpoint();
        match rule(cursor) {
            Ok(Match::NoMatch) => cursor.backtrack(&start, None),
            Ok(found) => return Ok(found),
            Err(err) if err.is_syntax() => cursor.backtrack(&start, Some(err)),
            Err(err) => return Err(err),
        }
        Ok(Match::Empty)
    }
}

/// Turns a `NoMatch` of a mandatory sub-rule into a syntax error naming
/// `what`.
#[must_use]
pub fn required<'r>(
    what: &'static str,
    rule: Rule<'r>,
) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| match rule(cursor)? {
        Match::NoMatch => Err(cursor.expected(what)),
        found => Ok(found),
    }
}

/// Wraps whatever `rule` produced into a new `rule_type` node.
#[must_use]
pub fn rule<'r>(rule_type: RuleType, inner: Rule<'r>) -> impl Fn(&mut Cursor<'_>) -> Outcome + 'r {
    move |cursor: &mut Cursor<'_>| {
        Ok(match inner(cursor)? {
            Match::NoMatch => Match::NoMatch,
            found => Match::One(Node::branch(rule_type, found.into_nodes())),
        })
    }
}
