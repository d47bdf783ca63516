//! Lexer for flow/graph diagram lines using logos
//!
//! Each line of a flow block is tokenized independently. The token set is
//! the pattern-priority table of the mini-language: shape tokens capture
//! their bracket text, and anything that matches no pattern is dropped so
//! a malformed line degrades to fewer tokens instead of an error.

use logos::Logos;

/// Strip an n-character wrapper from both ends of a bracketed slice and
/// clean up the label inside it.
fn bracket_text(slice: &str, wrapper: usize) -> String {
    slice[wrapper..slice.len() - wrapper]
        .trim()
        .trim_matches('"')
        .to_string()
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum FlowToken {
    // Edge tokens. The dotted arrow must lex as one unit; the solid arrow
    // and the open link are both rendered as solid connections.
    #[token("-.->")]
    DottedArrow,
    #[token("-->")]
    SolidArrow,
    #[token("---")]
    OpenLink,

    // Shape tokens, most specific wrapper first: `((..))` before `(..)`.
    #[regex(r"\(\([^()]*\)\)", |lex| bracket_text(lex.slice(), 2))]
    Pill(String),
    #[regex(r"\{[^{}]*\}", |lex| bracket_text(lex.slice(), 1))]
    Diamond(String),
    #[regex(r"\[[^\[\]]*\]", |lex| bracket_text(lex.slice(), 1))]
    Box(String),
    #[regex(r"\([^()]*\)", |lex| bracket_text(lex.slice(), 1))]
    Round(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl FlowToken {
    /// True for tokens that join two endpoints.
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            FlowToken::DottedArrow | FlowToken::SolidArrow | FlowToken::OpenLink
        )
    }
}

/// Tokenize one line, dropping anything the mini-language does not know.
pub fn lex_line(line: &str) -> Vec<FlowToken> {
    FlowToken::lexer(line).filter_map(Result::ok).collect()
}
