use logos::Logos;
use std::fmt;

/// Token type for the Weltenwanderer DSL.
///
/// The lexer is deliberately simple — all keyword recognition happens in the parser.
/// Words like "member", "of", "located", "at" are all `Token::Word`. The parser
/// combines them into multi-word keywords based on grammatical context.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left brace `{`.
    LBrace,
    /// Right brace `}`.
    RBrace,
    /// Left bracket `[`.
    LBracket,
    /// Right bracket `]`.
    RBracket,
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
    /// Comma separator `,`.
    Comma,
    /// Newline character (statement separator).
    Newline,
    /// Triple-quoted doc string (`"""..."""`).
    DocString(String),
    /// Double-quoted string literal.
    Str(String),
    /// Integer literal (supports Rust-style underscores and negatives).
    /// Stores both the parsed value and the original source text to preserve
    /// leading zeros when numbers appear in entity names (e.g. `022`).
    Integer(i64, String),
    /// Floating-point literal. Stores parsed value and original source text.
    Float(f64, String),
    /// Bare word (identifier or keyword, disambiguated by the parser).
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Newline => write!(f, "newline"),
            Token::DocString(_) => write!(f, "doc string"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Integer(_, s) => write!(f, "{s}"),
            Token::Float(_, s) => write!(f, "{s}"),
            Token::Word(w) => write!(f, "{w}"),
        }
    }
}

/// Internal logos token — borrows from source to avoid allocations during lexing.
/// Converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"--[^\n]*")]
enum RawToken {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("\n")]
    Newline,

    #[token("\"\"\"")]
    DocStringStart,

    #[regex(r#""[^"\n]*""#)]
    Str,

    #[regex(r"-?[0-9][0-9_]*\.[0-9][0-9_]*")]
    Float,

    #[regex(r"-?[0-9][0-9_]*")]
    Integer,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_'-]*")]
    Word,
}

/// A lexer error with source location.
#[derive(Debug, Clone)]
pub struct LexError {
    /// Byte range of the erroneous input in the source.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the lexer error.
    pub message: String,
}

/// Lex source code into a sequence of `(Token, Span)` pairs.
///
/// Returns the token stream and any lexer errors. Lexing continues past errors
/// to collect as many tokens as possible (important for IDE/LSP support).
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token = match raw {
                    RawToken::LBrace => Token::LBrace,
                    RawToken::RBrace => Token::RBrace,
                    RawToken::LBracket => Token::LBracket,
                    RawToken::RBracket => Token::RBracket,
                    RawToken::LParen => Token::LParen,
                    RawToken::RParen => Token::RParen,
                    RawToken::Comma => Token::Comma,
                    RawToken::Newline => Token::Newline,
                    RawToken::DocStringStart => {
                        // Scan forward for closing """
                        let remainder = lexer.remainder();
                        match remainder.find("\"\"\"") {
                            Some(end_idx) => {
                                let content = &remainder[..end_idx];
                                lexer.bump(end_idx + 3);
                                let full_span = span.start..lexer.span().start;
                                tokens.push((
                                    Token::DocString(content.trim().to_string()),
                                    full_span,
                                ));
                                continue;
                            }
                            None => {
                                errors.push(LexError {
                                    span: span.clone(),
                                    message: "unterminated doc string (missing closing \"\"\")"
                                        .to_string(),
                                });
                                continue;
                            }
                        }
                    }
                    RawToken::Str => {
                        let slice = lexer.slice();
                        Token::Str(unescape(&slice[1..slice.len() - 1]))
                    }
                    RawToken::Float => {
                        let raw = lexer.slice().to_string();
                        match raw.replace('_', "").parse::<f64>() {
                            Ok(n) => Token::Float(n, raw),
                            Err(_) => {
                                errors.push(LexError {
                                    span: span.clone(),
                                    message: format!("invalid float literal: {raw}"),
                                });
                                continue;
                            }
                        }
                    }
                    RawToken::Integer => {
                        let raw = lexer.slice().to_string();
                        match raw.replace('_', "").parse::<i64>() {
                            Ok(n) => Token::Integer(n, raw),
                            Err(_) => {
                                errors.push(LexError {
                                    span: span.clone(),
                                    message: format!("invalid integer literal: {raw}"),
                                });
                                continue;
                            }
                        }
                    }
                    RawToken::Word => Token::Word(lexer.slice().to_string()),
                };
                tokens.push((token, span));
            }
            Err(()) => {
                errors.push(LexError {
                    span: span.clone(),
                    message: format!("unexpected character: {:?}", &source[span.clone()]),
                });
            }
        }
    }

    (tokens, errors)
}

/// Process escape sequences in a string literal.
///
/// Supports `\\`, `\n`, `\t`, `\"`. Unknown sequences are kept as-is.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
