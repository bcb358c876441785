use logos::{Lexer, Logos, Skip};

/// Token types for HTML markup
///
/// The token set is deliberately coarse: open tags are kept as raw slices
/// (name and attributes are split later, once the tag is known to matter),
/// comments and doctypes are dropped during lexing, and anything that is
/// not recognizable markup lexes as text. Every byte of input matches some
/// rule, so tokenization is total.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    #[token("<!--", lex_comment)]
    Comment,

    #[regex(r"<![dD][oO][cC][tT][yY][pP][eE][^>]*>", logos::skip)]
    Doctype,

    #[regex(r"</[a-zA-Z][^>]*>", |lex| lex.slice())]
    CloseTag(&'src str),

    #[regex(r"<[a-zA-Z][^>]*>", |lex| lex.slice())]
    OpenTag(&'src str),

    // A lone `<` that opens no tag is ordinary text
    #[regex(r"[^<]+", |lex| lex.slice())]
    #[token("<", |lex| lex.slice())]
    Text(&'src str),
}

// Comments may contain `>`, so they cannot be a single regex without lazy
// matching; consume to the closing marker by hand (or to end of input when
// unterminated).
fn lex_comment<'src>(lex: &mut Lexer<'src, Token<'src>>) -> Skip {
    let rest = lex.remainder();
    match rest.find("-->") {
        Some(end) => lex.bump(end + 3),
        None => lex.bump(rest.len()),
    }
    Skip
}

/// Tokenize a markup string
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Token::lexer(source).filter_map(|result| result.ok()).collect()
}
