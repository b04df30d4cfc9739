use logos::Logos;

/// Tokens produced by lexing a `.folio` file.
///
/// Keywords are only the block openers. Property names (`image`, `link`,
/// `stagger`, ...) are plain identifiers and the parser gives them meaning.
/// Identifiers may contain `-` so presets read `gradient-1`.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+|#[^\n]*")]
pub enum Token {
    // ── Structural keywords ────────────────────────────────────────────
    #[token("folio")]
    Folio,
    #[token("project")]
    Project,
    #[token("kinetic")]
    Kinetic,
    #[token("hover")]
    Hover,

    // ── Literals ───────────────────────────────────────────────────────
    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r"[0-9]+", priority = 3, callback = |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    String(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*", priority = 1, callback = |lex| Some(lex.slice().to_string()))]
    Ident(String),

    // ── Punctuation ────────────────────────────────────────────────────
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Strip the quotes and resolve `\"`, `\\`, `\n`, `\t`. Unknown escapes fail.
fn unescape(quoted: &str) -> Option<String> {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            _ => return None,
        }
    }
    Some(out)
}

impl Token {
    /// Human-readable name for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Folio => "'folio'",
            Token::Project => "'project'",
            Token::Kinetic => "'kinetic'",
            Token::Hover => "'hover'",
            Token::Float(_) => "float",
            Token::Int(_) => "integer",
            Token::String(_) => "string",
            Token::Ident(_) => "identifier",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::LParen => "'('",
            Token::RParen => "')'",
        }
    }
}

/// A token with its source location (byte offset span).
#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Quote a string so it lexes back to itself.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_resolves_known_escapes() {
        assert_eq!(unescape(r#""a\"b\\c\n""#).as_deref(), Some("a\"b\\c\n"));
        assert_eq!(unescape(r#""\q""#), None);
    }

    #[test]
    fn quote_is_inverse_of_unescape() {
        let s = "say \"hi\"\\\tthere";
        assert_eq!(unescape(&quote(s)).as_deref(), Some(s));
    }
}
