use logos::Logos;

use crate::error::{ErrorKind, FolioError, Result};
use crate::token::{Spanned, Token};

/// Tokenize a `.folio` source string into a vector of spanned tokens.
pub fn lex(source: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => {
                tokens.push(Spanned { token, span });
            }
            Err(()) => {
                let fragment = &source[span.clone()];
                return Err(FolioError {
                    kind: ErrorKind::UnrecognizedToken(fragment.to_string()),
                    span: Some(span),
                });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "lexed folio source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_folio_header() {
        let source = r#"
            # My page
            folio "Ayaan Rulhania" {
              image: "icn.png"
              project "GitHub" { style: gradient-4 }
            }
        "#;

        let tokens = lex(source).expect("lexing should succeed");
        let kinds: Vec<_> = tokens.iter().map(|t| &t.token).collect();

        assert_eq!(kinds[0], &Token::Folio);
        assert!(matches!(kinds[1], Token::String(s) if s == "Ayaan Rulhania"));
        assert_eq!(kinds[2], &Token::LBrace);

        assert!(matches!(kinds[3], Token::Ident(s) if s == "image"));
        assert_eq!(kinds[4], &Token::Colon);
        assert!(matches!(kinds[5], Token::String(s) if s == "icn.png"));

        assert_eq!(kinds[6], &Token::Project);
        assert!(matches!(kinds[7], Token::String(s) if s == "GitHub"));
        assert_eq!(kinds[8], &Token::LBrace);
        assert!(matches!(kinds[9], Token::Ident(s) if s == "style"));
        assert_eq!(kinds[10], &Token::Colon);
        assert!(matches!(kinds[11], Token::Ident(s) if s == "gradient-4"));
        assert_eq!(kinds[12], &Token::RBrace);
        assert_eq!(kinds[13], &Token::RBrace);
        assert_eq!(tokens.len(), 14);
    }

    #[test]
    fn lex_numbers_and_calls() {
        let tokens = lex("hover { duration: 480 scale: 1.08 ease: cubic(0.2, 0.9, 0.2, 1.0) }")
            .unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| &t.token).collect();
        assert_eq!(kinds[0], &Token::Hover);
        assert_eq!(kinds[4], &Token::Int(480));
        assert!(matches!(kinds[7], Token::Float(v) if (*v - 1.08).abs() < 1e-10));
        assert!(matches!(kinds[10], Token::Ident(s) if s == "cubic"));
        assert_eq!(kinds[11], &Token::LParen);
        assert_eq!(kinds[13], &Token::Comma);
    }

    #[test]
    fn lex_comments_are_skipped() {
        let tokens = lex("# header comment\nfolio \"x\" {}").unwrap();
        assert_eq!(tokens[0].token, Token::Folio);
    }

    #[test]
    fn lex_string_escapes() {
        let tokens = lex(r#""Say \"hi\"""#).unwrap();
        assert!(matches!(&tokens[0].token, Token::String(s) if s == "Say \"hi\""));
    }

    #[test]
    fn lex_keyword_prefix_is_ident() {
        let tokens = lex("folios").unwrap();
        assert!(matches!(&tokens[0].token, Token::Ident(s) if s == "folios"));
    }

    #[test]
    fn lex_reports_unrecognized_span() {
        let err = lex("folio @").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnrecognizedToken(ref s) if s == "@"));
        assert_eq!(err.span, Some(6..7));
    }
}
