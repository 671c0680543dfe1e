/// Checks applied to every document before it is sent
///
/// Builders escape their parameters, so these checks guard against
/// hand-written or corrupted documents rather than hostile handles.
use storefront_core::error::{Error, Result};
use storefront_core::query::{Lexer, Token};

/// Largest document accepted, in bytes
pub const MAX_QUERY_LENGTH: usize = 1024 * 1024; // 1 MB

/// Validates a GraphQL document
///
/// # Security
///
/// - Prevents empty documents
/// - Prevents oversized documents (>1MB)
/// - Rejects text the lexer cannot tokenize
/// - Rejects unbalanced `{}`, `()` and `[]`
///
/// # Errors
///
/// Returns `Error::InvalidInput` or `Error::Lex` if validation fails
pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > MAX_QUERY_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Query length {} exceeds maximum {}",
            query.len(),
            MAX_QUERY_LENGTH
        )));
    }

    let tokens = Lexer::new(query).tokenize()?;

    let mut open: Vec<&Token> = Vec::new();
    for token in &tokens {
        match token {
            Token::LeftBrace | Token::LeftParen | Token::LeftBracket => open.push(token),
            Token::RightBrace | Token::RightParen | Token::RightBracket => {
                let expected = match token {
                    Token::RightBrace => Token::LeftBrace,
                    Token::RightParen => Token::LeftParen,
                    _ => Token::LeftBracket,
                };
                match open.pop() {
                    Some(opener) if *opener == expected => {}
                    _ => {
                        return Err(Error::InvalidInput(format!(
                            "Unbalanced '{}' in query",
                            token
                        )))
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::InvalidInput(format!(
            "Unclosed '{}' in query",
            unclosed
        )));
    }

    Ok(())
}
