/// Lexer for GraphQL executable documents
///
/// Turns document text into a flat token stream. Used to check generated
/// documents before they leave the process and to inspect them in tests.
use std::fmt;

/// Token types produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Punctuators
    Bang,         // !
    Dollar,       // $
    Amp,          // &
    LeftParen,    // (
    RightParen,   // )
    Spread,       // ...
    Colon,        // :
    Equals,       // =
    At,           // @
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    Pipe,         // |
    RightBrace,   // }

    // Names (keywords are ordinary names in GraphQL)
    Name(String),

    // Literals; strings hold the unescaped value
    Int(i64),
    Float(f64),
    String(String),

    // End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bang => write!(f, "!"),
            Token::Dollar => write!(f, "$"),
            Token::Amp => write!(f, "&"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Spread => write!(f, "..."),
            Token::Colon => write!(f, ":"),
            Token::Equals => write!(f, "="),
            Token::At => write!(f, "@"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::LeftBrace => write!(f, "{{"),
            Token::Pipe => write!(f, "|"),
            Token::RightBrace => write!(f, "}}"),
            Token::Name(name) => write!(f, "{}", name),
            Token::Int(i) => write!(f, "{}", i),
            Token::Float(fl) => write!(f, "{}", fl),
            Token::String(s) => write!(f, "\"{}\"", super::ast::escape_string(s)),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

/// Lexer state
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer from input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_ignored();

        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let ch = self.current_char();

        let single = match ch {
            '!' => Some(Token::Bang),
            '$' => Some(Token::Dollar),
            '&' => Some(Token::Amp),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            ':' => Some(Token::Colon),
            '=' => Some(Token::Equals),
            '@' => Some(Token::At),
            '[' => Some(Token::LeftBracket),
            ']' => Some(Token::RightBracket),
            '{' => Some(Token::LeftBrace),
            '|' => Some(Token::Pipe),
            '}' => Some(Token::RightBrace),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return Ok(token);
        }

        if ch == '.' {
            if self.peek_char() == Some('.') && self.peek_nth(2) == Some('.') {
                self.position += 3;
                return Ok(Token::Spread);
            }
            return Err(LexerError::UnexpectedCharacter(ch));
        }

        if ch == '"' {
            return self.read_string();
        }

        if ch.is_ascii_digit() || ch == '-' {
            return self.read_number();
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.read_name());
        }

        Err(LexerError::UnexpectedCharacter(ch))
    }

    /// Tokenize entire input into vector of tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token == Token::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_nth(1)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Whitespace, commas and `#` comments are insignificant.
    fn skip_ignored(&mut self) {
        while self.position < self.input.len() {
            let ch = self.current_char();
            if ch.is_whitespace() || ch == ',' || ch == '\u{feff}' {
                self.advance();
            } else if ch == '#' {
                while self.position < self.input.len()
                    && !matches!(self.current_char(), '\n' | '\r')
                {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, LexerError> {
        let start = self.position;
        let mut is_float = false;

        if self.current_char() == '-' {
            self.advance();
        }

        while self.position < self.input.len() {
            let ch = self.current_char();
            if ch.is_ascii_digit() {
                self.advance();
            } else if (ch == '.' || ch == 'e' || ch == 'E')
                && self.peek_char().is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+')
            {
                is_float = true;
                self.advance();
                if matches!(self.current_char(), '-' | '+') {
                    self.advance();
                }
            } else {
                break;
            }
        }

        let num_str: String = self.input[start..self.position].iter().collect();

        if is_float {
            num_str
                .parse::<f64>()
                .map(Token::Float)
                .map_err(|_| LexerError::InvalidNumber(num_str))
        } else {
            num_str
                .parse::<i64>()
                .map(Token::Int)
                .map_err(|_| LexerError::InvalidNumber(num_str))
        }
    }

    fn read_string(&mut self) -> Result<Token, LexerError> {
        self.advance(); // skip opening quote
        let mut value = String::new();

        loop {
            if self.position >= self.input.len() {
                return Err(LexerError::UnterminatedString);
            }
            let ch = self.current_char();
            self.advance();
            match ch {
                '"' => break,
                '\n' | '\r' => return Err(LexerError::UnterminatedString),
                '\\' => value.push(self.read_escape()?),
                c => value.push(c),
            }
        }

        Ok(Token::String(value))
    }

    fn read_escape(&mut self) -> Result<char, LexerError> {
        if self.position >= self.input.len() {
            return Err(LexerError::UnterminatedString);
        }
        let ch = self.current_char();
        self.advance();
        match ch {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{8}'),
            'f' => Ok('\u{c}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => {
                if self.position + 4 > self.input.len() {
                    return Err(LexerError::InvalidEscape("\\u".to_string()));
                }
                let hex: String = self.input[self.position..self.position + 4].iter().collect();
                self.position += 4;
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(LexerError::InvalidEscape(format!("\\u{}", hex)))
            }
            other => Err(LexerError::InvalidEscape(format!("\\{}", other))),
        }
    }

    fn read_name(&mut self) -> Token {
        let start = self.position;

        while self.position < self.input.len() {
            let ch = self.current_char();
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        Token::Name(self.input[start..self.position].iter().collect())
    }
}

/// Lexer errors
#[derive(Debug, Clone, PartialEq)]
pub enum LexerError {
    UnexpectedCharacter(char),
    InvalidNumber(String),
    UnterminatedString,
    InvalidEscape(String),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::UnexpectedCharacter(ch) => write!(f, "Unexpected character: '{}'", ch),
            LexerError::InvalidNumber(s) => write!(f, "Invalid number: '{}'", s),
            LexerError::UnterminatedString => write!(f, "Unterminated string literal"),
            LexerError::InvalidEscape(s) => write!(f, "Invalid escape sequence: '{}'", s),
        }
    }
}

impl std::error::Error for LexerError {}
