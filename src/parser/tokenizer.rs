use crate::core::{KvError, Result};

/// One whitespace-delimited word of a command line
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Written in double quotes; always read back as text
    pub quoted: bool,
}

/// Split a line into tokens.
///
/// Double quotes group words and may contain `\"` and `\\` escapes.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some(escaped) => text.push(escaped),
                        None => break,
                    },
                    other => text.push(other),
                }
            }
            if !closed {
                return Err(KvError::ParseError("unterminated quoted string".into()));
            }
            tokens.push(Token { text, quoted: true });
            continue;
        }

        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                break;
            }
            text.push(c);
            chars.next();
        }
        tokens.push(Token {
            text,
            quoted: false,
        });
    }

    Ok(tokens)
}
