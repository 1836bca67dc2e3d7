// ============================================================================
// Command Parser
// ============================================================================
//
// Turns one text line into a `Command`. Verbs are case-insensitive, keys are
// taken verbatim, values go through `Value::parse` unless quoted.
//
// ============================================================================

use super::ast::Command;
use super::tokenizer::{Token, tokenize};
use crate::core::{KvError, Result, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a line; blank lines and `#` comments yield `None`
    pub fn parse(&self, line: &str) -> Result<Option<Command>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(trimmed)?;
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(None);
        };
        if verb.quoted {
            return Err(KvError::ParseError(format!(
                "command verb cannot be quoted: \"{}\"",
                verb.text
            )));
        }

        let verb_upper = verb.text.to_uppercase();
        let command = match verb_upper.as_str() {
            "GET" => {
                let [key] = exact::<1>(&verb_upper, args, "<key>")?;
                Command::Get(parse_key(key)?)
            }
            "SET" => {
                let [key, value] = exact::<2>(&verb_upper, args, "<key> <value>")?;
                Command::Set(parse_key(key)?, parse_value(value)?)
            }
            "DEL" | "DELETE" => {
                let [key] = exact::<1>(&verb_upper, args, "<key>")?;
                Command::Del(parse_key(key)?)
            }
            "BEGIN" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Begin
            }
            "COMMIT" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Commit
            }
            "ROLLBACK" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Rollback
            }
            "KEYS" => Command::Keys(optional_value(&verb_upper, args)?),
            "VALUES" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Values
            }
            "COUNT" => Command::Count(optional_value(&verb_upper, args)?),
            "SHOW" => match args {
                [] => Command::Show(None),
                [limit] => {
                    let limit = limit.text.parse::<usize>().map_err(|_| {
                        KvError::InvalidValue(format!(
                            "SHOW limit must be a non-negative integer, got '{}'",
                            limit.text
                        ))
                    })?;
                    Command::Show(Some(limit))
                }
                _ => return Err(too_many(&verb_upper, "at most one <limit>")),
            },
            "DUMP" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Dump
            }
            "DEPTH" => {
                exact::<0>(&verb_upper, args, "no arguments")?;
                Command::Depth
            }
            "HELP" | "?" => Command::Help,
            "EXIT" | "QUIT" => Command::Exit,
            _ => return Err(KvError::UnknownCommand(verb.text.clone())),
        };

        Ok(Some(command))
    }
}

/// Usage lines printed by `HELP`
pub const USAGE: &str = "\
GET <key>            print the value stored under <key>
SET <key> <value>    store <value> under <key>
DEL <key>            remove <key>
BEGIN                open a (nested) transaction
COMMIT               make pending changes permanent
ROLLBACK             undo changes back to the latest BEGIN
KEYS [value]         list keys, optionally only those holding [value]
VALUES               list values
COUNT [value]        count records, optionally only those holding [value]
SHOW [limit]         print records as a table
DUMP                 print records as JSON
DEPTH                print the number of open transactions
HELP                 print this help
EXIT                 leave";

fn exact<'a, const N: usize>(
    verb: &str,
    args: &'a [Token],
    expected: &str,
) -> Result<&'a [Token; N]> {
    if args.len() > N {
        return Err(too_many(verb, expected));
    }
    args.try_into()
        .map_err(|_| KvError::MissingArgument(verb.to_string(), expected.to_string()))
}

fn optional_value(verb: &str, args: &[Token]) -> Result<Option<Value>> {
    match args {
        [] => Ok(None),
        [value] => parse_value(value).map(Some),
        _ => Err(too_many(verb, "at most one [value]")),
    }
}

fn too_many(verb: &str, expected: &str) -> KvError {
    KvError::ParseError(format!("{} expects {}: too many arguments", verb, expected))
}

fn parse_key(token: &Token) -> Result<String> {
    if token.text.is_empty() {
        return Err(KvError::InvalidValue("key must not be empty".into()));
    }
    Ok(token.text.clone())
}

fn parse_value(token: &Token) -> Result<Value> {
    if token.quoted {
        Ok(Value::Text(token.text.clone()))
    } else {
        Value::parse(&token.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Command>> {
        CommandParser::new().parse(line)
    }

    #[test]
    fn test_parse_mutations() {
        assert_eq!(
            parse("SET a 1").unwrap(),
            Some(Command::Set("a".into(), Value::Integer(1)))
        );
        assert_eq!(
            parse("set name \"Ada Lovelace\"").unwrap(),
            Some(Command::Set("name".into(), Value::Text("Ada Lovelace".into())))
        );
        assert_eq!(parse("del a").unwrap(), Some(Command::Del("a".into())));
        assert_eq!(parse("Begin").unwrap(), Some(Command::Begin));
        assert_eq!(parse("COMMIT").unwrap(), Some(Command::Commit));
        assert_eq!(parse("rollback").unwrap(), Some(Command::Rollback));
    }

    #[test]
    fn test_quoted_number_stays_text() {
        assert_eq!(
            parse("SET a \"42\"").unwrap(),
            Some(Command::Set("a".into(), Value::Text("42".into())))
        );
    }

    #[test]
    fn test_parse_accessors() {
        assert_eq!(parse("KEYS").unwrap(), Some(Command::Keys(None)));
        assert_eq!(
            parse("KEYS 1").unwrap(),
            Some(Command::Keys(Some(Value::Integer(1))))
        );
        assert_eq!(parse("COUNT").unwrap(), Some(Command::Count(None)));
        assert_eq!(parse("SHOW 5").unwrap(), Some(Command::Show(Some(5))));
        assert_eq!(parse("show").unwrap(), Some(Command::Show(None)));
        assert_eq!(parse("QUIT").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# a comment").unwrap(), None);
    }

    #[test]
    fn test_argument_errors() {
        assert!(matches!(parse("GET"), Err(KvError::MissingArgument(..))));
        assert!(matches!(parse("SET a"), Err(KvError::MissingArgument(..))));
        assert!(matches!(parse("BEGIN now"), Err(KvError::ParseError(_))));
        assert!(matches!(parse("SHOW -1"), Err(KvError::InvalidValue(_))));
        assert!(matches!(parse("GET \"\""), Err(KvError::InvalidValue(_))));
    }

    #[test]
    fn test_unknown_command() {
        match parse("FLY away") {
            Err(KvError::UnknownCommand(verb)) => assert_eq!(verb, "FLY"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
