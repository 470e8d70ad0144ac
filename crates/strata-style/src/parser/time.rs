//! Time value parsing for delay and duration properties.

use crate::{Error, Result};
use cssparser::{Parser, ParserInput, Token};

/// Parse a time string (`"300ms"`, `"0.5s"`, or a bare number already in
/// milliseconds) into milliseconds.
pub fn parse_time_value(input: &str) -> Result<f64> {
    let mut raw = ParserInput::new(input);
    let mut parser = Parser::new(&mut raw);

    let token = match parser.next() {
        Ok(token) => token.clone(),
        Err(_) => return Err(Error::parse(input, "expected a time value")),
    };
    if !parser.is_exhausted() {
        return Err(Error::parse(input, "expected a single time value"));
    }

    match token {
        Token::Dimension {
            value, ref unit, ..
        } => match unit.to_ascii_lowercase().as_str() {
            "ms" => Ok(value as f64),
            "s" => Ok(value as f64 * 1000.0),
            other => Err(Error::parse(input, format!("unknown time unit '{other}'"))),
        },
        Token::Number { value, .. } => Ok(value as f64),
        _ => Err(Error::parse(input, "expected a time value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_milliseconds_and_seconds() {
        assert_eq!(parse_time_value("300ms").unwrap(), 300.0);
        assert_eq!(parse_time_value("0.5s").unwrap(), 500.0);
        assert_eq!(parse_time_value("2S").unwrap(), 2000.0);
        assert_eq!(parse_time_value("150").unwrap(), 150.0);
    }

    #[test]
    fn rejects_non_times() {
        assert!(parse_time_value("fast").is_err());
        assert!(parse_time_value("10px").is_err());
        assert!(parse_time_value("1s 2s").is_err());
    }
}
