//! Length value parsing.

use crate::types::LengthValue;
use cssparser::{Parser, ParserInput, Token};

/// Parse a string as a single length-with-unit value.
///
/// Returns `None` for anything that is not exactly one dimension token with a
/// recognized unit: bare numbers, percentages, and keyword strings all pass
/// through untouched (the host platform accepts them as-is).
pub fn parse_length(input: &str) -> Option<LengthValue> {
    let mut raw = ParserInput::new(input);
    let mut parser = Parser::new(&mut raw);

    let token = parser.next().ok()?.clone();
    if !parser.is_exhausted() {
        return None;
    }

    match token {
        Token::Dimension {
            value, ref unit, ..
        } => {
            let magnitude = value as f64;
            match unit.to_ascii_lowercase().as_str() {
                "px" => Some(LengthValue::Px(magnitude)),
                "em" => Some(LengthValue::Em(magnitude)),
                "rem" => Some(LengthValue::Rem(magnitude)),
                "vw" => Some(LengthValue::Vw(magnitude)),
                "vh" => Some(LengthValue::Vh(magnitude)),
                "vmin" => Some(LengthValue::Vmin(magnitude)),
                "vmax" => Some(LengthValue::Vmax(magnitude)),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_units() {
        assert_eq!(parse_length("12px"), Some(LengthValue::Px(12.0)));
        assert_eq!(parse_length("1.5em"), Some(LengthValue::Em(1.5)));
        assert_eq!(parse_length("-2rem"), Some(LengthValue::Rem(-2.0)));
        assert_eq!(parse_length("50vw"), Some(LengthValue::Vw(50.0)));
        assert_eq!(parse_length("100VH"), Some(LengthValue::Vh(100.0)));
    }

    #[test]
    fn rejects_non_lengths() {
        assert_eq!(parse_length("1.5"), None);
        assert_eq!(parse_length("50%"), None);
        assert_eq!(parse_length("red"), None);
        assert_eq!(parse_length("12pt"), None);
        assert_eq!(parse_length("12px solid"), None);
    }
}
