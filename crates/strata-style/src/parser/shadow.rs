//! Shadow shorthand parsing.

use crate::{Error, Result};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// One parsed shadow: physical offsets, blur radius, and the color as raw
/// source text (colors pass through to the host platform unparsed).
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    /// Horizontal offset in pixels.
    pub offset_x: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Blur radius in pixels.
    pub blur_radius: f64,
    /// Color, if the shorthand specified one.
    pub color: Option<String>,
}

/// Parse a comma-separated shadow shorthand string.
///
/// Each segment is read as up to three numeric components (offset-x,
/// offset-y, blur-radius) plus an optional color, which may be a keyword, a
/// hash color, or a function like `rgba(...)` captured verbatim.
pub fn parse_shadow_list(input: &str) -> Result<Vec<Shadow>> {
    let mut raw = ParserInput::new(input);
    let mut parser = Parser::new(&mut raw);

    let mut shadows = vec![];
    let mut numbers: Vec<f64> = vec![];
    let mut color: Option<String> = None;

    loop {
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Dimension { value, .. } | Token::Number { value, .. } => {
                numbers.push(value as f64);
            }
            Token::Hash(ref name) | Token::IDHash(ref name) => {
                color = Some(format!("#{name}"));
            }
            Token::Ident(ref name) => {
                color = Some(name.to_string());
            }
            Token::Function(_) => {
                let _ = parser.parse_nested_block(|block| {
                    while block.next().is_ok() {}
                    Ok::<(), CssParseError<'_, ()>>(())
                });
                color = Some(parser.slice_from(start).trim().to_string());
            }
            Token::Comma => {
                shadows.push(build_shadow(&numbers, color.take()));
                numbers.clear();
            }
            _ => {
                return Err(Error::parse(input, format!("unexpected token {token:?}")));
            }
        }
    }

    if !numbers.is_empty() || color.is_some() {
        shadows.push(build_shadow(&numbers, color));
    }
    Ok(shadows)
}

fn build_shadow(numbers: &[f64], color: Option<String>) -> Shadow {
    Shadow {
        offset_x: numbers.first().copied().unwrap_or(0.0),
        offset_y: numbers.get(1).copied().unwrap_or(0.0),
        blur_radius: numbers.get(2).copied().unwrap_or(0.0),
        color,
    }
}
