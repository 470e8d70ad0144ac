//! Media-query predicate parsing and matching.
//!
//! Predicates appear as property names in authored styles, e.g.
//! `"@media (min-width: 600px) and (max-width: 800px)"`. Matching is
//! evaluated against the viewport dimensions and writing direction carried by
//! the resolution context.

use crate::types::WritingDirection;
use crate::{Error, Result};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// Check whether a property name is a media-query predicate.
pub fn is_media_query(name: &str) -> bool {
    name.starts_with("@media")
}

/// Viewport orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Height is the larger dimension.
    Portrait,
    /// Width is the larger (or equal) dimension.
    Landscape,
}

impl Orientation {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }
}

/// One `(feature: value)` condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCondition {
    /// Viewport width is at least this many pixels.
    MinWidth(f64),
    /// Viewport width is at most this many pixels.
    MaxWidth(f64),
    /// Viewport height is at least this many pixels.
    MinHeight(f64),
    /// Viewport height is at most this many pixels.
    MaxHeight(f64),
    /// Viewport width is exactly this many pixels.
    Width(f64),
    /// Viewport height is exactly this many pixels.
    Height(f64),
    /// Viewport orientation matches.
    Orientation(Orientation),
    /// Writing direction matches.
    Direction(WritingDirection),
}

/// A parsed predicate: a conjunction of conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPredicate {
    conditions: Vec<MediaCondition>,
}

impl MediaPredicate {
    /// Evaluate the predicate against the current environment.
    pub fn matches(
        &self,
        viewport_width: f64,
        viewport_height: f64,
        direction: WritingDirection,
    ) -> bool {
        self.conditions.iter().all(|condition| match *condition {
            MediaCondition::MinWidth(v) => viewport_width >= v,
            MediaCondition::MaxWidth(v) => viewport_width <= v,
            MediaCondition::MinHeight(v) => viewport_height >= v,
            MediaCondition::MaxHeight(v) => viewport_height <= v,
            MediaCondition::Width(v) => viewport_width == v,
            MediaCondition::Height(v) => viewport_height == v,
            MediaCondition::Orientation(Orientation::Landscape) => {
                viewport_width >= viewport_height
            }
            MediaCondition::Orientation(Orientation::Portrait) => viewport_width < viewport_height,
            MediaCondition::Direction(d) => direction == d,
        })
    }
}

/// Parse a predicate string into its conditions.
pub fn parse_media_predicate(predicate: &str) -> Result<MediaPredicate> {
    let mut raw = ParserInput::new(predicate);
    let mut parser = Parser::new(&mut raw);

    match parser.next() {
        Ok(Token::AtKeyword(keyword)) if keyword.eq_ignore_ascii_case("media") => {}
        _ => return Err(Error::invalid_predicate(predicate, "expected '@media'")),
    }

    let mut conditions = vec![];
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::ParenthesisBlock => {
                let condition = parser
                    .parse_nested_block(|block| parse_condition(block))
                    .map_err(|e: CssParseError<'_, ()>| {
                        Error::invalid_predicate(predicate, format!("{e:?}"))
                    })?;
                conditions.push(condition);
            }
            Token::Ident(ref word) if word.eq_ignore_ascii_case("and") => {}
            other => {
                return Err(Error::invalid_predicate(
                    predicate,
                    format!("unexpected token {other:?}"),
                ));
            }
        }
    }

    if conditions.is_empty() {
        return Err(Error::invalid_predicate(predicate, "no conditions"));
    }
    Ok(MediaPredicate { conditions })
}

fn parse_condition<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<MediaCondition, CssParseError<'i, ()>> {
    let feature = parser.expect_ident()?.to_ascii_lowercase();
    parser.expect_colon()?;
    let token = parser.next()?.clone();

    let condition = match token {
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => dimension_condition(&feature, value as f64),
        Token::Number { value, .. } => dimension_condition(&feature, value as f64),
        Token::Ident(ref word) => match feature.as_str() {
            "orientation" => Orientation::from_css(word).map(MediaCondition::Orientation),
            "direction" => WritingDirection::from_css(word).map(MediaCondition::Direction),
            _ => None,
        },
        _ => None,
    };
    condition.ok_or_else(|| parser.new_custom_error(()))
}

fn dimension_condition(feature: &str, value: f64) -> Option<MediaCondition> {
    match feature {
        "min-width" => Some(MediaCondition::MinWidth(value)),
        "max-width" => Some(MediaCondition::MaxWidth(value)),
        "min-height" => Some(MediaCondition::MinHeight(value)),
        "max-height" => Some(MediaCondition::MaxHeight(value)),
        "width" => Some(MediaCondition::Width(value)),
        "height" => Some(MediaCondition::Height(value)),
        _ => None,
    }
}
