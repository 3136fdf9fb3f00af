//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile pattern strings (`/reset/:username/:token`) into segments
//! - Match concrete paths segment-by-segment
//! - Bind parameter segments to named values
//!
//! # Design Decisions
//! - Literal segments match case-sensitively
//! - A pattern only matches paths with the exact same segment count
//! - A single trailing slash is ignored (`/tag/abc/` matches `/tag/abc`)
//! - Empty interior segments (`/tag//abc`) never match
//! - Parameter values bind raw; percent-decoding belongs to the
//!   navigation layer

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Error raised while compiling a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),
    #[error("pattern {0:?} contains an empty segment")]
    EmptySegment(String),
    #[error("pattern {0:?} contains a parameter with no name")]
    UnnamedParam(String),
}

/// Parameter bindings extracted from a matched path.
///
/// Kept ordered so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string. Parameter segments start with `:`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(raw.to_string()))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for piece in rest.split('/') {
                if piece.is_empty() {
                    return Err(PatternError::EmptySegment(raw.to_string()));
                }
                if let Some(name) = piece.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(PatternError::UnnamedParam(raw.to_string()));
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    segments.push(Segment::Literal(piece.to_string()));
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path, binding parameters on success.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let pieces = split_path(path)?;
        if pieces.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, piece) in self.segments.iter().zip(pieces) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != piece {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, piece),
            }
        }
        Some(params)
    }
}

/// Split a path into segments, or None if the path is malformed.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let pieces: Vec<&str> = rest.split('/').collect();
    if pieces.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(pieces)
}
