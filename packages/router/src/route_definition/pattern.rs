use std::borrow::Cow;

use urlencoding::decode;

use crate::RouteTableError;

/// A parsed route path.
///
/// Two kinds of patterns exist:
/// - _literal_ patterns like `/` or `/project/lawcrative`, which match their segments exactly;
/// - the _catch-all_ pattern `/:name(.*)*`, which matches any path and captures all of its
///   segments under `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// A path that must match segment by segment. The root path has no segments.
    Literal(Vec<String>),
    /// A catch-all that matches zero or more segments.
    CatchAll {
        /// The name the captured segments are exposed under.
        param: String,
    },
}

impl RoutePattern {
    /// Parse a route path.
    ///
    /// A trailing `/` is ignored, except for the root path. Literal segments are
    /// percent-decoded.
    ///
    /// ```rust
    /// # use folio_router::prelude::*;
    /// assert_eq!(
    ///     RoutePattern::parse("/project/lawcrative/").unwrap(),
    ///     RoutePattern::Literal(vec!["project".into(), "lawcrative".into()])
    /// );
    /// assert_eq!(
    ///     RoutePattern::parse("/:pathMatch(.*)*").unwrap(),
    ///     RoutePattern::CatchAll { param: "pathMatch".into() }
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason: &'static str| RouteTableError::InvalidPattern {
            path: path.to_string(),
            reason,
        };

        if !path.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }

        let segments = split_segments(path);

        if let Some(first) = segments.first() {
            if let Some(dynamic) = first.strip_prefix(':') {
                if segments.len() > 1 {
                    return Err(invalid("the catch-all must be the only segment"));
                }
                let param = dynamic
                    .strip_suffix("(.*)*")
                    .or_else(|| dynamic.strip_suffix("(.*)"))
                    .ok_or_else(|| {
                        invalid("only catch-all parameters like `:name(.*)*` are supported")
                    })?;
                if param.is_empty() || !param.chars().all(|c| c.is_alphanumeric() || c == '_') {
                    return Err(invalid("the catch-all needs a name"));
                }
                return Ok(Self::CatchAll {
                    param: param.to_string(),
                });
            }
        }

        let mut literal = Vec::with_capacity(segments.len());
        for segment in segments {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if segment.ends_with("(.*)*") || segment.ends_with("(.*)") {
                return Err(invalid("the catch-all must be the only segment"));
            }
            if segment.starts_with(':') {
                return Err(invalid("only catch-all parameters like `:name(.*)*` are supported"));
            }
            literal.push(decode_segment(segment).into_owned());
        }

        Ok(Self::Literal(literal))
    }

    /// Returns `true` for the catch-all pattern.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }
}

/// Split a path into its segments.
///
/// The leading `/` is dropped and a single trailing `/` is ignored, so both `/` and the empty
/// string have no segments, while `//` has one empty segment.
pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

/// Percent-decode a segment, keeping it as is when it does not decode to UTF-8.
pub(crate) fn decode_segment(segment: &str) -> Cow<'_, str> {
    decode(segment).unwrap_or(Cow::Borrowed(segment))
}
