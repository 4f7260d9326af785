//! Request matching primitives.
//!
//! # Responsibilities
//! - Extract and normalize the request host (header, then URI authority)
//! - Split a request path into segments and an optional format suffix
//! - Match compiled path patterns against request segments
//!
//! # Design Decisions
//! - Host comparison is equality after lowercasing and dropping the port
//! - Path matching is case-sensitive
//! - No regex: patterns are literal segments plus named parameters

use std::fmt;

use axum::http::{header, HeaderMap, Uri};

use crate::routing::resource::Format;

/// Normalize a host value for comparison.
///
/// Lowercases and strips a trailing `:port`. Bracketed IPv6 literals keep
/// their brackets.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        match host.rsplit_once(':') {
            Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
            _ => host,
        }
    };
    without_port.to_ascii_lowercase()
}

/// Host the request was addressed to, if any.
///
/// HTTP/1.1 clients send a `Host` header; HTTP/2 clients may only carry the
/// `:authority` pseudo-header, which surfaces as the URI authority.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(normalize_host)
        .or_else(|| uri.authority().map(|a| normalize_host(a.as_str())))
        .filter(|h| !h.is_empty())
}

/// A request path broken into segments, with the format suffix split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath<'a> {
    pub segments: Vec<&'a str>,
    pub format: Option<&'a str>,
}

impl<'a> RequestPath<'a> {
    /// Parse a raw URI path.
    ///
    /// Empty segments are ignored, so `/health/` and `/health` are the same
    /// path. A dot in the final segment starts the format suffix.
    pub fn parse(path: &'a str) -> Self {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut format = None;

        if let Some(last) = segments.pop() {
            match last.rsplit_once('.') {
                Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                    segments.push(stem);
                    format = Some(ext);
                }
                _ => segments.push(last),
            }
        }

        Self { segments, format }
    }

    /// Resolve the requested format, defaulting to HTML.
    ///
    /// Returns `None` for an extension that names no known format.
    pub fn resolve_format(&self) -> Option<Format> {
        match self.format {
            None => Some(Format::Html),
            Some(ext) => Format::from_extension(ext),
        }
    }
}

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path pattern such as `/registration/emails/:id/edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// The root pattern `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend with a literal segment.
    pub fn literal(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Literal(name.to_string()));
        Self { segments }
    }

    /// Extend with a named parameter segment.
    pub fn param(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Param(name.to_string()));
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pattern shape with parameter names erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Param(_) => out.push(':'),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Match request segments, returning captured parameters.
    pub fn matches(&self, request: &[&str]) -> Option<Vec<(String, String)>> {
        if request.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, value) in self.segments.iter().zip(request) {
            match segment {
                Segment::Literal(s) if s == value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), (*value).to_string())),
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => write!(f, "/{}", s)?,
                Segment::Param(p) => write!(f, "/:{}", p)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("WWW.Example.COM"), "www.example.com");
        assert_eq!(normalize_host("www.example.com:8080"), "www.example.com");
        assert_eq!(normalize_host("[::1]:3000"), "[::1]");
        assert_eq!(normalize_host("localhost"), "localhost");
    }

    #[test]
    fn test_request_host_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("staff.example.org:443"));
        let uri: Uri = "http://other.example.org/health".parse().unwrap();
        assert_eq!(request_host(&headers, &uri).as_deref(), Some("staff.example.org"));

        let empty = HeaderMap::new();
        assert_eq!(request_host(&empty, &uri).as_deref(), Some("other.example.org"));

        let relative: Uri = "/health".parse().unwrap();
        assert_eq!(request_host(&empty, &relative), None);
    }

    #[test]
    fn test_request_path_format_suffix() {
        let path = RequestPath::parse("/robots.txt");
        assert_eq!(path.segments, vec!["robots"]);
        assert_eq!(path.resolve_format(), Some(Format::Txt));

        let path = RequestPath::parse("/contact/email/42/");
        assert_eq!(path.segments, vec!["contact", "email", "42"]);
        assert_eq!(path.resolve_format(), Some(Format::Html));

        let path = RequestPath::parse("/health.xml");
        assert_eq!(path.resolve_format(), None);

        assert!(RequestPath::parse("/").segments.is_empty());
    }

    #[test]
    fn test_pattern_match_and_display() {
        let pattern = PathPattern::root().literal("contact").literal("email").param("id");
        assert_eq!(pattern.to_string(), "/contact/email/:id");
        assert_eq!(pattern.shape(), "/contact/email/:");

        let params = pattern.matches(&["contact", "email", "7"]).unwrap();
        assert_eq!(params, vec![("id".to_string(), "7".to_string())]);

        assert!(pattern.matches(&["email", "7"]).is_none());
        assert!(pattern.matches(&["contact", "telephone", "7"]).is_none());
        assert_eq!(PathPattern::root().to_string(), "/");
        assert!(PathPattern::root().matches(&[]).is_some());
    }
}
