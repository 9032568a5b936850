//! Content negotiation between the HTML and JSON representations.
//!
//! Every resource route answers in one of two formats. [`Format`] picks one
//! from the `Accept` header using the usual media-range rules: the most
//! specific range matching a candidate decides its quality, candidates are
//! ranked by quality, then specificity, then the position of the matching
//! range in the header, and finally by candidate order (HTML before JSON).

use std::cmp::Ordering;

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::AppError;

/// Response representation chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

/// Candidates in tie-break order.
const CANDIDATES: [(Format, &str, &str); 2] = [
    (Format::Html, "text", "html"),
    (Format::Json, "application", "json"),
];

impl Format {
    /// Negotiate from a raw `Accept` header value.
    ///
    /// A missing or blank header accepts anything, so the first candidate
    /// (HTML) wins. Returns `None` when neither format is acceptable.
    pub fn negotiate(accept: Option<&str>) -> Option<Format> {
        let Some(accept) = accept.map(str::trim).filter(|a| !a.is_empty()) else {
            return Some(Format::Html);
        };

        let ranges: Vec<MediaRange> = accept
            .split(',')
            .enumerate()
            .filter_map(|(position, raw)| MediaRange::parse(raw, position))
            .collect();

        CANDIDATES
            .iter()
            .enumerate()
            .filter_map(|(order, &(format, kind, subtype))| {
                let (range, specificity) = ranges
                    .iter()
                    .filter_map(|r| r.specificity(kind, subtype).map(|s| (r, s)))
                    .max_by(|(a, sa), (b, sb)| sa.cmp(sb).then(b.position.cmp(&a.position)))?;
                (range.q > 0.0).then_some(Priority {
                    format,
                    q: range.q,
                    specificity,
                    position: range.position,
                    order,
                })
            })
            .max_by(Priority::rank)
            .map(|p| p.format)
    }

    /// Negotiate from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Option<Format> {
        let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
        Self::negotiate(accept)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Format {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Format::from_headers(&parts.headers).ok_or(AppError::NotAcceptable)
    }
}

/// One `type/subtype;q=...` entry of an `Accept` header.
#[derive(Debug)]
struct MediaRange {
    kind: String,
    subtype: String,
    q: f32,
    position: usize,
}

impl MediaRange {
    fn parse(raw: &str, position: usize) -> Option<Self> {
        let mut params = raw.split(';');
        let (kind, subtype) = params.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let q = params
            .filter_map(|p| p.split_once('='))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
            .map(|(_, value)| value.trim().parse::<f32>().unwrap_or(0.0).clamp(0.0, 1.0))
            .unwrap_or(1.0);

        Some(Self {
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            q,
            position,
        })
    }

    /// How specifically this range matches `kind/subtype`: 2 for an exact
    /// match, 1 for `kind/*`, 0 for `*/*`, `None` if it does not match.
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        match (self.kind.as_str(), self.subtype.as_str()) {
            ("*", "*") => Some(0),
            (k, "*") if k == kind => Some(1),
            (k, s) if k == kind && s == subtype => Some(2),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Priority {
    format: Format,
    q: f32,
    specificity: u8,
    position: usize,
    order: usize,
}

impl Priority {
    /// Greater means preferred.
    fn rank(a: &Self, b: &Self) -> Ordering {
        a.q.partial_cmp(&b.q)
            .unwrap_or(Ordering::Equal)
            .then(a.specificity.cmp(&b.specificity))
            .then(b.position.cmp(&a.position))
            .then(b.order.cmp(&a.order))
    }
}
