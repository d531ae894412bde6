//! Splitting reply text into typed segments.

use std::sync::OnceLock;

use regex::Regex;

use comanda_types::menu::NO_IMAGE_SENTINEL;

use crate::menu::loader::is_image_ref;

/// One typed piece of a reply, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Image(String),
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("tag pattern is valid"))
}

/// Decompose reply text into alternating text and image segments.
///
/// Bracketed tokens that are neither image references nor the sentinel
/// stay literal text. The `[no-image]` sentinel is dropped entirely:
/// neither a text nor an image segment. Empty text runs between adjacent
/// tags are not emitted.
pub fn split_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in tag_pattern().captures_iter(content) {
        let whole = caps.get(0).expect("match 0 always present");
        let inner = &caps[1];

        let is_sentinel = inner == NO_IMAGE_SENTINEL;
        if !is_sentinel && !is_image_ref(inner) {
            continue;
        }

        if whole.start() > cursor {
            segments.push(Segment::Text(content[cursor..whole.start()].to_string()));
        }
        if !is_sentinel {
            segments.push(Segment::Image(inner.to_string()));
        }
        cursor = whole.end();
    }

    if cursor < content.len() {
        segments.push(Segment::Text(content[cursor..].to_string()));
    }

    segments
}

/// Merge adjacent text segments so intervening tags (or a dropped
/// sentinel) don't fragment paragraph flow.
pub fn coalesce(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match (out.last_mut(), segment) {
            (Some(Segment::Text(acc)), Segment::Text(next)) => acc.push_str(&next),
            (_, segment) => out.push(segment),
        }
    }
    out
}
