//! Escapable path joining and splitting.
//!
//! A path is a sequence of opaque segments joined by a one-character
//! separator ('.' unless another is supplied). Segments may themselves
//! contain the separator or the escape character '\'; both are escaped
//! with a '\' prefix so join and split are exact inverses:
//!   join_path(&["a.b", "c"]) -> "a\.b.c"
//!   split_path("a\.b.c")     -> ["a.b", "c"]
//!
//! Paths are intentionally plain strings; the structured `Locator` in
//! `locator` builds its two-level addressing on top of these functions.

/// Separator used when none is supplied.
pub const DEFAULT_SEPARATOR: char = '.';

/// Escape character, independent of the chosen separator.
pub const ESCAPE: char = '\\';

/// Join segments with the default '.' separator.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    join_path_with(segments, DEFAULT_SEPARATOR)
}

/// Join segments with `separator`, escaping any '\' or literal separator
/// inside a segment. Equivalent to doubling every backslash first and then
/// prefixing every literal separator with one.
///
/// An empty slice and a single empty segment both produce "" (see
/// [`split_path_with`] for the resulting asymmetry).
pub fn join_path_with<S: AsRef<str>>(segments: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        for c in segment.as_ref().chars() {
            if c == ESCAPE || c == separator {
                out.push(ESCAPE);
            }
            out.push(c);
        }
    }
    out
}

/// Split a path on the default '.' separator.
pub fn split_path(path: &str) -> Vec<String> {
    split_path_with(path, DEFAULT_SEPARATOR)
}

/// Split `path` into unescaped segments in a single left-to-right scan.
///
/// '\' followed by '\' or the separator un-escapes to that character; '\'
/// followed by anything else is kept verbatim together with that character,
/// and a trailing '\' is kept as a literal. Interior empty segments are
/// preserved, but a trailing empty segment is dropped: splitting "" yields
/// no segments rather than one empty segment, the one input shape where
/// join and split are not inverses.
pub fn split_path_with(path: &str, separator: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            match chars.next() {
                Some(next) if next == ESCAPE || next == separator => current.push(next),
                Some(next) => {
                    current.push(ESCAPE);
                    current.push(next);
                }
                None => current.push(ESCAPE),
            }
        } else if c == separator {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_escapes_separator_inside_segment() {
        assert_eq!(join_path(&["a.b", "c"]), "a\\.b.c");
    }

    #[test]
    fn split_unescapes_separator() {
        assert_eq!(split_path("a\\.b.c"), vec!["a.b", "c"]);
    }

    #[test]
    fn backslash_round_trip() {
        assert_eq!(join_path(&["a\\b"]), "a\\\\b");
        assert_eq!(split_path("a\\\\b"), vec!["a\\b"]);
    }

    #[test]
    fn custom_separator() {
        assert_eq!(join_path_with(&["x/y", "z"], '/'), "x\\/y/z");
        assert_eq!(split_path_with("x\\/y/z", '/'), vec!["x/y", "z"]);
    }

    #[test]
    fn round_trip_mixed_segments() {
        let segments = ["plain", "dots.and.more", "back\\slash", ".\\both", "end\\"];
        let joined = join_path(&segments);
        assert_eq!(split_path(&joined), segments);
    }

    #[test]
    fn interior_empty_segment_round_trips() {
        assert_eq!(join_path(&["a", "", "b"]), "a..b");
        assert_eq!(split_path("a..b"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_empty_segment_is_dropped() {
        assert_eq!(split_path("a.b."), vec!["a", "b"]);
    }

    #[test]
    fn empty_path_yields_no_segments() {
        // Both the empty sequence and a lone empty segment encode to "",
        // and "" splits back to the empty sequence. Splitting is lossy for
        // exactly this input shape.
        assert_eq!(join_path::<&str>(&[]), "");
        assert_eq!(join_path(&[""]), "");
        assert!(split_path("").is_empty());
    }

    #[test]
    fn unrecognized_escape_passes_through() {
        assert_eq!(split_path("a\\xb.c"), vec!["a\\xb", "c"]);
    }

    #[test]
    fn trailing_escape_is_literal() {
        assert_eq!(split_path("ab\\"), vec!["ab\\"]);
    }
}
