//! Tag extraction from PGN headers

use regex::Regex;
use tracing::trace;

/// Compiled pattern to look up a single PGN tag
///
/// Matches `[Name "value"]`, where `Name` must match exactly (case-sensitive) and is
/// separated from the opening quote by at least one whitespace character. The value
/// ends at the first `"]`.
///
/// Build it once if the same tag is looked up in many PGNs.
///
/// # Example
///
/// ```
/// # use fenpgn::pgn::TagPattern;
/// #
/// let elo = TagPattern::new("WhiteElo");
/// assert_eq!(elo.extract("[White \"Player1\"]\n[WhiteElo \"2400\"]"), Some("2400"));
/// assert_eq!(elo.extract("[BlackElo \"2200\"]"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TagPattern {
    tag: String,
    // `[` followed by the tag name, searched literally
    opening: String,
    value: Regex,
}

impl TagPattern {
    /// Creates a pattern for the tag `tag`
    ///
    /// `tag` is matched literally, so it may contain any characters and be of any length.
    pub fn new(tag: &str) -> TagPattern {
        TagPattern {
            tag: tag.to_string(),
            opening: format!("[{}", tag),
            // Cannot fail, the pattern is constant
            value: Regex::new(r#"^\s+"(.*?)"\]"#).unwrap(),
        }
    }

    /// Returns the name of the tag
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of the first occurrence of the tag, even if it's empty
    pub fn find<'a>(&self, pgn: &'a str) -> Option<&'a str> {
        let mut from = 0;
        while let Some(pos) = pgn[from..].find(&self.opening) {
            let start = from + pos;
            let rest = &pgn[start + self.opening.len()..];
            if let Some(caps) = self.value.captures(rest) {
                let value = caps.get(1)?.as_str();
                trace!(tag = %self.tag, value, "found PGN tag");
                return Some(value);
            }
            // Occurrences may overlap, so step over the opening bracket only
            from = start + 1;
        }
        None
    }

    /// Returns the value of the first occurrence of the tag
    ///
    /// Empty values are reported as `None`, same as missing tags. Use [`TagPattern::find`]
    /// to tell them apart.
    #[inline]
    pub fn extract<'a>(&self, pgn: &'a str) -> Option<&'a str> {
        self.find(pgn).filter(|v| !v.is_empty())
    }
}

/// Returns the value of tag `tag` in `pgn`, or `None` if it is missing or empty
///
/// See [`TagPattern`] for the exact matching rules.
pub fn extract_tag_value<'a>(pgn: &'a str, tag: &str) -> Option<&'a str> {
    TagPattern::new(tag).extract(pgn)
}

/// Returns the value of tag `tag` in `pgn`, or `None` if it is missing
///
/// Unlike [`extract_tag_value()`], returns `Some("")` for tags with empty value.
pub fn find_tag_value<'a>(pgn: &'a str, tag: &str) -> Option<&'a str> {
    TagPattern::new(tag).find(pgn)
}

/// Iterator over all the tags in a PGN
///
/// Created by [`AnyTag::tags()`].
pub struct Tags<'r, 'a> {
    inner: regex::CaptureMatches<'r, 'a>,
}

impl<'r, 'a> Iterator for Tags<'r, 'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, [name, value]) = self.inner.next()?.extract();
        Some((name, value))
    }
}

/// Compiled pattern matching any tag
#[derive(Debug, Clone)]
pub struct AnyTag(Regex);

impl AnyTag {
    /// Compiles the pattern
    pub fn new() -> AnyTag {
        // Cannot fail, the pattern is constant
        AnyTag(Regex::new(r#"\[([A-Za-z0-9_]+)\s+"(.*?)"\]"#).unwrap())
    }

    /// Iterates over `(name, value)` pairs of all the tags in `pgn`, in order
    ///
    /// # Example
    ///
    /// ```
    /// # use fenpgn::pgn::AnyTag;
    /// #
    /// let pgn = "[Event \"Casual Game\"]\n[Site \"Internet\"]\n\n1. e4 e5";
    /// let tags: Vec<_> = AnyTag::new().tags(pgn).collect();
    /// assert_eq!(tags, [("Event", "Casual Game"), ("Site", "Internet")]);
    /// ```
    pub fn tags<'r, 'a>(&'r self, pgn: &'a str) -> Tags<'r, 'a> {
        Tags {
            inner: self.0.captures_iter(pgn),
        }
    }
}

impl Default for AnyTag {
    fn default() -> AnyTag {
        AnyTag::new()
    }
}
