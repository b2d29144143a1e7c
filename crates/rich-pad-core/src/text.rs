/// Conversions between plain text and markup, plus document statistics.
use std::sync::OnceLock;

use regex::Regex;

fn line_break_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid br pattern"))
}

fn block_close_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)</(p|div|h[1-6]|li|blockquote|pre|ul|ol)>").expect("valid block pattern")
    })
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Escapes text for embedding in markup.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Converts plain text to markup: paragraphs from blank lines, line
/// breaks from single newlines. Empty input stays empty.
pub fn plain_to_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let body = escape_markup(text)
        .replace("\n\n", "</p><p>")
        .replace('\n', "<br>");
    format!("<p>{body}</p>")
}

/// Extracts plain text from markup: breaks and block closers become
/// newlines, remaining tags are stripped, entities are unescaped.
pub fn markup_to_plain(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let with_breaks = line_break_pattern().replace_all(markup, "\n");
    let with_blocks = block_close_pattern().replace_all(&with_breaks, "\n");
    let stripped = tag_pattern().replace_all(&with_blocks, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim_end_matches('\n')
        .to_string()
}

/// Character and word counts for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub characters: usize,
    pub words: usize,
}

/// Computes stats over the plain text extracted from markup.
pub fn stats_for(markup: &str) -> DocumentStats {
    let plain = markup_to_plain(markup);
    DocumentStats {
        characters: plain.chars().count(),
        words: plain.split_whitespace().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_plain_to_markup_empty() {
        assert_eq!(plain_to_markup(""), "");
    }

    #[test]
    fn test_plain_to_markup_single_paragraph() {
        assert_eq!(plain_to_markup("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_plain_to_markup_breaks_and_paragraphs() {
        assert_eq!(plain_to_markup("a\nb"), "<p>a<br>b</p>");
        assert_eq!(plain_to_markup("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_plain_to_markup_escapes() {
        assert_eq!(plain_to_markup("1 < 2"), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn test_markup_to_plain_strips_tags() {
        assert_eq!(markup_to_plain("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn test_markup_to_plain_breaks() {
        assert_eq!(markup_to_plain("a<br>b<BR/>c"), "a\nb\nc");
        assert_eq!(markup_to_plain("<p>a</p><p>b</p>"), "a\nb");
    }

    #[test]
    fn test_markup_to_plain_entities() {
        assert_eq!(markup_to_plain("1 &lt; 2 &amp;&amp; 3 &gt; 2"), "1 < 2 && 3 > 2");
        assert_eq!(markup_to_plain("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_line_breaks_survive_markup_round_trip() {
        let original = "first line\nsecond line";
        assert_eq!(markup_to_plain(&plain_to_markup(original)), original);
    }

    #[test]
    fn test_paragraph_boundary_extracts_as_newline() {
        // Extraction is lossy: a paragraph break comes back as one newline.
        let markup = plain_to_markup("one\n\ntwo");
        assert_eq!(markup, "<p>one</p><p>two</p>");
        assert_eq!(markup_to_plain(&markup), "one\ntwo");
    }

    #[test]
    fn test_stats_counts_plain_text() {
        let stats = stats_for("<p>hello <b>rich</b> world</p>");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, "hello rich world".chars().count());
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(stats_for(""), DocumentStats::default());
        // Markup-only content has no words.
        assert_eq!(stats_for("<p></p>").words, 0);
    }
}
