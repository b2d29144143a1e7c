/// The concrete content surface: a markup string plus a selection.
///
/// Formatting commands are implemented by splicing tags around the
/// selection (inline styles) or around the block of lines containing it
/// (alignment, lists, block formats, indentation). The selection is kept
/// as a pair of char offsets so it can be mirrored directly from a text
/// widget's cursor state.
use std::ops::Range;
use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::Regex;

use rich_pad_mod_history::Snapshot;

use crate::command::{FormatCommand, ListStyle};
use crate::surface::{CommandExecutor, ContentSurface};

fn anchor_tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?a(\s[^>]*)?>").expect("valid anchor pattern"))
}

/// Accepts `#RRGGBB` color strings (the toolbar's color picker format).
fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Markup content with a char-offset selection.
#[derive(Debug, Clone)]
pub struct MarkupBuffer {
    text: String,
    /// Selection as char offsets, `start <= end`. Collapsed when equal.
    selection: Range<usize>,
}

impl Default for MarkupBuffer {
    fn default() -> Self {
        Self {
            text: String::new(),
            selection: 0..0,
        }
    }
}

impl MarkupBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: 0..0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for binding to a text widget. The selection is
    /// re-clamped the next time it is used.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Current selection as char offsets.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Sets the selection from (possibly unordered) char offsets.
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let limit = self.char_len();
        let start = a.min(b).min(limit);
        let end = a.max(b).min(limit);
        self.selection = start..end;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the given char offset (clamped to the end).
    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn char_at_byte(&self, byte_idx: usize) -> usize {
        self.text[..byte_idx].chars().count()
    }

    fn clamp_selection(&mut self) {
        let limit = self.char_len();
        let start = self.selection.start.min(limit);
        let end = self.selection.end.min(limit).max(start);
        self.selection = start..end;
    }

    /// Byte range of the block of full lines containing the selection.
    fn block_byte_range(&self) -> Range<usize> {
        let sel_start = self.byte_at(self.selection.start);
        let sel_end = self.byte_at(self.selection.end);
        let start = self.text[..sel_start]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.text[sel_end..]
            .find('\n')
            .map(|i| sel_end + i)
            .unwrap_or(self.text.len());
        start..end
    }

    /// Replaces a byte range and selects the replacement.
    fn replace_bytes(&mut self, range: Range<usize>, replacement: &str) {
        let start_char = self.char_at_byte(range.start);
        let replacement_chars = replacement.chars().count();
        self.text.replace_range(range, replacement);
        self.selection = start_char..start_char + replacement_chars;
    }

    /// Wraps the current selection in `open`/`close`, keeping the inner
    /// text selected. No-op on a collapsed selection.
    fn wrap_selection(&mut self, open: &str, close: &str) {
        if self.selection.is_empty() {
            return;
        }
        let start = self.byte_at(self.selection.start);
        let end = self.byte_at(self.selection.end);
        self.text.insert_str(end, close);
        self.text.insert_str(start, open);

        let shift = open.chars().count();
        self.selection = self.selection.start + shift..self.selection.end + shift;
    }

    /// Wraps the block of lines containing the selection in `open`/`close`.
    fn wrap_block(&mut self, open: &str, close: &str) {
        let range = self.block_byte_range();
        let inner = self.text[range.clone()].to_string();
        self.replace_bytes(range, &format!("{open}{inner}{close}"));
    }

    fn make_list(&mut self, style: ListStyle) {
        let range = self.block_byte_range();
        let region = self.text[range.clone()].to_string();
        let items: Vec<String> = region
            .split('\n')
            .map(|line| format!("<li>{line}</li>"))
            .collect();
        let tag = style.tag();
        let replacement = format!("<{tag}>\n{}\n</{tag}>", items.join("\n"));
        self.replace_bytes(range, &replacement);
    }

    /// Removes one enclosing blockquote from the selected block, if any.
    fn outdent_block(&mut self) {
        let range = self.block_byte_range();
        let region = self.text[range.clone()].to_string();
        let inner = region
            .strip_prefix("<blockquote>")
            .and_then(|rest| rest.strip_suffix("</blockquote>"));
        if let Some(inner) = inner {
            let inner = inner.to_string();
            self.replace_bytes(range, &inner);
        }
    }

    /// Strips anchor tags inside the selection. No-op when collapsed.
    fn unlink_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let start = self.byte_at(self.selection.start);
        let end = self.byte_at(self.selection.end);
        let region = self.text[start..end].to_string();
        let cleaned = anchor_tag_pattern().replace_all(&region, "").into_owned();
        if cleaned != region {
            self.replace_bytes(start..end, &cleaned);
        }
    }

    /// Replaces the selection with literal markup, collapsing the
    /// selection after it.
    fn insert_fragment(&mut self, fragment: &str) {
        let start = self.byte_at(self.selection.start);
        let end = self.byte_at(self.selection.end);
        let start_char = self.selection.start;
        self.text.replace_range(start..end, fragment);
        let after = start_char + fragment.chars().count();
        self.selection = after..after;
    }
}

impl ContentSurface for MarkupBuffer {
    fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.text.as_str())
    }

    fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.as_str().to_string();
        self.clamp_selection();
    }
}

impl CommandExecutor for MarkupBuffer {
    fn execute(&mut self, command: &FormatCommand) -> Result<()> {
        self.clamp_selection();
        match command {
            FormatCommand::Bold => self.wrap_selection("<b>", "</b>"),
            FormatCommand::Italic => self.wrap_selection("<i>", "</i>"),
            FormatCommand::Underline => self.wrap_selection("<u>", "</u>"),
            FormatCommand::Strikethrough => self.wrap_selection("<s>", "</s>"),
            FormatCommand::Align(alignment) => {
                let open = format!("<div style=\"text-align: {}\">", alignment.css());
                self.wrap_block(&open, "</div>");
            }
            FormatCommand::List(style) => self.make_list(*style),
            FormatCommand::Block(format) => {
                let tag = format.tag();
                self.wrap_block(&format!("<{tag}>"), &format!("</{tag}>"));
            }
            FormatCommand::FontSize(step) => {
                if crate::command::font_size_points(*step).is_none() {
                    bail!("font size step out of range: {step}");
                }
                self.wrap_selection(&format!("<font size=\"{step}\">"), "</font>");
            }
            FormatCommand::TextColor(color) => {
                if !is_valid_color(color) {
                    bail!("invalid color: {color}");
                }
                self.wrap_selection(&format!("<span style=\"color: {color}\">"), "</span>");
            }
            FormatCommand::Highlight(color) => {
                if !is_valid_color(color) {
                    bail!("invalid color: {color}");
                }
                self.wrap_selection(
                    &format!("<span style=\"background-color: {color}\">"),
                    "</span>",
                );
            }
            FormatCommand::Indent => self.wrap_block("<blockquote>", "</blockquote>"),
            FormatCommand::Outdent => self.outdent_block(),
            FormatCommand::Link(url) => {
                if url.trim().is_empty() {
                    bail!("link URL is empty");
                }
                self.wrap_selection(&format!("<a href=\"{url}\">"), "</a>");
            }
            FormatCommand::Unlink => self.unlink_selection(),
            FormatCommand::Image(url) => {
                if url.trim().is_empty() {
                    bail!("image URL is empty");
                }
                self.insert_fragment(&format!("<img src=\"{url}\">"));
            }
        }
        Ok(())
    }
}
