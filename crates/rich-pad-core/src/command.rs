/// The typed formatting command model.
///
/// Commands are dispatched as a tagged enum; the string command names and
/// optional string arguments of the underlying platform vocabulary exist
/// only at the boundary (`name()` / `argument()` / `parse()`).

/// Horizontal alignment of a block of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// List style for list insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bulleted,
    Numbered,
}

impl ListStyle {
    /// Container tag: `ul` or `ol`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bulleted => "ul",
            Self::Numbered => "ol",
        }
    }
}

/// Block-level format applied to the selected paragraph(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Quote,
    Code,
}

impl BlockFormat {
    /// The wrapping tag for this block format.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Heading4 => "h4",
            Self::Heading5 => "h5",
            Self::Heading6 => "h6",
            Self::Quote => "blockquote",
            Self::Code => "pre",
        }
    }

    /// Parses a block tag name (as passed to the `formatBlock` command).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(Self::Paragraph),
            "h1" => Some(Self::Heading1),
            "h2" => Some(Self::Heading2),
            "h3" => Some(Self::Heading3),
            "h4" => Some(Self::Heading4),
            "h5" => Some(Self::Heading5),
            "h6" => Some(Self::Heading6),
            "blockquote" => Some(Self::Quote),
            "pre" => Some(Self::Code),
            _ => None,
        }
    }

    /// Human-readable label for selection UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paragraph => "Normal Text",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::Heading4 => "Heading 4",
            Self::Heading5 => "Heading 5",
            Self::Heading6 => "Heading 6",
            Self::Quote => "Quote",
            Self::Code => "Code Block",
        }
    }
}

/// Legacy 1–7 font size scale and its point values.
pub const FONT_SIZE_POINTS: [u8; 7] = [8, 10, 12, 14, 18, 24, 36];

/// Point size for a 1–7 font size step, or `None` out of range.
pub fn font_size_points(step: u8) -> Option<u8> {
    if (1..=7).contains(&step) {
        Some(FONT_SIZE_POINTS[(step - 1) as usize])
    } else {
        None
    }
}

/// A formatting operation applied to the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Align(Alignment),
    List(ListStyle),
    Block(BlockFormat),
    /// Font size step on the legacy 1–7 scale.
    FontSize(u8),
    /// Foreground color as a `#RRGGBB` string.
    TextColor(String),
    /// Background highlight color as a `#RRGGBB` string.
    Highlight(String),
    Indent,
    Outdent,
    /// Wrap the selection in a link to the given URL.
    Link(String),
    /// Remove links inside the selection.
    Unlink,
    /// Replace the selection with an image reference.
    Image(String),
}

impl FormatCommand {
    /// The platform command name this variant maps to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikeThrough",
            Self::Align(Alignment::Left) => "justifyLeft",
            Self::Align(Alignment::Center) => "justifyCenter",
            Self::Align(Alignment::Right) => "justifyRight",
            Self::Align(Alignment::Justify) => "justifyFull",
            Self::List(ListStyle::Bulleted) => "insertUnorderedList",
            Self::List(ListStyle::Numbered) => "insertOrderedList",
            Self::Block(_) => "formatBlock",
            Self::FontSize(_) => "fontSize",
            Self::TextColor(_) => "foreColor",
            Self::Highlight(_) => "hiliteColor",
            Self::Indent => "indent",
            Self::Outdent => "outdent",
            Self::Link(_) => "createLink",
            Self::Unlink => "unlink",
            Self::Image(_) => "insertImage",
        }
    }

    /// The string argument carried alongside the command name, if any.
    pub fn argument(&self) -> Option<String> {
        match self {
            Self::Block(format) => Some(format.tag().to_string()),
            Self::FontSize(step) => Some(step.to_string()),
            Self::TextColor(color) | Self::Highlight(color) => Some(color.clone()),
            Self::Link(url) | Self::Image(url) => Some(url.clone()),
            _ => None,
        }
    }

    /// Maps a command name and optional argument back into the enum.
    ///
    /// Returns `None` for unknown names, missing required arguments, or
    /// arguments outside their domain (unknown block tag, font step out
    /// of 1–7).
    pub fn parse(name: &str, argument: Option<&str>) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "underline" => Some(Self::Underline),
            "strikeThrough" => Some(Self::Strikethrough),
            "justifyLeft" => Some(Self::Align(Alignment::Left)),
            "justifyCenter" => Some(Self::Align(Alignment::Center)),
            "justifyRight" => Some(Self::Align(Alignment::Right)),
            "justifyFull" => Some(Self::Align(Alignment::Justify)),
            "insertUnorderedList" => Some(Self::List(ListStyle::Bulleted)),
            "insertOrderedList" => Some(Self::List(ListStyle::Numbered)),
            "formatBlock" => BlockFormat::from_tag(argument?).map(Self::Block),
            "fontSize" => {
                let step: u8 = argument?.parse().ok()?;
                font_size_points(step)?;
                Some(Self::FontSize(step))
            }
            "foreColor" => Some(Self::TextColor(argument?.to_string())),
            "hiliteColor" => Some(Self::Highlight(argument?.to_string())),
            "indent" => Some(Self::Indent),
            "outdent" => Some(Self::Outdent),
            "createLink" => Some(Self::Link(argument?.to_string())),
            "unlink" => Some(Self::Unlink),
            "insertImage" => Some(Self::Image(argument?.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        let commands = [
            FormatCommand::Bold,
            FormatCommand::Italic,
            FormatCommand::Underline,
            FormatCommand::Strikethrough,
            FormatCommand::Align(Alignment::Center),
            FormatCommand::Align(Alignment::Justify),
            FormatCommand::List(ListStyle::Bulleted),
            FormatCommand::List(ListStyle::Numbered),
            FormatCommand::Block(BlockFormat::Heading2),
            FormatCommand::FontSize(3),
            FormatCommand::TextColor("#FF0000".to_string()),
            FormatCommand::Highlight("#FFFF99".to_string()),
            FormatCommand::Indent,
            FormatCommand::Outdent,
            FormatCommand::Link("https://example.com".to_string()),
            FormatCommand::Unlink,
            FormatCommand::Image("https://example.com/a.png".to_string()),
        ];
        for command in commands {
            let name = command.name();
            let argument = command.argument();
            let parsed = FormatCommand::parse(name, argument.as_deref()).unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!(FormatCommand::parse("selectAll", None).is_none());
        assert!(FormatCommand::parse("", None).is_none());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(FormatCommand::parse("formatBlock", None).is_none());
        assert!(FormatCommand::parse("createLink", None).is_none());
        assert!(FormatCommand::parse("foreColor", None).is_none());
    }

    #[test]
    fn test_parse_bad_arguments() {
        assert!(FormatCommand::parse("formatBlock", Some("table")).is_none());
        assert!(FormatCommand::parse("fontSize", Some("0")).is_none());
        assert!(FormatCommand::parse("fontSize", Some("8")).is_none());
        assert!(FormatCommand::parse("fontSize", Some("big")).is_none());
    }

    #[test]
    fn test_font_size_points() {
        assert_eq!(font_size_points(1), Some(8));
        assert_eq!(font_size_points(3), Some(12));
        assert_eq!(font_size_points(7), Some(36));
        assert_eq!(font_size_points(0), None);
        assert_eq!(font_size_points(8), None);
    }

    #[test]
    fn test_block_format_tags() {
        assert_eq!(BlockFormat::Quote.tag(), "blockquote");
        assert_eq!(BlockFormat::from_tag("pre"), Some(BlockFormat::Code));
        assert_eq!(BlockFormat::from_tag("h7"), None);
    }
}
