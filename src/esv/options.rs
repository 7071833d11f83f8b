//! Formatting parameters understood by the ESV text endpoint.
//!
//! Every field is optional. `None` means the parameter is not sent and the
//! API default applies, so [`PassageOptions::MINIMAL`] yields a query with
//! nothing but `q`.

/// How the API indents paragraphs and poetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUsing {
    Space,
    #[cfg_attr(not(test), allow(dead_code))]
    Tab,
}

impl IndentUsing {
    /// Wire value for the `indent-using` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tab => "tab",
        }
    }
}

/// Rendering options sent alongside the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassageOptions {
    pub include_passage_references: Option<bool>,
    pub include_verse_numbers: Option<bool>,
    pub include_first_verse_numbers: Option<bool>,
    pub include_footnotes: Option<bool>,
    pub include_footnote_body: Option<bool>,
    pub include_headings: Option<bool>,
    pub include_short_copyright: Option<bool>,
    pub include_passage_horizontal_lines: Option<bool>,
    pub include_heading_horizontal_lines: Option<bool>,
    pub horizontal_line_length: Option<u32>,
    pub include_selahs: Option<bool>,
    pub indent_using: Option<IndentUsing>,
    pub indent_paragraphs: Option<u32>,
    pub indent_poetry: Option<bool>,
    pub indent_poetry_lines: Option<u32>,
    pub indent_declares: Option<u32>,
    pub indent_psalm_doxology: Option<u32>,
    /// `0` disables wrapping.
    pub line_length: Option<u32>,
}

impl PassageOptions {
    /// Send only the reference.
    pub const MINIMAL: Self = Self {
        include_passage_references: None,
        include_verse_numbers: None,
        include_first_verse_numbers: None,
        include_footnotes: None,
        include_footnote_body: None,
        include_headings: None,
        include_short_copyright: None,
        include_passage_horizontal_lines: None,
        include_heading_horizontal_lines: None,
        horizontal_line_length: None,
        include_selahs: None,
        indent_using: None,
        indent_paragraphs: None,
        indent_poetry: None,
        indent_poetry_lines: None,
        indent_declares: None,
        indent_psalm_doxology: None,
        line_length: None,
    };

    /// Plain reading layout: no numbers, notes, headings or rules, unwrapped lines.
    #[cfg_attr(not(feature = "reader-format"), allow(dead_code))]
    pub const READER: Self = Self {
        include_passage_references: Some(false),
        include_verse_numbers: Some(false),
        include_first_verse_numbers: Some(false),
        include_footnotes: Some(false),
        include_footnote_body: Some(false),
        include_headings: Some(false),
        include_short_copyright: Some(false),
        include_passage_horizontal_lines: Some(false),
        include_heading_horizontal_lines: Some(false),
        horizontal_line_length: Some(55),
        include_selahs: Some(true),
        indent_using: Some(IndentUsing::Space),
        indent_paragraphs: Some(2),
        indent_poetry: Some(true),
        indent_poetry_lines: Some(4),
        indent_declares: Some(40),
        indent_psalm_doxology: Some(30),
        line_length: Some(0),
    };

    /// Key/value pairs for every option that is set, in wire order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let flags = [
            ("include-passage-references", self.include_passage_references.map(bool_param)),
            ("include-verse-numbers", self.include_verse_numbers.map(bool_param)),
            ("include-first-verse-numbers", self.include_first_verse_numbers.map(bool_param)),
            ("include-footnotes", self.include_footnotes.map(bool_param)),
            ("include-footnote-body", self.include_footnote_body.map(bool_param)),
            ("include-headings", self.include_headings.map(bool_param)),
            ("include-short-copyright", self.include_short_copyright.map(bool_param)),
            (
                "include-passage-horizontal-lines",
                self.include_passage_horizontal_lines.map(bool_param),
            ),
            (
                "include-heading-horizontal-lines",
                self.include_heading_horizontal_lines.map(bool_param),
            ),
            ("horizontal-line-length", self.horizontal_line_length.map(|n| n.to_string())),
            ("include-selahs", self.include_selahs.map(bool_param)),
            ("indent-using", self.indent_using.map(|i| i.as_str().to_owned())),
            ("indent-paragraphs", self.indent_paragraphs.map(|n| n.to_string())),
            ("indent-poetry", self.indent_poetry.map(bool_param)),
            ("indent-poetry-lines", self.indent_poetry_lines.map(|n| n.to_string())),
            ("indent-declares", self.indent_declares.map(|n| n.to_string())),
            ("indent-psalm-doxology", self.indent_psalm_doxology.map(|n| n.to_string())),
            ("line-length", self.line_length.map(|n| n.to_string())),
        ];

        flags
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }
}

fn bool_param(b: bool) -> String {
    b.to_string()
}

/// Options compiled into this binary. The `reader-format` feature selects
/// [`PassageOptions::READER`].
#[cfg(feature = "reader-format")]
pub const BUILD_OPTIONS: PassageOptions = PassageOptions::READER;

/// Options compiled into this binary. The `reader-format` feature selects
/// [`PassageOptions::READER`].
#[cfg(not(feature = "reader-format"))]
pub const BUILD_OPTIONS: PassageOptions = PassageOptions::MINIMAL;
