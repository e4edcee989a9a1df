//! Minimal XML writing for the project-file dialect.
//!
//! The writer produces the fixed formatting contract: two-space
//! indentation, single-linefeed line breaks, no declaration line, and a
//! newline after every emitted line (so a complete document ends with
//! exactly one trailing linefeed).

use std::borrow::Cow;

const INDENT: &str = "  ";

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a string for use as element text content.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Indentation-tracking element writer over a string buffer.
#[derive(Debug, Default)]
pub struct XmlWriter {
    buffer: String,
    depth: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an element and increase the indentation level.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.write_attrs(attrs);
        self.buffer.push_str(">\n");
        self.depth += 1;
    }

    /// Close the element opened at the current level.
    pub fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push_str(">\n");
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.write_attrs(attrs);
        self.buffer.push_str(" />\n");
    }

    /// Write a one-line element with text content. Empty text collapses to
    /// a self-closing element.
    pub fn leaf(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        if text.is_empty() {
            self.empty(name, attrs);
            return;
        }
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.write_attrs(attrs);
        self.buffer.push('>');
        self.buffer.push_str(&escape_text(text));
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push_str(">\n");
    }

    /// Write a comment. The text is passthrough and must not contain `--`.
    pub fn comment(&mut self, text: &str) {
        self.write_indent();
        self.buffer.push_str("<!-- ");
        self.buffer.push_str(text);
        self.buffer.push_str(" -->\n");
    }

    /// Consume the writer and return the document text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_attr(value));
            self.buffer.push('"');
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
    }
}
