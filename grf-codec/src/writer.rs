//! Forward-only tree writer used to emit documents.
//!
//! [`TreeWriter`] is the sink the section builders write into. Elements are
//! opened and closed in strict LIFO order; attributes may only follow the
//! start of an element. [`XmlTreeWriter`] renders the tree as indented XML.

use std::io::Write;

use crate::error::WriteError;

/// A streaming, well-nested tree sink.
pub trait TreeWriter {
    /// Open a child of the current element.
    fn start_element(&mut self, name: &str) -> Result<(), WriteError>;

    /// Add an attribute to the element just opened.
    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError>;

    /// Append text content to the current element.
    fn text(&mut self, value: &str) -> Result<(), WriteError>;

    /// Close the current element.
    fn end_element(&mut self) -> Result<(), WriteError>;

    /// Write `<name>value</name>`.
    fn text_element(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.start_element(name)?;
        self.text(value)?;
        self.end_element()
    }

    /// Write an empty element carrying a single `value` attribute.
    fn value_element(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.start_element(name)?;
        self.attribute("value", value)?;
        self.end_element()
    }
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "  ";

#[derive(Debug)]
struct OpenElement {
    name: String,
    has_children: bool,
}

/// [`TreeWriter`] producing indented UTF-8 XML.
///
/// Elements without content are self-closed. Text-only elements stay on one
/// line.
///
/// # Examples
/// ```
/// use grf_codec::{TreeWriter, XmlTreeWriter};
///
/// # fn main() -> Result<(), grf_codec::WriteError> {
/// let mut writer = XmlTreeWriter::new(Vec::new());
/// writer.start_element("GRFDOC")?;
/// writer.attribute("version", "1.1")?;
/// writer.text_element("TITLE", "Fish & Chips")?;
/// writer.end_element()?;
/// let xml = String::from_utf8(writer.finish()?).expect("utf-8");
/// assert!(xml.contains("<TITLE>Fish &amp; Chips</TITLE>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct XmlTreeWriter<W: Write> {
    inner: W,
    stack: Vec<OpenElement>,
    start_tag_open: bool,
    declared: bool,
}

impl<W: Write> XmlTreeWriter<W> {
    /// Wrap a byte sink.
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            stack: Vec::new(),
            start_tag_open: false,
            declared: false,
        }
    }

    /// Check that every element was closed, flush and return the sink.
    pub fn finish(mut self) -> Result<W, WriteError> {
        if let Some(open) = self.stack.last() {
            return Err(WriteError::Unclosed {
                name: open.name.clone(),
            });
        }
        if self.declared {
            self.inner.write_all(b"\n")?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn close_start_tag(&mut self) -> Result<(), WriteError> {
        if self.start_tag_open {
            self.inner.write_all(b">")?;
            self.start_tag_open = false;
        }
        Ok(())
    }

    fn newline_and_indent(&mut self, depth: usize) -> Result<(), WriteError> {
        self.inner.write_all(b"\n")?;
        for _ in 0..depth {
            self.inner.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> TreeWriter for XmlTreeWriter<W> {
    fn start_element(&mut self, name: &str) -> Result<(), WriteError> {
        if !self.declared {
            self.inner.write_all(XML_DECLARATION.as_bytes())?;
            self.declared = true;
        }
        self.close_start_tag()?;
        if let Some(parent) = self.stack.last_mut() {
            parent.has_children = true;
        }
        self.newline_and_indent(self.stack.len())?;
        write!(self.inner, "<{name}")?;
        self.stack.push(OpenElement {
            name: name.to_owned(),
            has_children: false,
        });
        self.start_tag_open = true;
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        if !self.start_tag_open {
            return Err(WriteError::AttributeOutsideStartTag {
                name: name.to_owned(),
            });
        }
        write!(self.inner, " {name}=\"{}\"", xml_escape(value))?;
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<(), WriteError> {
        self.close_start_tag()?;
        self.inner.write_all(xml_escape(value).as_bytes())?;
        Ok(())
    }

    fn end_element(&mut self) -> Result<(), WriteError> {
        let element = self.stack.pop().ok_or(WriteError::UnbalancedEnd)?;
        if self.start_tag_open {
            self.inner.write_all(b"/>")?;
            self.start_tag_open = false;
            return Ok(());
        }
        if element.has_children {
            self.newline_and_indent(self.stack.len())?;
        }
        write!(self.inner, "</{}>", element.name)?;
        Ok(())
    }
}

/// Escape the five XML special characters and drop characters XML 1.0
/// cannot represent.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other if is_xml_char(other) => out.push(other),
            _ => {}
        }
    }
    out
}

/// Whether `ch` is in the XML 1.0 `Char` production.
const fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}
