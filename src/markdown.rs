//! Markdown output format: document header and per-page sections.
//!
//! The exact byte layout is a compatibility contract — downstream tooling
//! parses the `#` title, `Extracted from:` / `Total pages:` fields, and
//! `## Page N` headings. Changing heading levels or field order breaks it.

use std::io::{self, Write};

/// Write the document header: title, source filename, page count, separator.
pub fn write_header<W: Write>(
    w: &mut W,
    title: &str,
    source_name: &str,
    total_pages: usize,
) -> io::Result<()> {
    write!(w, "# {title}\n\n")?;
    write!(w, "Extracted from: {source_name}\n\n")?;
    write!(w, "Total pages: {total_pages}\n\n")?;
    write!(w, "---\n\n")
}

/// Write one page section: `## Page N` heading, trimmed recognised text,
/// blank-line separator.
pub fn write_page_section<W: Write>(w: &mut W, page_number: usize, text: &str) -> io::Result<()> {
    write!(w, "## Page {page_number}\n\n")?;
    w.write_all(text.trim().as_bytes())?;
    w.write_all(b"\n\n")
}
