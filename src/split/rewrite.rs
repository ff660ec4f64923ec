//! Streaming rewrite that closes and reopens span chains at line breaks.
//!
//! The input is parsed once as a stream of markup events. Elements are
//! tracked on a stack, so when a text event carrying a line break is reached
//! the chain of enclosing `<span>` elements is already at hand, the
//! streaming equivalent of walking a text node's ancestors. Every break in
//! the text is replaced with the chain's closing tags, the original break
//! characters, and the chain's reopening tags (outermost first, preserving
//! nesting order). All other events are re-serialized verbatim, so a
//! document with no multi-line spans round-trips unchanged.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use super::error::SplitError;
use super::lines::find_line_break;

/// An element currently open on the parse stack.
struct OpenElement {
    /// True when the element is a styling `<span>`.
    is_span: bool,
    /// Literal `class` attribute value as written in the source. Empty when
    /// the attribute is absent.
    class: String,
}

/// Rewrite `html` so every span open at a line break is closed before the
/// break and reopened after it.
pub(super) fn close_spans_at_line_breaks(html: &str) -> Result<String, SplitError> {
    let mut reader = Reader::from_str(html);
    let mut writer = Writer::new(Vec::new());
    let mut open: Vec<OpenElement> = Vec::new();
    let mut rewritten = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                open.push(open_element(&e)?);
                write(&mut writer, Event::Start(e))?;
            }
            Ok(Event::End(e)) => {
                open.pop();
                write(&mut writer, Event::End(e))?;
            }
            Ok(Event::Text(e)) => {
                let text = std::str::from_utf8(e.as_ref())
                    .map_err(|err| SplitError::parse(format!("text is not UTF-8: {err}")))?;
                let chain = span_chain(&open);

                if !chain.is_empty() && find_line_break(text, 0).is_some() {
                    let spliced = splice_line_breaks(text, chain);
                    writer.get_mut().extend_from_slice(spliced.as_bytes());
                    rewritten += 1;
                } else {
                    write(&mut writer, Event::Text(e))?;
                }
            }
            Ok(Event::Eof) => break,
            // Empty elements, comments, CDATA, declarations pass through
            Ok(event) => write(&mut writer, event)?,
            Err(err) => {
                return Err(SplitError::parse(format!(
                    "error at position {}: {err}",
                    reader.error_position()
                )));
            }
        }
    }

    if rewritten > 0 {
        trace!(rewritten, "closed span chains at line breaks");
    }

    String::from_utf8(writer.into_inner())
        .map_err(|err| SplitError::parse(format!("rewritten markup is not UTF-8: {err}")))
}

/// Capture the tag kind and `class` attribute of an opening element.
fn open_element(e: &BytesStart<'_>) -> Result<OpenElement, SplitError> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())
        .map_err(|err| SplitError::parse(format!("invalid tag name: {err}")))?;
    let is_span = tag.eq_ignore_ascii_case("span");

    let mut class = String::new();
    if is_span {
        for attr in e.attributes() {
            let attr =
                attr.map_err(|err| SplitError::parse(format!("invalid attribute: {err}")))?;
            if attr.key.as_ref().eq_ignore_ascii_case(b"class") {
                class = std::str::from_utf8(&attr.value)
                    .map_err(|err| {
                        SplitError::parse(format!("invalid attribute value: {err}"))
                    })?
                    .to_string();
                break;
            }
        }
    }

    Ok(OpenElement { is_span, class })
}

/// The innermost contiguous run of open spans, outermost first.
///
/// The run stops at the first non-span ancestor: text nested inside, say, a
/// `<code>` element within a span is not wrapped by that outer span as far
/// as this transform is concerned.
fn span_chain(open: &[OpenElement]) -> &[OpenElement] {
    let mut start = open.len();
    while start > 0 && open[start - 1].is_span {
        start -= 1;
    }
    &open[start..]
}

/// Replace every line break in `text` with the chain's closing tags, the
/// original break characters, and the chain's reopening tags.
fn splice_line_breaks(text: &str, chain: &[OpenElement]) -> String {
    let closing = "</span>".repeat(chain.len());
    let mut reopening = String::new();
    for elem in chain {
        reopening.push_str(&format!("<span class=\"{}\">", elem.class));
    }

    let mut out = String::with_capacity(text.len() + closing.len() + reopening.len());
    let mut start = 0;
    while let Some((pos, len)) = find_line_break(text, start) {
        out.push_str(&text[start..pos]);
        out.push_str(&closing);
        out.push_str(&text[pos..pos + len]);
        out.push_str(&reopening);
        start = pos + len;
    }
    out.push_str(&text[start..]);
    out
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SplitError> {
    writer
        .write_event(event)
        .map_err(|err| SplitError::parse(format!("write error: {err}")))
}
