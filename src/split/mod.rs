//! Line splitting for highlighted HTML fragments.
//!
//! Highlighter output nests styling spans around tokens that may themselves
//! contain embedded newlines, such as multi-line string literals or comments.
//! Consumers that render per line (line numbers, diff views) need each line
//! to be a self-contained, correctly nested fragment; a naive split on `\n`
//! would leave spans open across line boundaries.
//!
//! [`split_code_into_array`] rewrites the markup so that every span open at a
//! line break is closed before the break and reopened (with the same `class`
//! value) after it, then splits the result into lines:
//!
//! ```text
//! <span class="a">foo\nbar</span>
//!          │
//!          ▼
//! <span class="a">foo</span>
//! <span class="a">bar</span>
//! ```
//!
//! Parsing requires the default-on `dom` feature; without it the operation
//! fails with [`SplitError::Environment`].

mod error;
#[cfg(feature = "dom")]
mod lines;
#[cfg(feature = "dom")]
mod rewrite;

pub use error::SplitError;

/// Split highlighted HTML into an array of self-contained line fragments.
///
/// Every `<span>` open at a line break is closed at the end of the line and
/// reopened with an identical `class` attribute at the start of the next, so
/// each returned string is independently well-formed markup. Markup with no
/// line breaks inside any span comes back as a literal line split.
///
/// Empty or whitespace-only input yields an empty vector, distinguishing
/// "nothing to do" from a parse failure.
///
/// # Errors
///
/// [`SplitError::Parse`] when the input cannot be parsed as HTML, and
/// [`SplitError::Environment`] when the crate was built without the `dom`
/// feature. No partial result is ever returned.
///
/// # Example
/// ```
/// use linelight::split_code_into_array;
///
/// let lines = split_code_into_array("<span class=\"a\">foo\nbar</span>").unwrap();
/// assert_eq!(lines, ["<span class=\"a\">foo</span>", "<span class=\"a\">bar</span>"]);
/// ```
pub fn split_code_into_array(html: &str) -> Result<Vec<String>, SplitError> {
    #[cfg(not(feature = "dom"))]
    {
        let _ = html;
        Err(SplitError::environment(
            "markup parsing requires the 'dom' feature",
        ))
    }

    #[cfg(feature = "dom")]
    {
        if html.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rewritten = rewrite::close_spans_at_line_breaks(html)?;
        Ok(lines::split_line_breaks(&rewritten)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}
