//! Line preprocessing: comment truncation, blank elision, and indentation
//! measurement.

/// Width of one indentation level, in whitespace characters.
pub(crate) const INDENT_WIDTH: usize = 4;

/// Marker truncating the remainder of a line.
const COMMENT_MARKER: &str = "//";

/// A preprocessed line of spec text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
	/// The line with its comment removed but indentation intact.
	pub raw: &'a str,
	/// The line with its comment and leading indentation removed.
	pub unindented: &'a str,
	/// The line with its comment and surrounding whitespace removed.
	pub stripped: &'a str,
	/// Count of leading whitespace characters.
	pub leading: usize,
}

/// Preprocess one raw line. Returns `None` for lines that are blank after
/// comment truncation; such lines are skipped entirely and must not affect
/// parser state.
pub(crate) fn preprocess(line: &str) -> Option<SourceLine<'_>> {
	let raw = line
		.find(COMMENT_MARKER)
		.map_or(line, |index| &line[..index]);
	let unindented = raw.trim_start();
	let stripped = unindented.trim_end();

	if stripped.is_empty() {
		return None;
	}

	Some(SourceLine {
		raw,
		unindented,
		stripped,
		leading: raw.len() - unindented.len(),
	})
}

/// Leading spacing for statements emitted at `depth`.
pub(crate) fn spacing(depth: usize) -> String {
	" ".repeat(depth * INDENT_WIDTH)
}
