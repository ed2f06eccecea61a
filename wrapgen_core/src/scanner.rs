//! The indentation-driven scanner that turns one spec file into module
//! wrapper source.
//!
//! The scanner walks the file line by line, tracking the active block kind,
//! the current indentation depth, and the stack of open namespace scopes.
//! Block keywords switch the kind governing subsequent content lines; dedents
//! close scopes before the dedenting line itself is processed.

use derive_more::Deref;
use derive_more::DerefMut;

use crate::WrapgenError;
use crate::WrapgenResult;
use crate::emit;
use crate::line::INDENT_WIDTH;
use crate::line::preprocess;

/// The semantic block currently governing content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
	/// Top-level aliases (`export using`).
	Global,
	/// Preprocessor definitions.
	Define,
	/// System includes, closed by a module-export declaration.
	Include,
	/// Macro-to-constant conversions.
	Constants,
	/// Forwarding function definitions.
	Functions,
	/// Namespace scopes and qualified re-exports.
	Namespace,
}

/// Stack of currently open namespace names, outermost first. Its length
/// always equals the nesting depth attributable to namespace scopes.
#[derive(Debug, Default, Deref, DerefMut)]
struct NamespaceStack(Vec<String>);

impl NamespaceStack {
	/// The open scopes joined with the scope-resolution separator.
	fn qualified(&self) -> String {
		self.join("::")
	}
}

/// Per-file parse state. Created fresh for each spec file and discarded once
/// the file's output is produced.
struct Scanner<'a> {
	/// Logical module name, derived from the spec file's base name.
	name: &'a str,
	/// The block kind governing content lines at the current depth.
	block: Block,
	/// Current indentation depth in fixed-width units.
	depth: usize,
	/// Whether the next line may nest one level deeper. True only immediately
	/// after a block keyword or a scope-opening namespace line.
	can_indent: bool,
	/// Currently open namespace scopes.
	namespaces: NamespaceStack,
	/// Accumulated output text.
	out: String,
}

/// Generate module wrapper source for a single spec file.
///
/// `name` is the logical module name (the spec file's base name) and `source`
/// is the full spec text. The output always starts with the `module;`
/// preamble. The scan is pure: the result depends on nothing but the
/// arguments.
pub fn generate_module(name: &str, source: &str) -> WrapgenResult<String> {
	let mut scanner = Scanner::new(name);

	for (index, raw) in source.lines().enumerate() {
		scanner.scan_line(index + 1, raw)?;
	}

	Ok(scanner.finish())
}

impl<'a> Scanner<'a> {
	fn new(name: &'a str) -> Self {
		Self {
			name,
			block: Block::Global,
			depth: 0,
			can_indent: false,
			namespaces: NamespaceStack::default(),
			out: String::from("module;\n"),
		}
	}

	/// Process one raw source line. `number` is 1-based and counts every
	/// line, including blanks and comments.
	fn scan_line(&mut self, number: usize, raw: &str) -> WrapgenResult<()> {
		let Some(line) = preprocess(raw) else {
			return Ok(());
		};

		let new_depth = line.leading / INDENT_WIDTH;
		self.validate_indent(number, new_depth)?;

		if new_depth < self.depth {
			self.close_scopes(new_depth);
		}

		self.depth = new_depth;
		self.can_indent = true;

		if let Some(block) = keyword_block(line.raw) {
			self.block = block;
		} else if line.unindented.starts_with("ns ") || line.unindented.starts_with("ns:inline ") {
			self.block = Block::Namespace;
			self.namespace_directive(line.stripped);
		} else {
			// Content lines never open new scopes.
			self.can_indent = false;
			self.emit_statement(line.stripped);
		}

		Ok(())
	}

	/// Reject depth increases of more than one level, and any increase when
	/// the previous line did not open a scope.
	fn validate_indent(&self, number: usize, new_depth: usize) -> WrapgenResult<()> {
		let excess = new_depth > self.depth + 1;
		let forbidden = new_depth > self.depth && !self.can_indent;

		if excess || forbidden {
			return Err(WrapgenError::MalformedIndentation {
				name: self.name.to_string(),
				line: number,
			});
		}

		Ok(())
	}

	/// Close the scopes that end when depth drops to `target`, before the
	/// dedenting line's own content is processed.
	fn close_scopes(&mut self, target: usize) {
		match self.block {
			Block::Include => {
				self.out.push_str(&emit::module_export(self.name));
			}
			Block::Namespace => {
				self.unwind_namespaces(target);
			}
			_ => {}
		}

		if target == 0 {
			self.block = Block::Global;
		}
	}

	/// Emit one closing brace per level between the current depth and
	/// `target`, popping one namespace name per closed level.
	fn unwind_namespaces(&mut self, target: usize) {
		for level in (target..self.depth).rev() {
			self.namespaces.pop();
			self.out.push_str(&emit::namespace_close(level));
		}
	}

	/// Handle an `ns` / `ns:inline` line: open a scope, or emit a single-line
	/// alias when a target token is present.
	fn namespace_directive(&mut self, stripped: &str) {
		let parts: Vec<&str> = stripped.split_whitespace().collect();

		let prefix = if parts[0] == "ns:inline" {
			"inline "
		} else if self.depth == 0 {
			"export "
		} else {
			""
		};

		let Some(name) = parts.get(1) else {
			// A namespace keyword with no name binds nothing.
			self.can_indent = false;
			return;
		};

		if let Some(target) = parts.get(2) {
			self.can_indent = false;
			self.out
				.push_str(&emit::namespace_alias(self.depth, prefix, name, target));
		} else {
			self.namespaces.push((*name).to_string());
			self.out
				.push_str(&emit::namespace_open(self.depth, prefix, name));
		}
	}

	/// Emit the output fragment for a content line under the active block.
	fn emit_statement(&mut self, stripped: &str) {
		let statement = match self.block {
			Block::Global => emit::global_alias(self.depth, stripped),
			Block::Define => emit::define(stripped),
			Block::Include => emit::include(stripped),
			Block::Constants => emit::constant(stripped),
			Block::Functions => emit::function(stripped),
			Block::Namespace => {
				emit::namespace_using(self.depth, &self.namespaces.qualified(), stripped)
			}
		};

		self.out.push_str(&statement);
	}

	/// Unwind any namespace scopes still open at end of file and return the
	/// accumulated output.
	fn finish(mut self) -> String {
		if self.depth > 0 && self.block == Block::Namespace {
			self.unwind_namespaces(0);
		}

		self.out
	}
}

/// Block keywords are literal prefixes of the indentation-intact line, so
/// they are only ever recognized on unindented lines.
fn keyword_block(raw: &str) -> Option<Block> {
	if raw.starts_with("defines") {
		Some(Block::Define)
	} else if raw.starts_with("includes") {
		Some(Block::Include)
	} else if raw.starts_with("constants") {
		Some(Block::Constants)
	} else if raw.starts_with("functions") {
		Some(Block::Functions)
	} else {
		None
	}
}
