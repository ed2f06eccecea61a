//! Output text fragments for each statement form.
//!
//! Global and namespace statements carry the current indentation; preprocessor
//! directives (`#define`, `#include`, `#undef`) and the constants/functions
//! forms are always emitted at column zero.

use crate::line::spacing;

/// Default type for an exported constant when the spec line carries none.
const DEFAULT_CONSTANT_TYPE: &str = "constexpr auto";

/// `export using A = B;` for a two-token line, `export using ::A;` for a
/// single token (re-export from the global scope).
pub(crate) fn global_alias(depth: usize, stripped: &str) -> String {
	match stripped.split_once(' ') {
		Some((name, target)) => format!("{}export using {name} = {target};\n", spacing(depth)),
		None => format!("{}export using ::{stripped};\n", spacing(depth)),
	}
}

pub(crate) fn define(stripped: &str) -> String {
	format!("#define {stripped}\n")
}

pub(crate) fn include(stripped: &str) -> String {
	format!("#include <{stripped}>\n")
}

/// The module-export declaration emitted once when an `includes` block ends.
pub(crate) fn module_export(name: &str) -> String {
	format!("export module external.{name};\n")
}

/// Capture the macro's value in a temporary, undefine the macro, then export
/// a constant under the freed name. The explicit type applies only when the
/// line holds exactly one `:`.
pub(crate) fn constant(stripped: &str) -> String {
	let parts: Vec<&str> = stripped.split(':').collect();
	let name = parts[0];
	let ty = if parts.len() == 2 {
		parts[1]
	} else {
		DEFAULT_CONSTANT_TYPE
	};

	format!("{ty} tmp_{name} = {name};\n#undef {name}\nexport {ty} {name} = tmp_{name};\n")
}

/// An exported forwarding definition: `sig -> expr` becomes
/// `export sig { expr; }`.
pub(crate) fn function(stripped: &str) -> String {
	let (signature, body) = stripped.split_once("->").unwrap_or((stripped, ""));
	format!("export {} {{ {}; }}\n", signature.trim(), body.trim())
}

pub(crate) fn namespace_open(depth: usize, prefix: &str, name: &str) -> String {
	format!("{}{prefix}namespace {name} {{\n", spacing(depth))
}

/// A single-line namespace alias; opens no scope.
pub(crate) fn namespace_alias(depth: usize, prefix: &str, name: &str, target: &str) -> String {
	format!("{}{prefix}namespace {name} = {target};\n", spacing(depth))
}

pub(crate) fn namespace_close(depth: usize) -> String {
	format!("{}}}\n", spacing(depth))
}

/// A qualified re-export inside an open namespace scope.
pub(crate) fn namespace_using(depth: usize, path: &str, stripped: &str) -> String {
	format!("{}using {path}::{stripped};\n", spacing(depth))
}
