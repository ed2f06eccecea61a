use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum WrapgenError {
	#[error(transparent)]
	#[diagnostic(code(wrapgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("extra indentation on line {line} of `{name}`")]
	#[diagnostic(
		code(wrapgen::malformed_indentation),
		help(
			"a line may indent at most one level past the previous line, and only after a block \
			 keyword or a scope-opening `ns` line"
		)
	)]
	MalformedIndentation { name: String, line: usize },

	#[error("unsupported platform: `{0}`")]
	#[diagnostic(
		code(wrapgen::unsupported_platform),
		help("supported platforms: windows, macos, linux")
	)]
	UnsupportedPlatform(String),

	#[error("failed to read spec file `{path}`: {reason}")]
	#[diagnostic(code(wrapgen::read_failed))]
	Read { path: String, reason: String },
}

pub type WrapgenResult<T> = Result<T, WrapgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
