use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use wrapgen_core::Platform;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate C++ module wrappers for external symbols from declarative spec files.",
	long_about = "wrapgen converts compact, indentation-structured spec files describing \
	              re-exports of external symbols — macros, includes, constants, functions, \
	              namespaces — into C++ module wrapper sources for a module-based \
	              build.\n\nSpec files live in a `common/` directory shared by every platform \
	              plus one directory per platform (`windows/`, `macos/`, `linux/`). Files \
	              unchanged since the last successful run are skipped.\n\nQuick start:\n  \
	              wrapgen generated            Regenerate stale modules into generated/\n  \
	              wrapgen generated --force    Regenerate everything\n  wrapgen generated \
	              --format json  Machine-readable summary"
)]
pub struct WrapgenCli {
	/// Directory receiving the generated module sources. Created if absent.
	pub out_dir: PathBuf,

	/// Directory holding the spec collections (`common/` plus one directory
	/// per platform).
	#[arg(long, short, default_value = ".")]
	pub spec_dir: PathBuf,

	/// Target platform. Detected from the running executable when omitted.
	#[arg(long)]
	pub platform: Option<Platform>,

	/// Regenerate every module regardless of the cached timestamp.
	#[arg(long, default_value_t = false)]
	pub force: bool,

	/// Output format for the generation summary.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable progress lines and a completion message.
	Text,
	/// JSON summary for programmatic consumption: the regenerated modules
	/// with their spec and output paths, and the skipped-file count.
	Json,
}
