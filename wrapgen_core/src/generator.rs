//! The file driver: enumerates spec files, decides staleness against the
//! generation cache, runs the scanner over each stale file, and writes the
//! generated module sources.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::Platform;
use crate::WrapgenError;
use crate::WrapgenResult;
use crate::cache;
use crate::scanner::generate_module;

/// Directory of spec files shared by every platform.
const SHARED_DIR: &str = "common";

/// Extension of input spec files.
const SPEC_EXTENSION: &str = "txt";

/// Extension of generated module sources.
const OUTPUT_EXTENSION: &str = "mpp";

/// Options controlling a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
	/// Directory holding the spec collections: `common/` plus one directory
	/// per platform.
	pub spec_dir: PathBuf,
	/// Directory receiving the generated module sources. Created if absent.
	pub out_dir: PathBuf,
	/// Platform whose spec directory is scanned alongside `common/`.
	pub platform: Platform,
	/// Regenerate every file regardless of the cached timestamp.
	pub force: bool,
}

/// A single module regenerated during a run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
	/// Logical module name (the spec file's base name).
	pub name: String,
	/// The spec file the module was generated from.
	pub spec: PathBuf,
	/// The generated output file.
	pub output: PathBuf,
}

/// Result of a generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
	/// Modules regenerated this run, in processing order.
	pub generated: Vec<GeneratedFile>,
	/// Number of spec files skipped because they predate the cache timestamp.
	pub skipped: usize,
}

/// Run the generator over the shared and platform spec collections.
///
/// Files are processed in a stable order: the shared collection first, then
/// the platform collection, each sorted by path. The cache timestamp is only
/// advanced after every stale file has been regenerated, so a failed run
/// reconsiders the same files on the next invocation.
#[tracing::instrument(level = "debug", skip_all, fields(platform = %options.platform))]
pub fn generate_modules(options: &GenerateOptions) -> WrapgenResult<GenerateReport> {
	std::fs::create_dir_all(&options.out_dir)?;

	let last_build = if options.force {
		cache::NEVER_BUILT
	} else {
		cache::load(&options.out_dir)
	};

	let mut specs = collect_specs(&options.spec_dir.join(SHARED_DIR))?;
	specs.extend(collect_specs(
		&options.spec_dir.join(options.platform.dir_name()),
	)?);

	let mut report = GenerateReport::default();

	for spec in specs {
		let name = module_name(&spec);

		if modified_secs(&spec)? <= last_build {
			tracing::debug!(name = %name, "spec unchanged, skipping");
			report.skipped += 1;
			continue;
		}

		tracing::debug!(name = %name, spec = %spec.display(), "generating module");

		let source = std::fs::read_to_string(&spec).map_err(|error| WrapgenError::Read {
			path: spec.display().to_string(),
			reason: error.to_string(),
		})?;
		let generated = generate_module(&name, &source)?;

		let output = options
			.out_dir
			.join(format!("{name}.{OUTPUT_EXTENSION}"));
		write_atomic(&output, &generated)?;

		report.generated.push(GeneratedFile {
			name,
			spec,
			output,
		});
	}

	cache::save(&options.out_dir, cache::now_secs())?;

	Ok(report)
}

/// Spec files in `dir`, sorted by path. A missing directory yields an empty
/// collection: platforms without their own specs are valid.
fn collect_specs(dir: &Path) -> WrapgenResult<Vec<PathBuf>> {
	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
		Err(error) => return Err(error.into()),
	};

	let mut specs = Vec::new();

	for entry in entries {
		let path = entry?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == SPEC_EXTENSION) {
			specs.push(path);
		}
	}

	specs.sort();

	Ok(specs)
}

/// Modification time of `path` in seconds since the epoch.
fn modified_secs(path: &Path) -> WrapgenResult<f64> {
	let modified = std::fs::metadata(path)?.modified()?;
	Ok(cache::system_time_secs(modified))
}

/// Logical module name for a spec file: its base name without the extension.
fn module_name(path: &Path) -> String {
	path.file_stem()
		.map_or_else(String::new, |stem| stem.to_string_lossy().into_owned())
}

/// Write `contents` to `path` through a temporary file and a rename, so a
/// crashed run never leaves a half-written output behind.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
	let temp_path = path.with_extension(format!("tmp-{}", std::process::id()));

	std::fs::write(&temp_path, contents)?;

	if let Err(error) = std::fs::rename(&temp_path, path) {
		let _ = std::fs::remove_file(&temp_path);
		return Err(error);
	}

	Ok(())
}
