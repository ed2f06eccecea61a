//! The persisted timestamp marking the last successful generation run.
//!
//! The cache is a single textual floating-point number of seconds since the
//! Unix epoch, stored inside the output directory. It is read once before
//! any file is processed and rewritten once after all files succeed, so a
//! failed run leaves the previous timestamp in place.

use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::WrapgenResult;
use crate::generator::write_atomic;

const CACHE_FILE_NAME: &str = "lastbuild.txt";

/// Sentinel older than every file modification time, used when no cache
/// exists yet.
pub(crate) const NEVER_BUILT: f64 = -1.0;

pub(crate) fn cache_path(out_dir: &Path) -> PathBuf {
	out_dir.join(CACHE_FILE_NAME)
}

/// Load the last generation time in seconds since the epoch. A missing or
/// unparseable cache reads as [`NEVER_BUILT`] so every file is considered
/// stale.
pub(crate) fn load(out_dir: &Path) -> f64 {
	std::fs::read_to_string(cache_path(out_dir))
		.ok()
		.and_then(|text| text.trim().parse().ok())
		.unwrap_or(NEVER_BUILT)
}

/// Persist `timestamp` as the new last generation time.
pub(crate) fn save(out_dir: &Path, timestamp: f64) -> WrapgenResult<()> {
	write_atomic(&cache_path(out_dir), &timestamp.to_string())?;
	Ok(())
}

/// Seconds since the epoch for a filesystem timestamp.
pub(crate) fn system_time_secs(time: SystemTime) -> f64 {
	time.duration_since(UNIX_EPOCH)
		.map_or(0.0, |duration| duration.as_secs_f64())
}

pub(crate) fn now_secs() -> f64 {
	system_time_secs(SystemTime::now())
}
