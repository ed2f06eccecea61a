use std::fmt;
use std::str::FromStr;

use crate::WrapgenError;
use crate::WrapgenResult;

/// Target platforms with their own spec directories. Anything outside this
/// set is rejected before any file is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Platform {
	Windows,
	MacOs,
	Linux,
}

impl Platform {
	/// Detect the platform of the running executable.
	pub fn detect() -> WrapgenResult<Self> {
		std::env::consts::OS.parse()
	}

	/// Name of the directory holding this platform's spec files.
	pub fn dir_name(self) -> &'static str {
		match self {
			Self::Windows => "windows",
			Self::MacOs => "macos",
			Self::Linux => "linux",
		}
	}
}

impl FromStr for Platform {
	type Err = WrapgenError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"windows" => Ok(Self::Windows),
			"macos" => Ok(Self::MacOs),
			"linux" => Ok(Self::Linux),
			other => Err(WrapgenError::UnsupportedPlatform(other.to_string())),
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.dir_name())
	}
}
