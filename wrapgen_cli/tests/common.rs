use std::path::Path;

use assert_cmd::Command;

pub fn wrapgen_cmd() -> Command {
	let mut cmd = Command::cargo_bin("wrapgen").expect("wrapgen binary should build");
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Write a spec file into `<root>/specs/<collection>/<name>`.
pub fn write_spec(root: &Path, collection: &str, name: &str, contents: &str) {
	let dir = root.join("specs").join(collection);
	std::fs::create_dir_all(&dir).expect("spec directory should be writable");
	std::fs::write(dir.join(name), contents).expect("spec file should be writable");
}
