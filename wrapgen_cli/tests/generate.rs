mod common;

use rstest::rstest;
use serde_json::Value;
use similar_asserts::assert_eq;
use wrapgen_core::AnyEmptyResult;

#[test]
fn generates_modules_and_reports_progress() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_spec(
		tmp.path(),
		"common",
		"sockets.txt",
		"includes\n    sys/socket.h\nconstants\n    SOMAXCONN\n",
	);

	let mut cmd = common::wrapgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("generated")
		.arg("--spec-dir")
		.arg("specs")
		.arg("--platform")
		.arg("linux")
		.assert()
		.success()
		.stdout(predicates::str::contains("Generating modules..."))
		.stdout(predicates::str::contains("> sockets"))
		.stdout(predicates::str::contains("Generation complete."));

	let generated = std::fs::read_to_string(tmp.path().join("generated").join("sockets.mpp"))?;
	assert_eq!(
		generated,
		concat!(
			"module;\n",
			"#include <sys/socket.h>\n",
			"export module external.sockets;\n",
			"constexpr auto tmp_SOMAXCONN = SOMAXCONN;\n",
			"#undef SOMAXCONN\n",
			"export constexpr auto SOMAXCONN = tmp_SOMAXCONN;\n",
		)
	);

	Ok(())
}

#[rstest]
#[case::windows("windows")]
#[case::macos("macos")]
#[case::linux("linux")]
fn platform_collection_is_scanned_after_the_shared_one(#[case] platform: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_spec(tmp.path(), "common", "shared.txt", "defines\n    COMMON\n");
	common::write_spec(tmp.path(), platform, "native.txt", "defines\n    NATIVE\n");

	let mut cmd = common::wrapgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("generated")
		.arg("--spec-dir")
		.arg("specs")
		.arg("--platform")
		.arg(platform)
		.assert()
		.success()
		.stdout(predicates::str::contains("> shared\n> native"));

	Ok(())
}

#[test]
fn json_format_emits_a_machine_readable_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_spec(tmp.path(), "common", "sockets.txt", "defines\n    FOO\n");

	let mut cmd = common::wrapgen_cmd();
	let output = cmd
		.current_dir(tmp.path())
		.arg("generated")
		.arg("--spec-dir")
		.arg("specs")
		.arg("--platform")
		.arg("linux")
		.arg("--format")
		.arg("json")
		.output()?;

	assert!(output.status.success());

	let summary: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(summary["skipped"].as_u64(), Some(0));
	assert_eq!(summary["generated"][0]["name"].as_str(), Some("sockets"));

	Ok(())
}

#[test]
fn missing_output_directory_is_a_usage_error() {
	let mut cmd = common::wrapgen_cmd();
	cmd.assert()
		.failure()
		.stderr(predicates::str::contains("Usage"));
}

#[test]
fn unsupported_platform_is_rejected() {
	let mut cmd = common::wrapgen_cmd();
	cmd.arg("generated")
		.arg("--platform")
		.arg("beos")
		.assert()
		.failure()
		.stderr(predicates::str::contains("unsupported platform"));
}

#[test]
fn malformed_indentation_aborts_with_the_line_number() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_spec(tmp.path(), "common", "bad.txt", "defines\n            X\n");

	let mut cmd = common::wrapgen_cmd();
	cmd.current_dir(tmp.path())
		.arg("generated")
		.arg("--spec-dir")
		.arg("specs")
		.arg("--platform")
		.arg("linux")
		.assert()
		.failure()
		.stderr(predicates::str::contains("extra indentation on line 2"));

	assert!(!tmp.path().join("generated").join("bad.mpp").exists());

	Ok(())
}
