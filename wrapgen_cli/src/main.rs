use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use wrapgen_cli::OutputFormat;
use wrapgen_cli::WrapgenCli;
use wrapgen_core::GenerateOptions;
use wrapgen_core::GenerateReport;
use wrapgen_core::Platform;
use wrapgen_core::WrapgenError;
use wrapgen_core::generate_modules;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = WrapgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	// Logging goes to stderr so machine-readable stdout stays clean; silent
	// unless RUST_LOG is set.
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes.
		match e.downcast::<WrapgenError>() {
			Ok(error) => {
				let report: miette::Report = (*error).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run(args: &WrapgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let platform = match args.platform {
		Some(platform) => platform,
		None => Platform::detect()?,
	};

	let options = GenerateOptions {
		spec_dir: args.spec_dir.clone(),
		out_dir: args.out_dir.clone(),
		platform,
		force: args.force,
	};

	if matches!(args.format, OutputFormat::Text) {
		println!("Generating modules...");
	}

	let report = generate_modules(&options)?;

	match args.format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string(&report)?);
		}
		OutputFormat::Text => print_report(args, &report),
	}

	Ok(())
}

fn print_report(args: &WrapgenCli, report: &GenerateReport) {
	for file in &report.generated {
		if args.verbose {
			println!("> {} ({})", file.name, file.spec.display());
		} else {
			println!("> {}", file.name);
		}
	}

	if args.verbose && report.skipped > 0 {
		println!("  {} spec file(s) unchanged", report.skipped);
	}

	println!("{}", colored!("Generation complete.", bold));
}
