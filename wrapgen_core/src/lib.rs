//! `wrapgen_core` is the core library for the wrapgen module-wrapper
//! generator. It converts compact, indentation-structured spec files
//! describing re-exports of external symbols — macros, includes, constants,
//! functions, namespaces — into generated C++ module wrapper sources for
//! consumption by a module-based build.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Spec file (.txt)
//!   → Line preprocessor (strips `//` comments and blanks, measures indentation)
//!   → Indentation validator (legal depth changes given the parser state)
//!   → Block state machine (Global / Define / Include / Constants / Functions / Namespace)
//!   → Statement emitter (one output fragment per content line)
//!   → File driver (staleness check against the generation cache, atomic writes)
//! ```
//!
//! ## Modules
//!
//! - [`generator`] — The file driver: enumerates the shared and
//!   platform-specific spec collections, skips files older than the cached
//!   timestamp, and writes one `.mpp` output per stale spec.
//! - [`platform`] — The closed set of supported target platforms and
//!   detection from the running executable.
//! - [`scanner`] — The per-file scanner: block state machine, namespace
//!   stack, and indentation validation.
//!
//! ## Key Types
//!
//! - [`GenerateOptions`] — Configuration for one generation run (spec
//!   directory, output directory, platform, force).
//! - [`GenerateReport`] — What a run regenerated and what it skipped.
//! - [`Platform`] — A supported target platform.
//! - [`WrapgenError`] — The error taxonomy: malformed indentation,
//!   unsupported platform, and I/O failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wrapgen_core::GenerateOptions;
//! use wrapgen_core::Platform;
//! use wrapgen_core::generate_modules;
//!
//! let options = GenerateOptions {
//! 	spec_dir: "specs".into(),
//! 	out_dir: "generated".into(),
//! 	platform: Platform::detect().unwrap(),
//! 	force: false,
//! };
//!
//! let report = generate_modules(&options).unwrap();
//! println!("{} module(s) regenerated", report.generated.len());
//! ```

pub use error::*;
pub use generator::*;
pub use platform::*;
pub use scanner::*;

pub(crate) mod cache;
mod emit;
mod error;
pub mod generator;
pub(crate) mod line;
pub mod platform;
pub mod scanner;

#[cfg(test)]
mod __fixtures;
