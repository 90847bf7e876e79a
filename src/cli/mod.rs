//! # CLI Module
//!
//! Command-line surface of the `shadpanel` binary.
//!
//! ## Commands
//!
//! ### `resource` (alias `r`)
//!
//! Scaffold the admin pages for one schema model:
//!
//! ```bash
//! shadpanel resource invoice
//! ```
//!
//! Options:
//! - `--force` - Overwrite existing files
//! - `--skip-menu` - Leave `config/menu.ts` alone
//! - `--path <DIR>` - Project root (default: current directory)
//! - `--dry-run` - Print `would write:` lines without touching any file
//!
//! ### `inspect`
//!
//! Show the classification of every field and the derived resource names:
//!
//! ```bash
//! shadpanel inspect
//! shadpanel inspect invoice --json
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | Configuration, I/O or rendering failure   |
//! | 2    | Schema file not found                     |
//! | 3    | No model matches the requested name       |
//! | 4    | A generated file exists and `--force` was not given |
//! | 5    | The model has no identifier field         |
//!
//! ## Usage from Code
//!
//! ```rust,no_run
//! use shadpanel::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! if let Err(err) = run_cli(cli) {
//!     eprintln!("{err}");
//!     std::process::exit(i32::from(err.exit_code()));
//! }
//! ```

mod commands;

pub use commands::{run_cli, Cli, Commands};
