//! # Grandcat CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, argument
//! definitions in `args.rs`, and this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (args.rs)                          │
//! │  - Context wiring + dispatch (cli/mod.rs)                   │
//! │  - Terminal rendering (cli/print.rs)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses selectors, dispatches to command modules          │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible
//! for argument parsing, locating the data directory, logging setup, error
//! reporting and rendering.

mod args;
mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
