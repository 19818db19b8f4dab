//! # CLI Module
//!
//! Command-line entry points of the `opscaffold` binary.
//!
//! ## Commands
//!
//! ### `migrate`
//!
//! Turn the Ansible or Helm operator in the current directory into a hybrid
//! Go project:
//!
//! ```bash
//! opscaffold migrate --header-file hack/license.txt
//! ```
//!
//! Options:
//! - `--header-file <FILE>` - license header for generated Go sources
//!   (`OPSCAFFOLD_HEADER_FILE`)
//! - `--repo <PATH>` - Go import path of the project (`OPSCAFFOLD_REPO`)
//!
//! ### `generate openapi`
//!
//! Run `openapi-gen` for every `pkg/apis/<group>/<version>` package:
//!
//! ```bash
//! opscaffold generate openapi --engine /usr/local/bin/openapi-gen
//! ```
//!
//! Unset options fall back to `opscaffold.toml` at the project root; see
//! [`crate::config`].

mod commands;


pub use commands::{run, run_cli, Cli, Commands, GenerateTarget};
