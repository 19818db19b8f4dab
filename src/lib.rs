//! # opscaffold
//!
//! **opscaffold** converts Ansible and Helm based Kubernetes operator
//! projects into hybrid projects with a Go entry point, and drives OpenAPI
//! code generation for the Custom Resource APIs of Go based operators.
//!
//! ## Architecture
//!
//! - **[`project`]** - project-root check, operator type detection, Go import path resolution
//! - **[`scaffold`]** - Askama template sets, license header handling and the file writer
//! - **[`migrate`]** - the migration pipeline: artifact backup, header load, template writes
//! - **[`openapi`]** - group/version discovery and per-package generator runs
//! - **[`config`]** - run options and the optional `opscaffold.toml`
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `opscaffold` command line
//!
//! ### Migration Flow
//!
//! ```text
//! check root ─▶ detect type ─▶ resolve import path
//!                                   │
//!     build/Dockerfile ─▶ build/Dockerfile.sdkold
//!                                   │
//!              load header ─▶ hack/boilerplate.go.txt
//!                                   │
//!   go.mod, tools.go, cmd/manager/main.go, build/Dockerfile, bin/*
//! ```
//!
//! Every stage is fail-fast. Nothing is rolled back; the original
//! Dockerfile stays recoverable as `build/Dockerfile.sdkold`.
//!
//! ## Errors
//!
//! Library operations return [`ScaffoldError`]; the CLI wraps it in
//! `anyhow` and prints `error: <message>`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod openapi;
pub mod project;
pub mod scaffold;

pub use error::{Result, ScaffoldError};
