//! # OpenAPI Module
//!
//! Runs OpenAPI code generation for every Custom Resource API package of a
//! Go-based (or hybrid) operator.
//!
//! ## Overview
//!
//! - [`parse_group_subpackages`] - finds `{group: [versions]}` under the API
//!   root (`pkg/apis` by default)
//! - [`GenerationArgs`] - the argument set for one package; a fresh value is
//!   built per package
//! - [`OpenApiEngine`] - the generator seam; [`ExternalEngine`] runs the
//!   `openapi-gen` binary
//! - [`OpenApiGenerator`] - drives the engine over all packages in name order
//!
//! Each package `pkg/apis/<group>/<version>` gets a
//! `zz_generated.openapi.go` next to its sources. The license header is the
//! project's `hack/boilerplate.go.txt` when it exists, otherwise an empty
//! temporary file.

mod driver;
mod engine;
mod group_versions;
#[cfg(test)]
mod tests;

pub use driver::{ApiPackage, OpenApiGenerator};
pub use engine::{ExternalEngine, GenerationArgs, OpenApiEngine, OUTPUT_FILE_BASE_NAME};
pub use group_versions::{
    create_fq_apis, describe_group_versions, parse_group_subpackages, GroupVersionMap,
};
