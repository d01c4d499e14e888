//! ## Crate layout
//! - `primitives`: scalar types, dynamic values and the coercion policy.
//! - `schema`: schema descriptors, declaration hooks and the registry.
//! - `core`: instances, patches and the transformer.
//! - `config`: TOML configuration.
//! - `catalog`: the declared Contact, Organization, Note and Task pairs.
//! - `convert`: conversions that resolve counterparts through the registry.
//!
//! Call [`register`] (or [`register_with`]) once at startup before using
//! anything in `convert`.

pub use dualmodel_config as config;
pub use dualmodel_core as core;
pub use dualmodel_primitives as primitives;
pub use dualmodel_schema as schema;

pub mod catalog;
pub mod convert;
pub mod error;

use dualmodel_config::Config;
use dualmodel_core::Transformer;
use dualmodel_schema::{build::init_registry, registry::Registry};

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// register
///
/// Run the load phase with the default configuration.
///

pub fn register() -> Result<&'static Registry, Error> {
    register_with(&Config::default())
}

/// Run the load phase exactly once. A second call fails with
/// `ErrorKind::AlreadyRegistered`; a failed declaration leaves the process
/// unregistered.
pub fn register_with(config: &Config) -> Result<&'static Registry, Error> {
    let registry = init_registry(catalog::declare).inspect_err(|err| {
        log::error!("model registration failed: {err}");
    })?;
    convert::install(Transformer::new(config.transform.coercion))?;

    let snapshot = registry.list_registered();
    log::info!(
        "registered {} persistence and {} validation types (coercion: {})",
        snapshot.persistence.len(),
        snapshot.validation.len(),
        config.transform.coercion,
    );

    Ok(registry)
}

/// The frozen process registry.
pub fn registry() -> Result<&'static Registry, Error> {
    Ok(dualmodel_schema::build::registry()?)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, ErrorKind, ErrorOrigin,
        convert::{
            apply_update, new_patch, new_persistence, to_persistence, to_projection,
            to_validation, to_validation_list, validate,
        },
        register, register_with, registry,
    };
    pub use dualmodel_config::Config;
    pub use dualmodel_core::prelude::*;
}
