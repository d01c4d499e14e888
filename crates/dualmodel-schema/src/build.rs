use crate::{error::RegistryError, registry::Registry};
use std::sync::{
    OnceLock,
    atomic::{AtomicBool, Ordering},
};

///
/// REGISTRY
/// the process-wide registry, frozen after the load phase
///

static REGISTRY: OnceLock<Registry> = OnceLock::new();
static LOADING: AtomicBool = AtomicBool::new(false);

/// Run the load phase exactly once: build a registry with `declare`,
/// then freeze it for the rest of the process.
///
/// The first call claims the load phase before `declare` runs. Every later
/// call fails with `AlreadyRegistered` without running its declarations,
/// including after a failed first call, which leaves nothing installed.
pub fn init_registry<F>(declare: F) -> Result<&'static Registry, RegistryError>
where
    F: FnOnce(&mut Registry) -> Result<(), RegistryError>,
{
    if LOADING.swap(true, Ordering::AcqRel) {
        return Err(RegistryError::AlreadyRegistered);
    }

    let mut registry = Registry::new();
    declare(&mut registry)?;

    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyRegistered)?;

    REGISTRY.get().ok_or(RegistryError::NotRegistered)
}

/// Read the frozen registry.
pub fn registry() -> Result<&'static Registry, RegistryError> {
    REGISTRY.get().ok_or(RegistryError::NotRegistered)
}
