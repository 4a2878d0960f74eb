//! Host-managed dispersion registry.
//!
//! The host creates dispersions independently of any model and refers to
//! them through opaque [`DispersionHandle`]s. Attaching a registered
//! dispersion to a model parameter copies it, so the parameter keeps
//! exclusive ownership of its own distribution.
//!
//! # Example
//!
//! ```
//! use sasmodel::prelude::*;
//!
//! let registry = DispersionRegistry::new();
//! let handle = registry.insert(Dispersion::rectangular(5.0, 10));
//!
//! let mut model = HardsphereStructure::new();
//! model.set_dispersion_from(&registry, "radius", handle).unwrap();
//! assert_eq!(model.parameters().weights("radius").unwrap().len(), 10);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::distribution::Dispersion;
use crate::error::{Error, Result};
use crate::settings::{self, DispersionSettings};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(0);

/// An opaque reference to a dispersion held by a [`DispersionRegistry`].
///
/// Handles are unique across all registries in the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispersionHandle(u64);

impl DispersionHandle {
    fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DispersionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dispersion_{}", self.0)
    }
}

/// A thread-safe store of dispersions addressed by handle.
#[derive(Debug, Default)]
pub struct DispersionRegistry {
    entries: RwLock<HashMap<DispersionHandle, Dispersion>>,
}

impl DispersionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a dispersion and returns its handle.
    pub fn insert(&self, dispersion: Dispersion) -> DispersionHandle {
        let handle = DispersionHandle::next();
        self.entries.write().insert(handle, dispersion);
        handle
    }

    /// A copy of the registered dispersion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandle`] if the handle is not registered here.
    pub fn get(&self, handle: DispersionHandle) -> Result<Dispersion> {
        self.entries
            .read()
            .get(&handle)
            .cloned()
            .ok_or(Error::UnknownHandle(handle))
    }

    /// Replaces the registered dispersion, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandle`] if the handle is not registered here.
    pub fn replace(&self, handle: DispersionHandle, dispersion: Dispersion) -> Result<Dispersion> {
        match self.entries.write().get_mut(&handle) {
            Some(slot) => Ok(core::mem::replace(slot, dispersion)),
            None => Err(Error::UnknownHandle(handle)),
        }
    }

    /// Imports settings into the registered dispersion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandle`] or [`Error::InvalidDispersionSpec`];
    /// the registered dispersion is unchanged on error.
    pub fn update(&self, handle: DispersionHandle, settings: &DispersionSettings) -> Result<()> {
        let dispersion = settings::from_settings(settings)?;
        self.replace(handle, dispersion).map(drop)
    }

    /// Removes and returns the registered dispersion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHandle`] if the handle is not registered here.
    pub fn remove(&self, handle: DispersionHandle) -> Result<Dispersion> {
        self.entries
            .write()
            .remove(&handle)
            .ok_or(Error::UnknownHandle(handle))
    }

    /// Whether the handle is registered here.
    #[must_use]
    pub fn contains(&self, handle: DispersionHandle) -> bool {
        self.entries.read().contains_key(&handle)
    }

    /// Number of registered dispersions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
