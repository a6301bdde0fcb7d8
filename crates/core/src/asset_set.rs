//! Lock-guarded asset collection
//!
//! [`AssetSet`] is the engine-owned collection the encoder reads from. The
//! backing map sits behind a `parking_lot::RwLock`:
//!
//! - Readers (encoders) share the lock and run concurrently.
//! - Writers (the cost engine) take it exclusively.
//! - The lock is task-fair: once a writer is waiting, new readers queue
//!   behind it, so a steady stream of encoders cannot starve a writer.
//!
//! Guards never escape this type; access goes through closures so the lock
//! is released on every exit path, including panics.

use crate::asset::Asset;
use crate::window::Window;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Identifier-keyed assets for one window
#[derive(Debug)]
pub struct AssetSet {
    window: Window,
    assets: RwLock<HashMap<String, Asset>>,
}

impl AssetSet {
    /// Create an empty set over `window`
    pub fn new(window: Window) -> Self {
        Self {
            window,
            assets: RwLock::new(HashMap::new()),
        }
    }

    /// Create a set from existing assets
    pub fn from_assets(window: Window, assets: HashMap<String, Asset>) -> Self {
        Self {
            window,
            assets: RwLock::new(assets),
        }
    }

    /// Window the set covers
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Run `f` with shared access to the backing map
    ///
    /// Any number of callers may be inside `with_assets` at once.
    pub fn with_assets<R>(&self, f: impl FnOnce(&HashMap<String, Asset>) -> R) -> R {
        let guard = self.assets.read();
        f(&guard)
    }

    /// Run `f` with exclusive access to the backing map
    pub fn with_assets_mut<R>(&self, f: impl FnOnce(&mut HashMap<String, Asset>) -> R) -> R {
        let mut guard = self.assets.write();
        f(&mut guard)
    }

    /// Insert or replace an asset, returning the previous one
    pub fn insert(&self, key: impl Into<String>, asset: Asset) -> Option<Asset> {
        self.assets.write().insert(key.into(), asset)
    }

    /// Remove an asset
    pub fn remove(&self, key: &str) -> Option<Asset> {
        self.assets.write().remove(key)
    }

    /// Clone of one asset
    pub fn get(&self, key: &str) -> Option<Asset> {
        self.assets.read().get(key).cloned()
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.read().len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.assets.read().is_empty()
    }

    /// Sum of `total_cost()` across all assets
    pub fn total_cost(&self) -> f64 {
        self.with_assets(|assets| assets.values().map(Asset::total_cost).sum())
    }

    /// Take the backing map, leaving the set empty
    pub fn take(&self) -> HashMap<String, Asset> {
        std::mem::take(&mut *self.assets.write())
    }
}
