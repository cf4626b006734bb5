//! # Item Registry
//!
//! Canonical store of item identities.
//!
//! An item is identified by its normalized name (surrounding whitespace
//! trimmed, compared case-sensitively). The basic flag only ever moves from
//! `false` to `true`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CraftingError, CraftingResult};

/// A named entity in the crafting economy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Normalized, unique name.
    pub name: String,
    /// Whether the item is freely obtainable.
    pub is_basic: bool,
}

impl Item {
    /// Creates a new item.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, is_basic: bool) -> Self {
        Self { name: name.into(), is_basic }
    }
}

/// Trims `name` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`CraftingError::EmptyName`] for empty or whitespace-only names.
pub fn normalize_name(name: &str) -> CraftingResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CraftingError::EmptyName);
    }
    Ok(trimmed)
}

/// Name-keyed item store. Iteration is always name-ascending.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: BTreeMap<String, Item>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item called `name`, creating it when missing.
    ///
    /// Requesting `is_basic = true` upgrades an existing craftable item;
    /// requesting `false` never downgrades a basic one.
    ///
    /// # Errors
    ///
    /// Returns [`CraftingError::EmptyName`] if `name` is blank.
    pub fn get_or_create(&mut self, name: &str, is_basic: bool) -> CraftingResult<&Item> {
        let name = normalize_name(name)?;

        let item = self.items.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!("Registered item '{}' (basic: {})", name, is_basic);
            Item::new(name, is_basic)
        });
        if is_basic && !item.is_basic {
            tracing::debug!("Upgraded item '{}' to basic", name);
            item.is_basic = true;
        }
        Ok(item)
    }

    /// Looks up an item by its exact normalized name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Iterates items in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterates the names of every basic item, ascending.
    pub fn basic_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .values()
            .filter(|item| item.is_basic)
            .map(|item| item.name.as_str())
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item was registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
