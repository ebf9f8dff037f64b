//! Element registry: maps a custom element name to the function that builds it.
//!
//! Hosts define each element once (usually at start-up) and instantiate it by name as
//! many times as they like. Definitions are append-only; a name that is already taken
//! keeps its first constructor.
//!
//! ```ignore
//! use ui::registry;
//!
//! ui::register_components()?;
//! let nav = registry::create("nav-bar")?;
//! ```
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use dioxus::prelude::Element;
use once_cell::sync::Lazy;

/// Builds a fresh instance of a registered element.
pub type Constructor = fn() -> Element;

/// Names the HTML standard reserves even though they look like custom element names.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("`{0}` is not a valid custom element name")]
    InvalidName(String),

    #[error("an element named `{0}` has already been defined")]
    AlreadyDefined(String),

    #[error("no element named `{0}` has been defined")]
    Undefined(String),
}

#[derive(Debug, Default)]
pub struct ElementRegistry {
    definitions: HashMap<&'static str, Constructor>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name`. Fails if the name is malformed or already taken.
    pub fn define(
        &mut self,
        name: &'static str,
        constructor: Constructor,
    ) -> Result<(), RegistryError> {
        if !is_valid_element_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.definitions.contains_key(name) {
            return Err(RegistryError::AlreadyDefined(name.to_string()));
        }
        self.definitions.insert(name, constructor);
        tracing::debug!(element = name, "defined custom element");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Constructor> {
        self.definitions.get(name).copied()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Instantiate `name`. Every call runs the constructor again.
    pub fn create(&self, name: &str) -> Result<Element, RegistryError> {
        let constructor = self
            .get(name)
            .ok_or_else(|| RegistryError::Undefined(name.to_string()))?;
        Ok(constructor())
    }

    /// Defined names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.definitions.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

/// Valid custom element name: lowercase ASCII start, at least one hyphen, no uppercase,
/// no whitespace or markup delimiters, and not one of the reserved names.
pub fn is_valid_element_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && name.contains('-')
        && !name.chars().any(|c| {
            c.is_ascii_uppercase()
                || c.is_whitespace()
                || matches!(c, '/' | '>' | '<' | '=' | '"' | '\'')
        })
        && !RESERVED_NAMES.contains(&name)
}

static REGISTRY: Lazy<RwLock<ElementRegistry>> = Lazy::new(|| RwLock::new(ElementRegistry::new()));

// The registry only holds fn pointers, so a poisoned lock still guards consistent data.

/// Define `name` on the process-wide registry.
pub fn define(name: &'static str, constructor: Constructor) -> Result<(), RegistryError> {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .define(name, constructor)
}

pub fn lookup(name: &str) -> Option<Constructor> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner).get(name)
}

pub fn is_defined(name: &str) -> bool {
    lookup(name).is_some()
}

/// Names defined on the process-wide registry, sorted.
pub fn defined_names() -> Vec<&'static str> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner).names()
}

/// Instantiate `name` from the process-wide registry.
pub fn create(name: &str) -> Result<Element, RegistryError> {
    // Release the lock before running the constructor.
    let constructor = lookup(name).ok_or_else(|| RegistryError::Undefined(name.to_string()))?;
    Ok(constructor())
}
