//! Case discovery and resolution
//!
//! Enumerates load case identifiers and resolves each to ready-made
//! (invocable, config) pairs. The runner only ever consumes a
//! [`CaseSource`]; where the cases come from is a collaborator concern.

use anyhow::anyhow;
use tracing::debug;

use crate::error::RunError;
use crate::models::{LoadCase, LoadConfig};

/// Enumerates load case identifiers in a stable order
pub trait Discovery {
    fn find(&self) -> Result<Vec<String>, RunError>;
}

/// Resolves an identifier to its load cases.
///
/// One identifier may carry zero, one, or several configurations.
pub trait Resolver {
    fn resolve(&self, name: &str) -> Result<Vec<LoadCase>, RunError>;
}

impl<D: Discovery + ?Sized> Discovery for &D {
    fn find(&self) -> Result<Vec<String>, RunError> {
        (**self).find()
    }
}

impl<M: Resolver + ?Sized> Resolver for &M {
    fn resolve(&self, name: &str) -> Result<Vec<LoadCase>, RunError> {
        (**self).resolve(name)
    }
}

/// Yields the ordered case list the runner executes
pub trait CaseSource {
    fn cases(&self) -> Result<Vec<LoadCase>, RunError>;
}

impl CaseSource for Vec<LoadCase> {
    fn cases(&self) -> Result<Vec<LoadCase>, RunError> {
        Ok(self.clone())
    }
}

/// Chains a [`Discovery`] with a [`Resolver`], flattening in enumeration
/// order
pub struct ResolvedSource<D, M> {
    discovery: D,
    resolver: M,
}

impl<D: Discovery, M: Resolver> ResolvedSource<D, M> {
    pub fn new(discovery: D, resolver: M) -> Self {
        Self { discovery, resolver }
    }
}

impl<D: Discovery, M: Resolver> CaseSource for ResolvedSource<D, M> {
    fn cases(&self) -> Result<Vec<LoadCase>, RunError> {
        let names = self.discovery.find()?;
        debug!("discovered {} case identifiers", names.len());

        let mut cases = Vec::new();
        for name in names {
            cases.extend(self.resolver.resolve(&name)?);
        }
        Ok(cases)
    }
}

/// In-process case catalog.
///
/// Registration order is enumeration order. The same name may be
/// registered more than once to exercise one body under several
/// configurations.
#[derive(Default)]
pub struct Registry {
    entries: Vec<LoadCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named body under one configuration
    pub fn register(
        &mut self,
        name: impl Into<String>,
        config: LoadConfig,
        body: impl Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> &mut Self {
        self.entries.push(LoadCase::new(name, config, body));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Discovery for Registry {
    /// Distinct names in first-registered order
    fn find(&self) -> Result<Vec<String>, RunError> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|n| n == &entry.name) {
                names.push(entry.name.clone());
            }
        }
        Ok(names)
    }
}

impl Resolver for Registry {
    fn resolve(&self, name: &str) -> Result<Vec<LoadCase>, RunError> {
        let matches: Vec<LoadCase> = self
            .entries
            .iter()
            .filter(|entry| entry.name == name)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(RunError::Resolution {
                name: name.to_string(),
                source: anyhow!("no load case registered under this name"),
            });
        }
        Ok(matches)
    }
}

impl CaseSource for Registry {
    fn cases(&self) -> Result<Vec<LoadCase>, RunError> {
        Ok(self.entries.clone())
    }
}
