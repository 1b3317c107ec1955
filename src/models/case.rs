//! Load cases: an identifier bound to an invocable and its configuration

use std::fmt;
use std::sync::Arc;

use super::LoadConfig;

/// The zero-argument body a load case exercises
pub type InvocableFn = dyn Fn() -> anyhow::Result<()> + Send + Sync;

/// Shared handle to an invocable.
///
/// One engine invocation hands the same handle to every worker; the engine
/// imposes no locking, so thread-safety of the body is the caller's
/// responsibility.
pub type Invocable = Arc<InvocableFn>;

/// One (identifier, invocable, config) triple as consumed by the runner
#[derive(Clone)]
pub struct LoadCase {
    pub name: String,
    pub invocable: Invocable,
    pub config: LoadConfig,
}

impl LoadCase {
    pub fn new(
        name: impl Into<String>,
        config: LoadConfig,
        body: impl Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            invocable: Arc::new(body),
            config,
        }
    }
}

impl fmt::Debug for LoadCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadCase")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_invokes_body() {
        let case = LoadCase::new("cases::noop", LoadConfig::new(1), || Ok(()));
        assert!((case.invocable)().is_ok());
        assert_eq!(case.name, "cases::noop");
    }

    #[test]
    fn test_clone_shares_invocable() {
        let case = LoadCase::new("cases::noop", LoadConfig::new(1), || Ok(()));
        let copy = case.clone();
        assert_eq!(Arc::strong_count(&case.invocable), 2);
        drop(copy);
    }
}
