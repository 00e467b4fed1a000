//! Key-value sources that variables are read from

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A read-only provider of environment variables.
///
/// Absence (`None`) and an empty value (`Some("")`) are distinct here; the
/// "empty counts as unset" rule is applied on top by [`resolve`].
pub trait Source {
    /// Current value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
///
/// Values that are not valid unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Value of `name` if it is set and non-empty, otherwise `fallback`.
pub fn resolve<S: Source + ?Sized>(source: &S, name: &str, fallback: &str) -> String {
    lookup(source, name).unwrap_or_else(|| fallback.to_owned())
}

/// Value of `name` if it is set and non-empty.
pub(crate) fn lookup<S: Source + ?Sized>(source: &S, name: &str) -> Option<String> {
    source.var(name).filter(|value| !value.is_empty())
}
