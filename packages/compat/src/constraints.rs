use crate::engine::Engine;
use crate::version::Version;
use std::collections::BTreeMap;

/// The engines a build targets, each with the oldest version to support
///
/// Holds at most one version per engine. An engine that is absent places no
/// restriction on the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    versions: BTreeMap<Engine, Version>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target version for `engine`, returning any previous one
    pub fn insert(&mut self, engine: Engine, version: Version) -> Option<Version> {
        self.versions.insert(engine, version)
    }

    pub fn with(mut self, engine: Engine, version: Version) -> Self {
        self.insert(engine, version);
        self
    }

    pub fn get(&self, engine: Engine) -> Option<Version> {
        self.versions.get(&engine).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Engine, Version)> + '_ {
        self.versions.iter().map(|(engine, version)| (*engine, *version))
    }

    /// Constraints on browser engines only; these are the ones CSS reacts to
    pub fn browsers(&self) -> impl Iterator<Item = (Engine, Version)> + '_ {
        self.iter().filter(|(engine, _)| engine.is_browser())
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl FromIterator<(Engine, Version)> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = (Engine, Version)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_version_per_engine() {
        let mut constraints = ConstraintSet::new();
        assert_eq!(constraints.insert(Engine::Chrome, Version::new(58, 0, 0)), None);
        assert_eq!(
            constraints.insert(Engine::Chrome, Version::new(60, 0, 0)),
            Some(Version::new(58, 0, 0))
        );
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints.get(Engine::Chrome), Some(Version::new(60, 0, 0)));
        assert_eq!(constraints.get(Engine::Safari), None);
    }

    #[test]
    fn test_browsers_skips_non_browser_engines() {
        let constraints = ConstraintSet::new()
            .with(Engine::Node, Version::new(16, 0, 0))
            .with(Engine::Es, Version::new(2020, 0, 0))
            .with(Engine::Firefox, Version::new(90, 0, 0));

        let browsers: Vec<_> = constraints.browsers().collect();
        assert_eq!(browsers, vec![(Engine::Firefox, Version::new(90, 0, 0))]);
        assert_eq!(constraints.len(), 3);
    }
}
