//! Locale file lookup across candidate root directories.

use std::path::{
    Path,
    PathBuf,
};

/// Finds locale files under an ordered list of candidate roots.
///
/// The same layout is served both from a monorepo root (`web/lib/i18n/locales`)
/// and from the web package itself (`lib/i18n/locales`), so no single root is
/// correct for every working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFileResolver {
    roots: Vec<PathBuf>,
}

impl LocaleFileResolver {
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { roots: roots.into_iter().map(Into::into).collect() }
    }

    /// Joins each relative root onto `base`. Absolute roots are kept as-is.
    #[must_use]
    pub fn with_base<I, S>(base: &Path, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        Self::new(roots.into_iter().map(|root| base.join(root)))
    }

    /// Returns the first candidate path for `filename` that exists.
    ///
    /// If none exists the first candidate is returned anyway, so that the caller
    /// fails on open with a meaningful path. Errors while checking existence
    /// count as "does not exist".
    #[must_use]
    pub fn resolve(&self, filename: &str) -> PathBuf {
        let mut candidates = self.roots.iter().map(|root| root.join(filename));

        let Some(first) = candidates.next() else {
            return PathBuf::from(filename);
        };
        if first.try_exists().unwrap_or(false) {
            return first;
        }

        if let Some(found) = candidates.find(|candidate| candidate.try_exists().unwrap_or(false)) {
            return found;
        }

        tracing::debug!(?first, "Locale file not found in any root, using first candidate");
        first
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn roots(temp_dir: &TempDir) -> LocaleFileResolver {
        LocaleFileResolver::with_base(temp_dir.path(), ["lib/i18n/locales", "web/lib/i18n/locales"])
    }

    #[rstest]
    fn test_resolve_prefers_first_root() {
        let temp_dir = TempDir::new().unwrap();
        for root in ["lib/i18n/locales", "web/lib/i18n/locales"] {
            let dir = temp_dir.path().join(root);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("en.yaml"), "a: b").unwrap();
        }

        let resolved = roots(&temp_dir).resolve("en.yaml");

        assert_eq!(resolved, temp_dir.path().join("lib/i18n/locales/en.yaml"));
    }

    #[rstest]
    fn test_resolve_falls_through_to_second_root() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("web/lib/i18n/locales");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("zh-CN.yaml"), "a: b").unwrap();

        let resolved = roots(&temp_dir).resolve("zh-CN.yaml");

        assert_eq!(resolved, dir.join("zh-CN.yaml"));
    }

    #[rstest]
    fn test_resolve_returns_first_candidate_when_missing() {
        let temp_dir = TempDir::new().unwrap();

        let resolved = roots(&temp_dir).resolve("zh-HK.yaml");

        assert_eq!(resolved, temp_dir.path().join("lib/i18n/locales/zh-HK.yaml"));
        assert!(!resolved.exists());
    }

    #[rstest]
    fn test_resolve_without_roots_returns_filename() {
        let resolver = LocaleFileResolver::new(Vec::<PathBuf>::new());

        assert_eq!(resolver.resolve("en.yaml"), PathBuf::from("en.yaml"));
    }
}
