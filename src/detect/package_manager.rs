//! Package manager detection from lockfile markers.
//!
//! Each directory is searched for lockfiles in a fixed priority order
//! (pnpm, yarn, bun, npm). If none is present the search moves to the parent
//! directory, up to [`MAX_PARENT_LEVELS`] levels, which covers a project nested a
//! few levels inside a monorepo workspace. The first marker found wins; when the walk
//! finds nothing, npm is used.
//!
//! Lockfiles are only checked for existence, never parsed.

use std::path::Path;

/// How many ancestors of the start directory are searched.
pub const MAX_PARENT_LEVELS: usize = 3;

/// A JavaScript package manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    #[default]
    Npm,
}

impl PackageManager {
    /// Lookup order within a single directory.
    pub const LOOKUP_ORDER: [PackageManager; 4] =
        [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Bun, PackageManager::Npm];

    /// Executable name.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Lockfile whose presence marks this manager.
    #[must_use]
    pub const fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Bun => "bun.lockb",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// Subcommand that adds new dependencies to the manifest.
    #[must_use]
    pub const fn add_verb(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "add",
        }
    }

    /// Arguments for installing `packages`.
    #[must_use]
    pub fn add_args(&self, packages: &[String]) -> Vec<String> {
        std::iter::once(self.add_verb().to_string()).chain(packages.iter().cloned()).collect()
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Detect the package manager governing `start_dir`.
#[must_use]
pub fn detect_package_manager(start_dir: &Path) -> PackageManager {
    for dir in start_dir.ancestors().take(MAX_PARENT_LEVELS + 1) {
        if let Some(manager) = lockfile_in(dir) {
            tracing::debug!(
                "Detected {manager} from {} in {}",
                manager.lockfile(),
                dir.display()
            );
            return manager;
        }
    }

    tracing::debug!("No lockfile found near {}; using npm", start_dir.display());
    PackageManager::default()
}

fn lockfile_in(dir: &Path) -> Option<PackageManager> {
    PackageManager::LOOKUP_ORDER
        .into_iter()
        .find(|manager| dir.join(manager.lockfile()).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_no_lockfile_defaults_to_npm() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("a/b/c/d/project");
        std::fs::create_dir_all(&project).unwrap();

        assert_eq!(detect_package_manager(&project), PackageManager::Npm);
    }

    #[test]
    fn test_each_lockfile_is_recognized() {
        for manager in PackageManager::LOOKUP_ORDER {
            let temp = TempDir::new().unwrap();
            touch(temp.path(), manager.lockfile());
            assert_eq!(detect_package_manager(temp.path()), manager);
        }
    }

    #[test]
    fn test_priority_within_directory() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "package-lock.json");
        touch(temp.path(), "bun.lockb");
        touch(temp.path(), "yarn.lock");
        assert_eq!(detect_package_manager(temp.path()), PackageManager::Yarn);

        touch(temp.path(), "pnpm-lock.yaml");
        assert_eq!(detect_package_manager(temp.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_closest_directory_wins_over_priority() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("packages/app");
        touch(temp.path(), "pnpm-lock.yaml");
        touch(&project, "package-lock.json");

        assert_eq!(detect_package_manager(&project), PackageManager::Npm);
    }

    #[test]
    fn test_walks_up_to_workspace_root() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("apps/web/frontend");
        std::fs::create_dir_all(&project).unwrap();
        touch(temp.path(), "pnpm-lock.yaml");

        assert_eq!(detect_package_manager(&project), PackageManager::Pnpm);
    }

    #[test]
    fn test_walk_is_bounded() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("one/two/three/four");
        std::fs::create_dir_all(&project).unwrap();
        touch(temp.path(), "yarn.lock");

        assert_eq!(detect_package_manager(&project), PackageManager::Npm);
    }

    #[test]
    fn test_add_args() {
        let packages = vec!["clsx".to_string(), "tailwind-merge".to_string()];
        assert_eq!(PackageManager::Npm.add_args(&packages), ["install", "clsx", "tailwind-merge"]);
        assert_eq!(PackageManager::Pnpm.add_args(&packages), ["add", "clsx", "tailwind-merge"]);
        assert_eq!(PackageManager::Yarn.add_verb(), "add");
        assert_eq!(PackageManager::Bun.add_verb(), "add");
    }
}
