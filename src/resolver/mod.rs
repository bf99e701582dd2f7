//! Alias-based target path resolution
//!
//! Registry items describe their files with logical paths that are independent of
//! any project layout. This module maps them onto the consuming project's own
//! conventions, as configured by the `aliases` section of `components.json`.
//!
//! # Alias Resolution
//!
//! An alias starting with the root-import marker `@/` resolves under `<cwd>/src/`;
//! any other alias resolves under `<cwd>` directly. This mirrors the `@/*` →
//! `./src/*` path map of a typical `tsconfig.json`.
//!
//! | Alias             | Resolved path             |
//! |-------------------|---------------------------|
//! | `@/components/ui` | `<cwd>/src/components/ui` |
//! | `app/components`  | `<cwd>/app/components`    |
//!
//! # Logical Path Branches
//!
//! | Registry path | Target |
//! |---------------|--------|
//! | `ui/<rest>`   | `resolve(aliases.components)/<rest>` |
//! | `lib/<rest>`, file-style utils alias | `resolve(aliases.utils)` with the registry file's extension |
//! | `lib/<rest>`, directory-style utils alias | `resolve(aliases.utils)/<rest>` |
//! | anything else | `<cwd>/src/<path>` |
//!
//! A utils alias is directory-style when it ends with `/` (`@/lib/`) and
//! file-style otherwise (`@/lib/utils`). With a file-style alias every `lib/*`
//! file collapses onto the one aliased file.
//!
//! # Containment
//!
//! Segments are joined component by component, so a leading `/` or a drive prefix
//! never replaces the base directory: `@//abs` resolves to `<cwd>/src/abs`. Registry
//! paths are stricter and are rejected by [`validate_registry_path`] when they are
//! absolute or contain `..`.

pub mod targets;

pub use targets::{InstallTarget, plan_targets};

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use crate::core::ArkitectError;

/// Root-import marker that maps to the project's `src/` directory.
pub const ROOT_IMPORT_MARKER: &str = "@/";

/// Source root used for the `@/` marker and unprefixed registry paths.
pub const SOURCE_ROOT: &str = "src";

/// Extension used when a registry file path has none.
pub const DEFAULT_SOURCE_EXTENSION: &str = "ts";

/// Whether an alias names a single file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasStyle {
    /// Points at one module without extension, e.g. `@/lib/utils`.
    File,
    /// Ends with a path separator, e.g. `@/lib/`.
    Directory,
}

impl AliasStyle {
    /// Classify an alias string.
    #[must_use]
    pub fn of(alias: &str) -> Self {
        if alias.ends_with('/') {
            AliasStyle::Directory
        } else {
            AliasStyle::File
        }
    }
}

/// Resolve an import alias to a filesystem path relative to `cwd`.
///
/// # Examples
///
/// ```rust
/// use arkitect_cli::resolver::resolve_alias;
/// use std::path::Path;
///
/// let cwd = Path::new("/project");
/// assert_eq!(resolve_alias("@/components/ui", cwd), Path::new("/project/src/components/ui"));
/// assert_eq!(resolve_alias("components/ui", cwd), Path::new("/project/components/ui"));
/// ```
#[must_use]
pub fn resolve_alias(alias: &str, cwd: &Path) -> PathBuf {
    match alias.strip_prefix(ROOT_IMPORT_MARKER) {
        Some(rest) => join_relative(&cwd.join(SOURCE_ROOT), rest),
        None => join_relative(cwd, alias),
    }
}

/// Append `segment` to `base`, dropping any root or prefix component of `segment`.
#[must_use]
pub fn join_relative(base: &Path, segment: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in Path::new(segment).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::ParentDir => joined.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    joined
}

/// Reject registry file paths that could point outside the project.
///
/// # Errors
///
/// [`ArkitectError::InvalidRegistryPath`] for absolute paths, drive prefixes, and
/// parent directory references (`..`).
pub fn validate_registry_path(path: &str) -> Result<()> {
    let invalid = |reason: &str| ArkitectError::InvalidRegistryPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.starts_with(['/', '\\']) {
        return Err(invalid("absolute path").into());
    }
    for component in Path::new(path).components() {
        match component {
            Component::ParentDir => {
                return Err(invalid("parent directory reference (..)").into());
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("absolute path").into());
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    if path.split(['/', '\\']).any(|part| part == "..") {
        return Err(invalid("parent directory reference (..)").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_alias_goes_under_src() {
        let cwd = Path::new("/work/app");
        for rest in ["components/ui", "lib/utils", "hooks", "a/b/c/d"] {
            let alias = format!("{ROOT_IMPORT_MARKER}{rest}");
            assert_eq!(resolve_alias(&alias, cwd), cwd.join("src").join(rest));
        }
    }

    #[test]
    fn test_plain_alias_joins_cwd() {
        let cwd = Path::new("/work/app");
        for alias in ["components/ui", "lib/utils", "src/lib", "~/x"] {
            assert_eq!(resolve_alias(alias, cwd), cwd.join(alias));
        }
    }

    #[test]
    fn test_marker_must_be_prefix() {
        let cwd = Path::new("/work/app");
        assert_eq!(resolve_alias("x/@/y", cwd), cwd.join("x/@/y"));
        assert_eq!(resolve_alias("@components", cwd), cwd.join("@components"));
    }

    #[test]
    fn test_absolute_segments_stay_under_cwd() {
        let cwd = Path::new("/work/app");
        assert_eq!(resolve_alias("@//abs", cwd), cwd.join("src/abs"));
        assert_eq!(resolve_alias("/abs/ui", cwd), cwd.join("abs/ui"));
        assert_eq!(join_relative(cwd, "//tmp/x.tsx"), cwd.join("tmp/x.tsx"));
        assert_eq!(join_relative(cwd, "./a/./b"), cwd.join("a/b"));
    }

    #[test]
    fn test_validate_registry_path() {
        for ok in ["ui/button.tsx", "lib/utils.ts", "hooks/use-toast.ts", "./ui/a.tsx", "a..b.ts"] {
            assert!(validate_registry_path(ok).is_ok(), "{ok}");
        }
        for bad in ["/etc/evil.ts", "ui/../../x.ts", "../x.ts", "\\evil.ts", "ui\\..\\x.ts"] {
            let err = validate_registry_path(bad).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<ArkitectError>(), Some(ArkitectError::InvalidRegistryPath { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_alias_style() {
        assert_eq!(AliasStyle::of("@/lib/utils"), AliasStyle::File);
        assert_eq!(AliasStyle::of("@/lib/"), AliasStyle::Directory);
        assert_eq!(AliasStyle::of("lib/"), AliasStyle::Directory);
        assert_eq!(AliasStyle::of("lib"), AliasStyle::File);
    }
}
