//! Expansion of `{{include:path}}` placeholders
//!
//! Every placeholder is replaced by the trimmed contents of the file it names,
//! resolved against a base directory (the plugin root). Expansion is a single
//! pass: text pulled in from an include is never scanned again.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use crate::core::error::{BuildError, Result};

/// `{{include:<path>}}`, capturing `<path>` up to the first `}}`
static INCLUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{include:(.+?)\}\}").expect("include pattern is valid"));

/// A single include placeholder found in template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full marker, e.g. `{{include:shared/intro.md}}`
    pub text: &'a str,
    /// The captured relative path, e.g. `shared/intro.md`
    pub relative_path: &'a str,
    /// Byte range of the marker within the scanned content
    pub span: Range<usize>,
}

/// Find all placeholders in `content`, first to last.
pub fn find_placeholders(content: &str) -> Vec<Placeholder<'_>> {
    INCLUDE_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?;
            Some(Placeholder {
                text: whole.as_str(),
                relative_path: path.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Resolve an include path against `base_path`.
///
/// Root and drive prefixes of `relative` are dropped, so absolute-looking
/// paths still land under the base. `.` and `..` are folded lexically;
/// `..` never climbs above a filesystem root.
pub fn resolve_include_path(base_path: &Path, relative: &str) -> PathBuf {
    let relative_components = Path::new(relative)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir));

    let mut resolved: Vec<Component<'_>> = Vec::new();
    for component in base_path.components().chain(relative_components) {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.last() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => resolved.push(component),
            },
            other => resolved.push(other),
        }
    }

    if resolved.is_empty() {
        return PathBuf::from(".");
    }
    resolved.into_iter().collect()
}

/// Trim whitespace, including a byte order mark left by some editors
fn trim_included(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Replace every include placeholder in `content` with the trimmed contents
/// of the referenced file, resolved relative to `base_path`.
///
/// Files are read one at a time in placeholder order. The first file that
/// cannot be read aborts the expansion with [`BuildError::IncludeResolution`].
pub async fn expand_includes(content: &str, base_path: &Path) -> Result<String> {
    let placeholders = find_placeholders(content);
    if placeholders.is_empty() {
        return Ok(content.to_string());
    }

    debug!(
        count = placeholders.len(),
        base = %base_path.display(),
        "Expanding include placeholders"
    );

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;

    for placeholder in &placeholders {
        let file_path = resolve_include_path(base_path, placeholder.relative_path);

        let included = match fs::read_to_string(&file_path).await {
            Ok(text) => text,
            Err(e) => {
                error!(path = %file_path.display(), error = %e, "Failed to include");
                return Err(BuildError::include(file_path, e));
            }
        };

        debug!(path = %file_path.display(), "Resolved include");

        result.push_str(&content[cursor..placeholder.span.start]);
        result.push_str(trim_included(&included));
        cursor = placeholder.span.end;
    }

    result.push_str(&content[cursor..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    async fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, content).await.unwrap();
    }

    #[test]
    fn test_find_placeholders_is_non_greedy() {
        let content = "{{include:a.md}} and {{include:b.md}}";
        let found = find_placeholders(content);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "{{include:a.md}}");
        assert_eq!(found[0].relative_path, "a.md");
        assert_eq!(found[0].span, 0..16);
        assert_eq!(found[1].relative_path, "b.md");
    }

    #[test]
    fn test_find_placeholders_ignores_other_markers() {
        let content = "{{ name }}\n{{include:}}\n{include:a.md}\n{{INCLUDE:a.md}}";
        assert!(find_placeholders(content).is_empty());
    }

    #[tokio::test]
    async fn test_expand_trims_included_content() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "  Hello World  \n").await;

        let expanded = expand_includes("Before\n{{include:a.md}}\nAfter", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "Before\nHello World\nAfter");
    }

    #[tokio::test]
    async fn test_expand_trims_byte_order_mark() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "\u{FEFF}Hello\n").await;

        let expanded = expand_includes("[{{include:a.md}}]", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "[Hello]");
    }

    #[test]
    fn test_resolve_include_path_folds_dots() {
        let base = Path::new("/plugin");
        assert_eq!(
            resolve_include_path(base, "./shared/./a.md"),
            PathBuf::from("/plugin/shared/a.md")
        );
        assert_eq!(
            resolve_include_path(base, "missing_dir/../a.md"),
            PathBuf::from("/plugin/a.md")
        );
        assert_eq!(
            resolve_include_path(base, "../sibling/a.md"),
            PathBuf::from("/sibling/a.md")
        );
        assert_eq!(
            resolve_include_path(base, "../../../a.md"),
            PathBuf::from("/a.md")
        );
    }

    #[test]
    fn test_resolve_include_path_keeps_absolute_paths_under_base() {
        assert_eq!(
            resolve_include_path(Path::new("/plugin"), "/shared/a.md"),
            PathBuf::from("/plugin/shared/a.md")
        );
    }

    #[test]
    fn test_resolve_include_path_with_relative_base() {
        assert_eq!(resolve_include_path(Path::new("."), "a.md"), PathBuf::from("a.md"));
        assert_eq!(
            resolve_include_path(Path::new("."), "../a.md"),
            PathBuf::from("../a.md")
        );
        assert_eq!(resolve_include_path(Path::new("."), "a/.."), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_expand_leading_slash_resolves_under_base() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "shared/a.md", "from plugin").await;

        let expanded = expand_includes("{{include:/shared/a.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "from plugin");
    }

    #[tokio::test]
    async fn test_expand_parent_of_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "found").await;

        let expanded = expand_includes("{{include:missing_dir/../a.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "found");
    }

    #[tokio::test]
    async fn test_expand_never_reads_absolute_path_outside_base() {
        let plugin_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();
        write(outside_dir.path(), "secret.md", "OUTSIDE").await;
        let outside = outside_dir.path().join("secret.md");
        let template = format!("{{{{include:{}}}}}", outside.display());

        let result = expand_includes(&template, plugin_dir.path()).await;

        match result {
            Err(BuildError::IncludeResolution { path, .. }) => {
                assert!(path.starts_with(plugin_dir.path()));
            }
            other => panic!("Expected IncludeResolution, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_expand_multiple_placeholders_in_order() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "first\n").await;
        write(temp_dir.path(), "b.md", "second\n").await;

        let expanded = expand_includes("[{{include:a.md}}|{{include:b.md}}]", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "[first|second]");
    }

    #[tokio::test]
    async fn test_expand_repeated_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "shared").await;

        let expanded = expand_includes("{{include:a.md}} / {{include:a.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "shared / shared");
    }

    #[tokio::test]
    async fn test_expand_resolves_nested_paths_from_base() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/shared/rules.md", "\n- rule one\n- rule two\n\n").await;

        let expanded = expand_includes("Rules:\n{{include:src/shared/rules.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "Rules:\n- rule one\n- rule two");
    }

    #[tokio::test]
    async fn test_expand_is_single_pass() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "outer.md", "outer {{include:inner.md}}").await;
        write(temp_dir.path(), "inner.md", "inner").await;

        let expanded = expand_includes("{{include:outer.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "outer {{include:inner.md}}");
    }

    #[tokio::test]
    async fn test_expand_inserts_content_literally() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "price.md", "costs $& and $1").await;

        let expanded = expand_includes("{{include:price.md}}", temp_dir.path())
            .await
            .unwrap();

        assert_eq!(expanded, "costs $& and $1");
    }

    #[tokio::test]
    async fn test_expand_without_placeholders_is_identity() {
        let temp_dir = TempDir::new().unwrap();
        let content = "# Title\n\nNo includes here {{ not_an_include }}\n";

        let expanded = expand_includes(content, temp_dir.path()).await.unwrap();

        assert_eq!(expanded, content);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_expand_missing_include_fails() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "present").await;

        let result = expand_includes(
            "{{include:a.md}} {{include:missing.md}}",
            temp_dir.path(),
        )
        .await;

        match result {
            Err(BuildError::IncludeResolution { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("missing.md"));
            }
            other => panic!("Expected IncludeResolution, got {:?}", other),
        }
        assert!(logs_contain("Failed to include"));
        assert!(logs_contain("missing.md"));
    }

    #[tokio::test]
    async fn test_expand_directory_include_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("shared")).await.unwrap();

        let result = expand_includes("{{include:shared}}", temp_dir.path()).await;

        assert!(matches!(
            result,
            Err(BuildError::IncludeResolution { .. })
        ));
    }
}
