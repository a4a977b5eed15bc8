//! Per-ecosystem dependency name extractors
//!
//! Three pure, non-failing transforms from raw manifest text to normalized
//! (lowercased, trimmed) dependency names. A malformed input never produces
//! an error; unparsable lines are skipped and a broken `package.json` yields
//! an empty list.

use serde::Deserialize;
use serde_json::Value;

/// Normalizes a raw name: trims, lowercases, drops empties
pub(crate) fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: serde_json::Map<String, Value>,

    #[serde(default, rename = "devDependencies")]
    dev_dependencies: serde_json::Map<String, Value>,
}

/// Extracts dependency names from `package.json` content
///
/// Unions the key sets of `dependencies` and `devDependencies`. Returns an
/// empty list when the content is not a valid JSON object.
pub fn package_json_dependencies(content: &str) -> Vec<String> {
    let manifest: PackageManifest = match serde_json::from_str(content) {
        Ok(manifest) => manifest,
        Err(_) => return Vec::new(),
    };

    manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
        .filter_map(|name| normalize(name))
        .collect()
}

/// Extracts package names from `requirements.txt` content
///
/// Skips blank lines and `#` comments; the name is the substring before the
/// first version-constraint operator (`<`, `>`, `=`, `!`, `~`). Line order is
/// preserved.
pub fn requirements_dependencies(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|raw| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let name = line.split(['<', '>', '=', '!', '~']).next().unwrap_or("");
            normalize(name)
        })
        .collect()
}

/// Extracts module paths from `go.mod` content
///
/// Skips blank lines and `//` comments. A `require X ...` line yields X; any
/// other line whose first token is not `module`, `go`, or `replace` yields
/// its first token, which picks up the bare module paths inside multi-line
/// `require (...)` blocks.
pub fn go_mod_dependencies(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|raw| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") {
                return None;
            }

            let mut tokens = line.split_whitespace();
            let first = tokens.next()?;

            if first == "require" {
                tokens.next().and_then(normalize)
            } else if matches!(first, "module" | "go" | "replace") {
                None
            } else {
                normalize(first)
            }
        })
        .collect()
}
