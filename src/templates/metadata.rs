//! Template metadata extraction.
//!
//! Templates carry their metadata as Liquid `{% assign %}` directives embedded
//! in the file text. The directives form a fixed mini-syntax, so extraction is
//! plain pattern matching over the raw content rather than a template parse:
//! each field is matched independently wherever it first occurs.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GLOBS;

/// Name used when a filename yields no usable display name.
const FALLBACK_NAME: &str = "Custom Rule";

/// Key assigned to the bare `example` template.
const DEFAULT_EXAMPLE_KEY: &str = "auth";

/// Metadata extracted from one template file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// Normalized lookup key, derived from the filename. Unique within a
    /// registry snapshot.
    pub key: String,

    /// Human-readable title, from the content block header or the filename.
    pub name: String,

    /// Human-readable summary, from the `rule_description` directive.
    pub description: String,

    /// Location of the template file at scan time.
    pub path: PathBuf,

    /// File glob pattern this template applies to.
    pub globs: String,

    /// Whether the rule applies unconditionally.
    #[serde(rename = "alwaysApply")]
    pub always_apply: bool,
}

/// Compiled patterns for the directive mini-syntax.
///
/// Built once and reused across files; each pattern captures the value of one
/// metadata field.
#[derive(Debug)]
pub struct DirectivePatterns {
    rule_description: Regex,
    globs: Regex,
    always_apply: Regex,
    content_header: Regex,
}

impl Default for DirectivePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectivePatterns {
    /// Compile the directive patterns. The patterns are fixed literals, so
    /// compilation cannot fail at runtime.
    pub fn new() -> Self {
        Self {
            rule_description: Regex::new(
                r#"\{%\s*assign\s+rule_description\s*=\s*["']([^"']+)["']"#,
            )
            .unwrap(),
            globs: Regex::new(r#"\{%\s*assign\s+globs\s*=\s*["']([^"']+)["']"#).unwrap(),
            always_apply: Regex::new(r"\{%\s*assign\s+alwaysApply\s*=\s*(true|false)").unwrap(),
            content_header: Regex::new(r"(?s)\{%\s*block\s+content\s*%\}.*?##\s*([^\n]+)").unwrap(),
        }
    }

    /// Extract metadata from a template file's raw content.
    ///
    /// `extension` is the template suffix to strip when deriving the base
    /// filename. Every field has a filename-based fallback, so parsing always
    /// produces a complete record.
    pub fn parse(&self, path: &Path, content: &str, extension: &str) -> TemplateMetadata {
        let base = base_file_name(path, extension);

        let description = self
            .rule_description
            .captures(content)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| format!("Rules for {base}"));

        let globs = self
            .globs
            .captures(content)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| DEFAULT_GLOBS.to_string());

        let always_apply = self
            .always_apply
            .captures(content)
            .is_some_and(|c| &c[1] == "true");

        let name = self
            .content_header
            .captures(content)
            .map(|c| c[1].trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| derive_name(base));

        TemplateMetadata {
            key: derive_key(base),
            name,
            description,
            path: path.to_path_buf(),
            globs,
            always_apply,
        }
    }
}

/// Filename with the template extension suffix stripped.
pub fn base_file_name<'a>(path: &'a Path, extension: &str) -> &'a str {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.strip_suffix(extension).unwrap_or(name)
}

/// Normalize a base filename into a registry key.
///
/// `example-foo-bar` → `foo_bar`; the bare `example` template keeps the
/// well-known key `auth`.
fn derive_key(base: &str) -> String {
    let key = match base.strip_prefix("example-") {
        Some(rest) => rest,
        None if base == "example" => DEFAULT_EXAMPLE_KEY,
        None => base,
    };
    key.replace('-', "_")
}

/// Turn a base filename into a display name when the content has no header.
fn derive_name(base: &str) -> String {
    let stripped = match base.strip_prefix("example") {
        Some(rest) => rest.strip_prefix('-').unwrap_or(rest),
        None => base,
    };
    let spaced = stripped.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => FALLBACK_NAME.to_string(),
    }
}

/// Variable set handed to a downstream renderer when instantiating a
/// template. Field names mirror the directives the templates themselves use.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVars {
    pub rule_description: String,
    pub globs: String,
    #[serde(rename = "alwaysApply")]
    pub always_apply: bool,
}

impl TemplateVars {
    /// Create vars with the default glob pattern and `always_apply` off.
    pub fn new(rule_description: impl Into<String>) -> Self {
        Self {
            rule_description: rule_description.into(),
            globs: DEFAULT_GLOBS.to_string(),
            always_apply: false,
        }
    }

    /// Override the glob pattern.
    pub fn with_globs(mut self, globs: impl Into<String>) -> Self {
        self.globs = globs.into();
        self
    }

    /// Mark the rule as always applicable.
    pub fn with_always_apply(mut self, always_apply: bool) -> Self {
        self.always_apply = always_apply;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEMPLATE_EXTENSION;

    fn parse(file_name: &str, content: &str) -> TemplateMetadata {
        DirectivePatterns::new().parse(
            &Path::new("/templates").join(file_name),
            content,
            TEMPLATE_EXTENSION,
        )
    }

    #[test]
    fn description_from_directive() {
        let meta = parse(
            "example-api.mdc.liquid",
            r#"{% assign rule_description = "API conventions" %}"#,
        );
        assert_eq!(meta.description, "API conventions");
    }

    #[test]
    fn description_accepts_single_quotes() {
        let meta = parse(
            "example-api.mdc.liquid",
            "{% assign rule_description = 'quoted once' %}",
        );
        assert_eq!(meta.description, "quoted once");
    }

    #[test]
    fn description_defaults_to_base_filename() {
        let meta = parse("example-api.mdc.liquid", "no directives here");
        assert_eq!(meta.description, "Rules for example-api");
    }

    #[test]
    fn globs_from_directive() {
        let meta = parse(
            "example.mdc.liquid",
            r#"{% assign globs = "src/**/*.rs" %}"#,
        );
        assert_eq!(meta.globs, "src/**/*.rs");
    }

    #[test]
    fn globs_defaults_when_absent() {
        let meta = parse("example.mdc.liquid", "");
        assert_eq!(meta.globs, DEFAULT_GLOBS);
    }

    #[test]
    fn always_apply_true_when_directive_true() {
        let meta = parse(
            "example.mdc.liquid",
            "prefix text {% assign alwaysApply = true %} suffix",
        );
        assert!(meta.always_apply);
    }

    #[test]
    fn always_apply_false_when_directive_false() {
        let meta = parse("example.mdc.liquid", "{% assign alwaysApply = false %}");
        assert!(!meta.always_apply);
    }

    #[test]
    fn always_apply_false_when_absent() {
        let meta = parse("example.mdc.liquid", "nothing");
        assert!(!meta.always_apply);
    }

    #[test]
    fn name_from_content_block_header() {
        let content = "{% block content %}\nsome intro\n## Authentication Rules\nbody";
        let meta = parse("example.mdc.liquid", content);
        assert_eq!(meta.name, "Authentication Rules");
    }

    #[test]
    fn name_header_is_trimmed() {
        let content = "{% block content %}##   Padded Name   \nbody";
        let meta = parse("example.mdc.liquid", content);
        assert_eq!(meta.name, "Padded Name");
    }

    #[test]
    fn name_ignores_header_outside_content_block() {
        let meta = parse("example-db-access.mdc.liquid", "## Not In A Block\n");
        assert_eq!(meta.name, "Db access");
    }

    #[test]
    fn name_derived_from_filename_strips_example_prefix() {
        let meta = parse("example-api-routes.mdc.liquid", "");
        assert_eq!(meta.name, "Api routes");
    }

    #[test]
    fn name_falls_back_for_bare_example() {
        let meta = parse("example.mdc.liquid", "");
        assert_eq!(meta.name, "Custom Rule");
    }

    #[test]
    fn key_for_bare_example_is_auth() {
        let meta = parse("example.mdc.liquid", "");
        assert_eq!(meta.key, "auth");
    }

    #[test]
    fn key_strips_example_prefix() {
        let meta = parse("example-foo.mdc.liquid", "");
        assert_eq!(meta.key, "foo");
    }

    #[test]
    fn key_converts_dashes_to_underscores() {
        let meta = parse("example-foo-bar.mdc.liquid", "");
        assert_eq!(meta.key, "foo_bar");
    }

    #[test]
    fn key_for_non_example_filename_keeps_name() {
        let meta = parse("custom-rules.mdc.liquid", "");
        assert_eq!(meta.key, "custom_rules");
    }

    #[test]
    fn base_file_name_strips_double_extension() {
        let path = Path::new("/t/example-api.mdc.liquid");
        assert_eq!(base_file_name(path, TEMPLATE_EXTENSION), "example-api");
    }

    #[test]
    fn base_file_name_passes_through_other_suffixes() {
        let path = Path::new("/t/notes.md");
        assert_eq!(base_file_name(path, TEMPLATE_EXTENSION), "notes.md");
    }

    #[test]
    fn directives_extracted_independently_of_order() {
        let content = r#"
{% assign alwaysApply = true %}
{% assign globs = "**/*.go" %}
{% assign rule_description = "Go rules" %}
{% block content %}
## Go Conventions
"#;
        let meta = parse("example-go.mdc.liquid", content);
        assert_eq!(meta.description, "Go rules");
        assert_eq!(meta.globs, "**/*.go");
        assert!(meta.always_apply);
        assert_eq!(meta.name, "Go Conventions");
        assert_eq!(meta.key, "go");
    }

    #[test]
    fn template_vars_defaults() {
        let vars = TemplateVars::new("desc");
        assert_eq!(vars.globs, DEFAULT_GLOBS);
        assert!(!vars.always_apply);
    }

    #[test]
    fn template_vars_builders() {
        let vars = TemplateVars::new("desc")
            .with_globs("**/*.py")
            .with_always_apply(true);
        assert_eq!(vars.globs, "**/*.py");
        assert!(vars.always_apply);
    }
}
