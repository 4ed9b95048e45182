//! Fixed values used during template discovery and parsing.

/// File suffix that marks a rule template (markdown-component + Liquid).
pub const TEMPLATE_EXTENSION: &str = ".mdc.liquid";

/// Glob pattern applied when a template carries no `globs` directive.
pub const DEFAULT_GLOBS: &str = "**/*.{ts,tsx,js,jsx}";

/// Directory names never descended into during a scan. Layouts and partials
/// are rendering inputs, not templates of their own.
pub const SKIP_DIRECTORIES: &[&str] = &["layout", "partials", "src", "node_modules"];

/// Path of the cursor layout file, relative to the template root.
pub const LAYOUT_TEMPLATE: &str = "layout/cursor.mdc.liquid";

/// Path of the shared header partial, relative to the template root.
pub const HEADER_PARTIAL: &str = "partials/header.mdc.liquid";

/// Source-file extensions covered by [`DEFAULT_GLOBS`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];
