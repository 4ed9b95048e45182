//! Template discovery, metadata extraction, and registry.
//!
//! Templates are files carrying a `.mdc.liquid` double extension anywhere
//! under a root directory, excluding layout/partial/vendor directories. Each
//! file embeds its metadata as Liquid `{% assign %}` directives; the filename
//! supplies a normalized lookup key.
//!
//! # Example
//!
//! ```no_run
//! use rulekit::templates::TemplateRegistry;
//!
//! let mut registry = TemplateRegistry::new("templates");
//! for template in registry.list() {
//!     println!("{}: {}", template.key, template.description);
//! }
//! ```

pub mod metadata;
pub mod registry;
pub mod scanner;

// Re-exports
pub use metadata::{DirectivePatterns, TemplateMetadata, TemplateVars};
pub use registry::{load_template, LoadedTemplate, TemplateRegistry};
pub use scanner::{DiscoveredTemplate, Scanner};
