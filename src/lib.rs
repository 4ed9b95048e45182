//! Rulekit - template discovery and metadata extraction for rule templates.
//!
//! Rulekit scans a directory tree for `.mdc.liquid` rule templates, extracts
//! the metadata embedded in each file's directives, and serves lookups from a
//! lazily built in-memory registry. It covers the discovery step that precedes
//! rendering; it is not a templating engine.
//!
//! # Modules
//!
//! - [`constants`] - Fixed extensions, glob defaults, and skip-sets
//! - [`error`] - Error types and result aliases
//! - [`templates`] - Scanner, metadata parser, and registry
//!
//! # Example
//!
//! ```no_run
//! use rulekit::templates::TemplateRegistry;
//!
//! let mut registry = TemplateRegistry::new("templates");
//! let template = registry.get("auth")?;
//! println!("{}", template.content);
//! # Ok::<(), rulekit::RulekitError>(())
//! ```

pub mod constants;
pub mod error;
pub mod templates;

pub use error::{Result, RulekitError};
