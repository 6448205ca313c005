//! Fold typographic Unicode to plain ASCII.
//!
//! ```
//! use textclean::normalize;
//!
//! assert_eq!(normalize("“Hello’s”—world…"), "\"Hello's\" - world...");
//! ```

pub mod batch;
pub mod catalog;
pub mod config;
pub mod form;
pub mod logging;
pub mod normalizer;
pub mod pipeline;
pub mod rule;
pub mod source;
pub mod unicode;

pub use catalog::{RULES, RuleDescriptor, RuleId};
pub use config::{ConfigError, DEFAULT_CONFIG, RuleConfig};
pub use form::{Form, FormError, FormOutput};
pub use normalizer::{Normalizer, NormalizerBuilder, normalize, normalize_with};
