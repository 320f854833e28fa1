//! Value-source resolution for attributes, keys, discriminators and versions
//!
//! Mapping elements can name their relational values in several mutually
//! exclusive ways. This module validates the combination and normalizes it to
//! an ordered list of [`ValueSource`]s:
//!
//! - a `column` attribute yields one column
//! - a `formula` attribute yields one formula
//! - nested `<column>`/`<formula>` elements yield one source each, in order
//! - nothing at all yields an empty list
//!
//! # Example
//!
//! ```rust
//! use hbm_source::context::LocalBindingContext;
//! use hbm_source::elements::PropertyElement;
//! use hbm_source::value_source::{PropertyValueSources, build_value_sources};
//!
//! let property = PropertyElement {
//!     column: Some("total_amount".to_string()),
//!     ..PropertyElement::named("total")
//! };
//! let sources = build_value_sources(
//!     &LocalBindingContext::default(),
//!     &PropertyValueSources::new(&property),
//! )
//! .unwrap();
//! assert_eq!(sources[0].as_column().unwrap().name, "total_amount");
//! ```

mod adapters;
mod resolver;
mod types;

pub use adapters::{PropertyValueSources, TimestampValueSources};
pub use resolver::{ValueSourcesAdapter, build_value_sources};
pub use types::{ColumnSource, FormulaSource, TruthValue, ValueSource};
