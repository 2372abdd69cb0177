//! logpipe filters: built-in filter stages.
//!
//! The composition root owns the registry and asks this crate to add its
//! stages:
//!
//! ```
//! use logpipe_core::FilterRegistry;
//!
//! let mut registry = FilterRegistry::new();
//! logpipe_filters::register_builtin(&mut registry).unwrap();
//! assert!(registry.contains("remove_field"));
//! ```

pub mod field_path;
pub mod remove_field;

pub use field_path::{remove_path, FieldPath};
pub use remove_field::{RemoveFieldConfig, RemoveFieldFilter};

use logpipe_core::FilterRegistry;

/// Registers every built-in filter type.
pub fn register_builtin(registry: &mut FilterRegistry) -> logpipe_core::Result<()> {
    registry.register(remove_field::TYPE_NAME, RemoveFieldFilter::from_options)?;
    Ok(())
}

/// A fresh registry holding only the built-in filters.
pub fn builtin_registry() -> logpipe_core::Result<FilterRegistry> {
    let mut registry = FilterRegistry::new();
    register_builtin(&mut registry)?;
    Ok(registry)
}
