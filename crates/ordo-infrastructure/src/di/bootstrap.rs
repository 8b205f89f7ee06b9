//! Composition root
//!
//! ```text
//! AppConfig ──▶ build_catalog ──▶ CatalogBuilder ──▶ Catalog
//!                   │
//!                   ├── add_value(AppConfig)
//!                   ├── configure(&mut builder)       caller registrations
//!                   └── validate()                    catalog.validate_on_build
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let catalog = build_catalog(&config, |builder| {
//!     builder
//!         .add_provider::<dyn Plugin, Audit, _>(Arc::new(Audit).order_by::<dyn Plugin>(1))
//!         .add_ordered::<dyn Plugin>();
//! })?;
//! let plugins = catalog.get_ordered::<dyn Plugin>()?;
//! ```

use dill::{Catalog, CatalogBuilder};
use ordo_domain::error::Result;
use tracing::info;

use crate::config::{AppConfig, validate_app_config};
use crate::error_ext::ErrorContext;

/// Build a catalog from configuration plus caller registrations
///
/// The configuration itself is registered, so components can inject
/// `Arc<AppConfig>`.
pub fn build_catalog<F>(config: &AppConfig, configure: F) -> Result<Catalog>
where
    F: FnOnce(&mut CatalogBuilder),
{
    validate_app_config(config)?;

    let mut builder = CatalogBuilder::new();
    builder.add_value(config.clone());
    configure(&mut builder);

    if config.catalog.validate_on_build {
        builder
            .validate()
            .injection_context("Catalog validation failed")?;
    }

    let catalog = builder.build();
    info!(
        builders = catalog.builders().count(),
        validated = config.catalog.validate_on_build,
        "Catalog ready"
    );
    Ok(catalog)
}
