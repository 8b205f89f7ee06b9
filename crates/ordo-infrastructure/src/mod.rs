//! # Infrastructure Layer
//!
//! Hosts the ordering engine on a `dill` catalog, plus the cross-cutting
//! concerns around it.
//!
//! ## Module Categories
//!
//! ### Dependency Injection
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Order keys as builder metadata, ordered dependency specs, composition root |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`constants`] | Configuration and logging constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions for foreign errors |

// dill's `bind` requires `Impl: Unsize<Iface>`
#![feature(unsize)]

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{
    CatalogBuilderExt, ComponentEntry, Ordered, OrderedBatch, OrderedBuilderExt, OrderedTagged,
    ResolveOrderedExt, build_catalog,
};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
