//! Property Explorer - browse, save and list real-estate properties from the terminal
//!
//! This library holds the state and rules behind the "Airben Be" property discovery app:
//!
//! - A read-only property catalog with free-text and structured search
//! - Favorites, viewing inquiries, user listings and preferences persisted as JSON documents
//!   in a local data directory
//! - The multi-step listing and onboarding wizards, including their simulated delays
//! - Route parsing for the app's URL-like navigation paths
//!
//! Presentation shells (the interactive browser in [`tui`] and the subcommands in [`cli`])
//! drive the core through the [`host::Host`] trait.
//!
//! # Example
//!
//! ```
//! use property_explorer::catalog::Catalog;
//! use property_explorer::filters::parse_filter;
//!
//! let catalog = Catalog::builtin()?;
//! let filter = parse_filter("type:house beds:3+")?;
//! for property in catalog.search(&filter) {
//!     println!("{} ({})", property.title, property.location);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod auth;
pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod host;
pub mod inquiries;
pub mod logging;
pub mod models;
pub mod profile;
pub mod routes;
pub mod storage;
pub mod tasks;
pub mod tui;
pub mod utils;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::{AppConfig, AppContext};
pub use host::{Host, MessageKind};
pub use routes::Route;
pub use storage::Repository;
