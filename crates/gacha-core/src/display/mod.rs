//! Display formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes are wrapped in small newtypes so the
//! same recipe can read differently in a list, after a create, or after a
//! delete. Everything here produces markdown, which the CLI renders with
//! termimad or prints as-is when colors are disabled.
//!
//! ```rust
//! use gacha_core::{display::CreateResult, models::Recipe};
//!
//! let recipe = Recipe::new("uuid-1", "Chili con Carne").with_minutes(45);
//! let output = CreateResult::new(recipe).to_string();
//! assert!(output.contains("Added recipe 'Chili con Carne' (ID: uuid-1)"));
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`Recipes`])
//! - [`results`]: Create/update/delete/import outcomes
//! - [`status`]: One-line confirmations ([`OperationStatus`])
//! - [`dates`]: Short date labels used by the week plan
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod dates;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Recipes;
pub use dates::{DayLabel, ShortDate};
pub use results::{CreateResult, DeleteResult, ImportResult, UpdateResult};
pub use status::OperationStatus;
