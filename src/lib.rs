//! Canteen management dashboard for SMK Telkom
//!
//! The crate is split into a pure core and an iced front end:
//!
//! - [`model`], [`seed`], [`collection`], [`view`], [`form`], [`router`] and
//!   [`confirm`] hold the records, their derived views and the edit buffers;
//! - [`workspace::Workspace`] owns all state and mirrors every mutation to a
//!   [`kantin_store::LocalStore`];
//! - [`app::App`] and the [`ui`] modules render and drive it.

pub mod app;
pub mod collection;
pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod format;
pub mod logging;
pub mod model;
pub mod router;
pub mod seed;
pub mod ui;
pub mod view;
pub mod workspace;

pub use app::{App, Message};
pub use config::Config;
pub use error::FormError;
pub use workspace::Workspace;
