//! # edu-app
//!
//! Feature controllers for the EduBot client.
//!
//! [`App`] owns the API client, the fallback policy, the session store, and
//! the per-login [`AppState`]. Each module under [`features`] adds one area's
//! operations to `App` through its own `impl App` block and returns typed
//! views from [`view`] wrapped in a [`Page`] that records whether the data
//! came from the live backend or from demo fixtures.

pub mod app;
pub mod error;
pub mod features;
pub mod state;
pub mod view;

pub use app::App;
pub use error::FeatureError;
pub use state::{AppState, PendingAction};
pub use view::Page;
