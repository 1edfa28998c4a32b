//! Resource services.
//!
//! A service translates method calls on one resource kind into requests
//! and converts the responses into objects and pages.
//!
//! - [`ResourceService`]: `create`, `all`, `retrieve` and `get_next_page`
//!   for any kind, as default trait methods
//! - [`BaseService`]: the generic operations behind the trait
//! - [`BatchService`]: batches, plus buy/label/manifest verbs
//! - [`EventService`]: events, plus webhook payload lookups
//!
//! Bring [`ResourceService`] into scope to call the generic operations:
//!
//! ```rust,ignore
//! use easypost_api::services::ResourceService;
//!
//! let batch = client.batch().retrieve("batch_123").await?;
//! ```

mod base;
mod batch;
mod event;

pub use base::{BaseService, ResourceService};
pub use batch::BatchService;
pub use event::EventService;
