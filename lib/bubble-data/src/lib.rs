//! # Bubble Data
//!
//! Typed async client for the [Bubble.io](https://bubble.io) Data API.
//!
//! Declare a struct per Bubble "thing type", implement [`DataRecord`] for
//! it, and use [`DataApiClient`] to create, fetch, search, list, and update
//! records in a tenant application's data store. Every request targets
//! `https://{app}.bubbleapps.io[/{version}]/api/1.1/obj/{type}` and carries
//! a bearer API key.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bubble_data::{Constraint, DataApiClient, DataRecord, RecordBase, SearchQuery, SortOrder};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Task {
//!     #[serde(flatten)]
//!     base: RecordBase,
//!     title: String,
//!     #[serde(default)]
//!     done: bool,
//! }
//!
//! #[derive(Debug, Serialize)]
//! struct TaskFields {
//!     title: String,
//!     done: bool,
//! }
//!
//! impl DataRecord for Task {
//!     const TYPE_NAME: &'static str = "task";
//!     type Fields = TaskFields;
//!     fn base(&self) -> &RecordBase {
//!         &self.base
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), bubble_data::DataApiError> {
//! let client = DataApiClient::builder()
//!     .with_app_name("myapp")
//!     .with_api_key(std::env::var("BUBBLE_API_KEY").unwrap_or_default())
//!     .build()?;
//!
//! // Create, then read back.
//! let id = client
//!     .create::<Task>(&TaskFields { title: "ship it".into(), done: false })
//!     .await?;
//! let mut task: Task = client.get_by_id(&id).await?;
//!
//! // Update.
//! task.done = true;
//! client.save(&task).await?;
//!
//! // Paginated listing, newest first.
//! let open = SearchQuery::new()
//!     .with_constraint(Constraint::new("done", "equals", false))
//!     .with_sort(SortOrder::descending("Created Date"));
//! let open_tasks: Vec<Task> = client.get_all(&open).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! The client is a thin shim over the remote REST contract: one HTTP round
//! trip per operation ([`DataApiClient::get_all`] pages sequentially), no
//! retries, no caching, no client-side rate limiting. Failures propagate to
//! the caller as [`DataApiError`]; nothing is caught or retried internally.

mod client;
mod record;

pub use self::client::{
    Constraint, DataApiClient, DataApiClientBuilder, DataApiError, SearchPage, SearchQuery,
    SecureString, SortOrder,
};
pub use self::record::{DataRecord, RecordBase};
