use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use tracing::debug;
use url::Url;

use crate::record::DataRecord;

mod builder;
pub use self::builder::DataApiClientBuilder;

mod auth;
pub use self::auth::SecureString;

mod error;
pub use self::error::DataApiError;

mod query;
pub use self::query::{Constraint, SearchQuery, SortOrder};

mod response;
pub use self::response::SearchPage;
use self::response::{CreateReply, ObjectEnvelope, SearchEnvelope};

/// Status value the remote service reports on a successful create.
const CREATE_SUCCESS_STATUS: &str = "success";

/// Async client for the Bubble Data API.
///
/// All operations are generic over a [`DataRecord`] type and address the
/// type's collection at
/// `https://{app}.bubbleapps.io[/{version}]/api/1.1/obj/{TYPE_NAME}`,
/// authenticating every request with the configured bearer key. Use
/// [`DataApiClientBuilder`] to create instances.
///
/// Every operation is a single independent round trip (except
/// [`get_all`](Self::get_all), which pages sequentially); there is no retry,
/// caching, or rate-limit handling, and timeouts are whatever the underlying
/// `reqwest::Client` is configured with.
///
/// # Example
///
/// ```rust,no_run
/// use bubble_data::{Constraint, DataApiClient, DataRecord, RecordBase, SearchQuery};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Task {
///     #[serde(flatten)]
///     base: RecordBase,
///     title: String,
/// }
///
/// #[derive(Debug, Serialize)]
/// struct TaskFields {
///     title: String,
/// }
///
/// impl DataRecord for Task {
///     const TYPE_NAME: &'static str = "task";
///     type Fields = TaskFields;
///     fn base(&self) -> &RecordBase {
///         &self.base
///     }
/// }
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), bubble_data::DataApiError> {
/// let client = DataApiClient::builder()
///     .with_app_name("myapp")
///     .with_api_key("my-api-key")
///     .build()?;
///
/// let id = client
///     .create::<Task>(&TaskFields { title: "write docs".into() })
///     .await?;
/// let task: Task = client.get_by_id(&id).await?;
///
/// let open = SearchQuery::new()
///     .with_constraint(Constraint::new("done", "equals", false));
/// let tasks: Vec<Task> = client.get_all(&open).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DataApiClient {
    client: reqwest::Client,
    /// Base URL ending in `/api/1.1/obj`; collection and object URLs are
    /// derived by appending path segments.
    pub(crate) api_root: Url,
    api_key: SecureString,
}

impl DataApiClient {
    /// Creates a [`DataApiClientBuilder`] to configure a client.
    pub fn builder() -> DataApiClientBuilder {
        DataApiClientBuilder::default()
    }

    /// Fetches the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Fails with [`DataApiError::EmptyBody`] when the reply carries no body,
    /// and with [`DataApiError::Transport`] on network failures or
    /// non-success HTTP statuses. A missing record is not distinguished from
    /// other failures.
    pub async fn get_by_id<R: DataRecord>(&self, id: &str) -> Result<R, DataApiError> {
        let url = self.object_url(R::TYPE_NAME, Some(id))?;
        debug!(%url, record_type = R::TYPE_NAME, "fetching record");

        let response = self.authorized(Method::GET, url)?.send().await?;
        let body = response.error_for_status()?.text().await?;
        if body.trim().is_empty() {
            return Err(DataApiError::EmptyBody { operation: "fetch" });
        }

        let envelope: ObjectEnvelope<R> = serde_json::from_str(&body)?;
        Ok(envelope.response)
    }

    /// Creates a new record from the given fields and returns its
    /// server-assigned identifier.
    ///
    /// The fields exclude the [`RecordBase`](crate::RecordBase) attributes;
    /// identifier and timestamps are assigned by the server.
    ///
    /// # Errors
    ///
    /// Fails with [`DataApiError::EmptyBody`] when the reply carries no body,
    /// and with [`DataApiError::CreateFailed`] when the reply status is not
    /// the success value or no identifier was returned; the error message
    /// embeds the returned status.
    pub async fn create<R: DataRecord>(&self, fields: &R::Fields) -> Result<String, DataApiError> {
        let url = self.object_url(R::TYPE_NAME, None)?;
        debug!(%url, record_type = R::TYPE_NAME, "creating record");

        let response = self
            .authorized(Method::POST, url)?
            .json(fields)
            .send()
            .await?;
        let body = response.error_for_status()?.text().await?;
        if body.trim().is_empty() {
            return Err(DataApiError::EmptyBody { operation: "create" });
        }

        let reply: CreateReply = serde_json::from_str(&body)?;
        let status = reply.status.unwrap_or_default();
        if status != CREATE_SUCCESS_STATUS {
            return Err(DataApiError::CreateFailed { status });
        }
        reply.id.ok_or(DataApiError::CreateFailed { status })
    }

    /// Fetches one page of records matching the query.
    ///
    /// The returned [`SearchPage`] carries the results in server order plus
    /// the remaining count used as the pagination termination signal.
    ///
    /// # Errors
    ///
    /// Fails with [`DataApiError::EmptyBody`] when the reply carries no body,
    /// and with [`DataApiError::SearchFailed`] when it lacks the expected
    /// payload shape.
    pub async fn search<R: DataRecord>(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage<R>, DataApiError> {
        let mut url = self.object_url(R::TYPE_NAME, None)?;
        url.set_query(Some(&query.to_query_string()?));
        debug!(%url, record_type = R::TYPE_NAME, "searching records");

        let response = self.authorized(Method::GET, url)?.send().await?;
        let body = response.error_for_status()?.text().await?;
        if body.trim().is_empty() {
            return Err(DataApiError::EmptyBody { operation: "search" });
        }

        let envelope: SearchEnvelope<R> = serde_json::from_str(&body)?;
        let payload = envelope.response.ok_or(DataApiError::SearchFailed)?;
        Ok(SearchPage {
            results: payload.results,
            remaining: payload.remaining,
        })
    }

    /// Fetches every record matching the query, paging sequentially.
    ///
    /// Issues [`search`](Self::search) with a cursor starting at 0 and
    /// incremented by one page per round trip, concatenating pages in
    /// request order until the remaining count reaches zero. Page N+1 is not
    /// requested before page N is processed, so total latency scales
    /// linearly with the collection size. Any cursor set on the query is
    /// ignored; the loop controls it.
    ///
    /// # Errors
    ///
    /// Propagates the first [`search`](Self::search) failure; accumulated
    /// pages are discarded, nothing partial is returned.
    pub async fn get_all<R: DataRecord>(&self, query: &SearchQuery) -> Result<Vec<R>, DataApiError> {
        let mut records = Vec::new();
        let mut page_query = query.clone();
        let mut cursor = 0;

        loop {
            page_query.cursor = Some(cursor);
            let page = self.search::<R>(&page_query).await?;
            records.extend(page.results);
            if page.remaining <= 0 {
                break;
            }
            cursor += 1;
        }

        debug!(
            record_type = R::TYPE_NAME,
            count = records.len(),
            pages = cursor + 1,
            "fetched all records"
        );
        Ok(records)
    }

    /// Fetches the first record matching the query, or `None` when nothing
    /// matches.
    ///
    /// # Errors
    ///
    /// Propagates [`search`](Self::search) failures.
    pub async fn get_one<R: DataRecord>(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<R>, DataApiError> {
        let page = self.search::<R>(query).await?;
        Ok(page.results.into_iter().next())
    }

    /// Saves the record with a partial-update request.
    ///
    /// The entire current record state, base attributes included, is sent as
    /// the PATCH payload. The remote contract defines no reply shape for
    /// PATCH, so only the HTTP status is checked.
    ///
    /// # Errors
    ///
    /// Fails with [`DataApiError::MissingRecordId`] before any network call
    /// when the record carries no identifier; otherwise propagates transport
    /// failures unmodified.
    pub async fn save<R>(&self, record: &R) -> Result<(), DataApiError>
    where
        R: DataRecord + serde::Serialize,
    {
        let id = record.base().id.as_str();
        if id.is_empty() {
            return Err(DataApiError::MissingRecordId);
        }

        let url = self.object_url(R::TYPE_NAME, Some(id))?;
        debug!(%url, record_type = R::TYPE_NAME, "saving record");

        let response = self
            .authorized(Method::PATCH, url)?
            .json(record)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Derives the collection URL for a record type, with an optional
    /// trailing object identifier.
    fn object_url(&self, type_name: &str, id: Option<&str>) -> Result<Url, DataApiError> {
        let mut url = self.api_root.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|()| DataApiError::InvalidBaseUrl {
                        error: "URL cannot carry path segments".to_string(),
                    })?;
            segments.push(type_name);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Starts a request carrying the bearer authorization header.
    fn authorized(&self, method: Method, url: Url) -> Result<reqwest::RequestBuilder, DataApiError> {
        let header = self.api_key.to_bearer_header()?;
        Ok(self.client.request(method, url).header(AUTHORIZATION, header))
    }
}
