use serde::Deserialize;

/// Reply envelope for a single-object read: `{ "response": { ...fields } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectEnvelope<T> {
    pub(crate) response: T,
}

/// Reply of a create call: `{ "status": "success", "id": "..." }`.
///
/// Both fields are optional on the wire; the client validates them.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateReply {
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) id: Option<String>,
}

/// Reply envelope of a search call.
///
/// The payload is optional so a malformed reply surfaces as a domain error
/// rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope<T> {
    pub(crate) response: Option<SearchBody<T>>,
}

/// Search payload: the page of results plus the pagination bookkeeping.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchBody<T> {
    pub(crate) results: Vec<T>,
    /// Count of matching records not yet returned; the pagination
    /// termination signal. Signed because the service reports it as a
    /// plain number.
    pub(crate) remaining: i64,
}

/// One page of search results.
///
/// `remaining` is the server-reported count of matching records not yet
/// returned for the query; a value of zero (or less) means this is the last
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<R> {
    /// The matching records, in server-returned order.
    pub results: Vec<R>,
    /// Count of matching records not yet fetched.
    pub remaining: i64,
}
