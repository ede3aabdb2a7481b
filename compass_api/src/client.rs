//! HTTP client for the Compass REST API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    errors::{HttpError, Result},
    pager::RecordPager,
    query::{ListQuery, Query, SearchQuery},
    types::{CompanyLink, ContactLink, Record, RecordID, Resource, TokenGrant, UserCredentials},
    Error,
};

/// Production subdomain.
pub const DEFAULT_ENDPOINT: &str = "compass";

/// Subdomain of the test (UAT) environment.
pub const TEST_ENDPOINT: &str = "compass.uat";

const API_DOMAIN: &str = "cosential.com";

const TOKEN_HEADER: &str = "x-compass-token";
const FIRM_ID_HEADER: &str = "x-compass-firm-id";
const API_KEY_HEADER: &str = "x-compass-api-key";

/// Request payload accepted by [`Client::request`].
#[derive(Clone, Debug, Default)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// A JSON value, serialized to text before sending.
    Json(Value),
    /// Text sent exactly as given.
    Text(String),
}

impl From<&Record> for Body {
    fn from(record: &Record) -> Self {
        Body::Json(Value::Object(record.clone()))
    }
}

/// Per-request transport settings passed straight through to reqwest.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// HTTP Basic credentials (username, password).
    pub basic_auth: Option<(String, String)>,
    /// Overall deadline for the call. There is none unless set here.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.basic_auth = Some((username.to_string(), password.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client for the Compass REST API.
///
/// Holds the API root and an optional user token; every call is a single
/// request with no retries. A token is obtained once via
/// [`Client::get_user_token`] on an unauthenticated client.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// API root without a trailing slash, e.g. `https://compass.cosential.com/api`.
    api_root: String,
    token: Option<HeaderValue>,
}

impl Client {
    /// Creates a client for the production endpoint.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Creates a client for the given subdomain, e.g. [`TEST_ENDPOINT`].
    pub fn with_endpoint(endpoint: &str, token: &str) -> Result<Self> {
        Self::build(endpoint_root(endpoint), Some(token))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        Self::build(base_root(base_url), Some(token))
    }

    /// Creates a client without a token, for the token exchange.
    pub fn unauthenticated(endpoint: &str) -> Result<Self> {
        Self::build(endpoint_root(endpoint), None)
    }

    /// Unauthenticated client with a custom base URL.
    pub fn unauthenticated_with_base_url(base_url: &str) -> Result<Self> {
        Self::build(base_root(base_url), None)
    }

    fn build(api_root: String, token: Option<&str>) -> Result<Self> {
        let token = token
            .map(|t| {
                let mut value = HeaderValue::from_str(t)?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_root,
            token,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Headers sent with every authenticated request.
    pub fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            headers.insert(TOKEN_HEADER, token.clone());
        }
        headers
    }

    /// Copies the caller's headers and lays the default headers over them.
    fn merge_headers(&self, headers: Option<&HeaderMap>) -> HeaderMap {
        let mut merged = headers.cloned().unwrap_or_default();
        for (name, value) in self.default_headers() {
            if let Some(name) = name {
                merged.insert(name, value);
            }
        }
        merged
    }

    fn url_for(&self, resource: &str, query: Option<&dyn Query>) -> Result<Url> {
        let url = Url::parse(&format!("{}/{}", self.api_root, resource)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            e
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Body,
        headers: HeaderMap,
        options: &RequestOptions,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);
        let mut request = self.http.request(method, url).headers(headers);
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.body(serde_json::to_string(&value)?),
            Body::Text(text) => request.body(text),
        };
        if let Some((username, password)) = &options.basic_auth {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            e
        })?;
        tracing::debug!("response status {}", response.status());
        Ok(response)
    }

    /// Performs one HTTP request against the API.
    ///
    /// `resource` is relative to the API root. Caller headers are merged
    /// under the default headers, which win on collision; the caller's map is
    /// left untouched. A status of 400 or above becomes [`Error::Http`],
    /// anything else is returned undecoded.
    pub async fn request(
        &self,
        method: Method,
        resource: &str,
        query: Option<&dyn Query>,
        body: Body,
        headers: Option<&HeaderMap>,
        options: &RequestOptions,
    ) -> Result<Response> {
        let url = self.url_for(resource, query)?;
        let headers = self.merge_headers(headers);
        let response = self.dispatch(method, url, body, headers, options).await?;
        check_for_errors(response).await
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, query: Option<&dyn Query>) -> Result<T> {
        let response = self
            .request(
                Method::GET,
                resource,
                query,
                Body::Empty,
                None,
                &RequestOptions::default(),
            )
            .await?;
        decode(response).await
    }

    async fn send_body<T: DeserializeOwned>(
        &self,
        method: Method,
        resource: &str,
        body: Body,
    ) -> Result<T> {
        let response = self
            .request(method, resource, None, body, None, &RequestOptions::default())
            .await?;
        decode(response).await
    }

    // User methods

    /// Fetches the user the token belongs to.
    pub async fn get_user(&self) -> Result<Value> {
        self.get("user/", None).await
    }

    /// Exchanges user credentials for a long-lived user token.
    ///
    /// Authenticates with HTTP Basic plus the firm id and API key headers and
    /// never sends a token header. A failure status yields
    /// [`TokenGrant::NotAuthenticated`] rather than an error.
    pub async fn get_user_token(&self, credentials: &UserCredentials) -> Result<TokenGrant> {
        let url = self.url_for("user/", None)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(FIRM_ID_HEADER, HeaderValue::from_str(&credentials.firm_id)?);
        let mut api_key = HeaderValue::from_str(&credentials.api_key)?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        let options = RequestOptions::default()
            .with_basic_auth(&credentials.username, &credentials.password);

        let response = self
            .dispatch(Method::GET, url, Body::Empty, headers, &options)
            .await?;
        if is_failure(response.status()) {
            tracing::warn!(
                "Token request for {} rejected with status {}",
                credentials.username,
                response.status()
            );
            return Ok(TokenGrant::NotAuthenticated);
        }

        let body: Value = decode(response).await?;
        body.get(0)
            .and_then(|user| user.get("UserToken"))
            .and_then(Value::as_str)
            .map(|token| TokenGrant::Granted(token.to_string()))
            .ok_or(Error::MissingUserToken)
    }

    // Generic resource methods

    /// Fetches the server-side field schema of a resource.
    pub async fn get_schema(&self, resource: Resource) -> Result<Value> {
        self.get(&format!("{}/schema/", resource.path()), None).await
    }

    /// Fetches a single record by id.
    pub async fn get_record(&self, resource: Resource, id: RecordID) -> Result<Record> {
        self.get(&format!("{}/{}", resource.path(), id), None).await
    }

    /// Fetches one page of records.
    pub async fn get_list(&self, resource: Resource, query: &ListQuery) -> Result<Vec<Record>> {
        self.get(&format!("{}/", resource.path()), Some(query)).await
    }

    /// Runs a free-text search over a resource.
    pub async fn search(&self, resource: Resource, query: &str) -> Result<Vec<Record>> {
        let query = SearchQuery::new(query);
        self.get(&format!("{}/search", resource.path()), Some(&query))
            .await
    }

    /// Replaces a record, addressed by the id field it carries.
    pub async fn update(&self, resource: Resource, record: &Record) -> Result<Value> {
        let id = resource.record_id(record)?;
        self.send_body(
            Method::PUT,
            &format!("{}/{}/", resource.path(), id),
            Body::from(record),
        )
        .await
    }

    /// Creates a record.
    ///
    /// Companies, contacts and projects are posted as a one-element JSON
    /// array. Opportunities are posted as the bare object.
    pub async fn create(&self, resource: Resource, record: &Record) -> Result<Value> {
        let body = match resource {
            Resource::Opportunity => Body::from(record),
            _ => Body::Text(serde_json::to_string(&[record])?),
        };
        self.send_body(Method::POST, &format!("{}/", resource.path()), body)
            .await
    }

    /// Returns a fresh pager over every record of a resource.
    pub fn pager(&self, resource: Resource) -> RecordPager<'_> {
        RecordPager::new(self, resource)
    }

    /// Fetches a collection linked to one company.
    pub async fn get_company_link(&self, company_id: RecordID, link: CompanyLink) -> Result<Value> {
        self.get(
            &format!("{}/{}/{}/", Resource::Company.path(), company_id, link.path()),
            None,
        )
        .await
    }

    /// Fetches a collection linked to one contact.
    pub async fn get_contact_link(&self, contact_id: RecordID, link: ContactLink) -> Result<Value> {
        self.get(
            &format!("{}/{}/{}/", Resource::Contact.path(), contact_id, link.path()),
            None,
        )
        .await
    }
}

fn endpoint_root(endpoint: &str) -> String {
    format!("https://{}.{}/api", endpoint, API_DOMAIN)
}

fn base_root(base_url: &str) -> String {
    format!("{}/api", base_url.trim_end_matches('/'))
}

/// Any status of 400 or above counts as a failed call.
fn is_failure(status: StatusCode) -> bool {
    status.as_u16() >= 400
}

async fn check_for_errors(response: Response) -> Result<Response> {
    let status = response.status();
    if !is_failure(status) {
        return Ok(response);
    }
    let text = response.text().await?;
    tracing::error!(
        "Request failed with status {}: {}",
        status,
        truncate_body(&text)
    );
    Err(HttpError {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        text,
    }
    .into())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|e| {
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
        e.into()
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
