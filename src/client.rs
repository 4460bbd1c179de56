//! Yousign API client.
//!
//! The main entry point for interacting with the Yousign REST API. Holds the
//! immutable session configuration and the request dispatcher every resource
//! operation goes through.

use crate::error::{ConfigErrorKind, RequestErrorKind, Result, YousignError};
use crate::file_objects::FileObjectsClient;
use crate::files::FilesClient;
use crate::logger::{DEFAULT_LOG_FILE, FileLogger, Logger};
use crate::members::MembersClient;
use crate::procedures::ProceduresClient;
use crate::users::UsersClient;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Production API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.yousign.com";
/// Staging API base URL.
pub const STAGING_API_URL: &str = "https://staging-api.yousign.com";

/// Environment variable read by [`ClientConfig::from_env`] for the API key.
pub const API_KEY_ENV: &str = "YOUSIGN_API_KEY";
/// Environment variable read by [`ClientConfig::from_env`] for the API URL.
pub const API_URL_ENV: &str = "YOUSIGN_API_URL";

const ALLOWED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "HEAD", "DELETE", "PATCH", "OPTIONS"];

/// Yousign API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the logger.
/// Each operation sends exactly one request and never retries.
///
/// # Example
///
/// ```rust,no_run
/// use yousign::{Client, STAGING_API_URL};
/// use yousign::types::CreateUserRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
///
///     let user = client.users().create(CreateUserRequest {
///         firstname: "Jane".to_string(),
///         lastname: "Doe".to_string(),
///         email: "jane.doe@example.com".to_string(),
///         phone: "+33612345678".to_string(),
///     }).await?;
///     println!("Created user {}", user.id);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    default_headers: HeaderMap,
    logger: Arc<OnceLock<Arc<dyn Logger>>>,
    log_file: Option<PathBuf>,
}

/// Configuration options for the client.
///
/// `api_key` and `api_url` are required; the rest are optional.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Hexadecimal API key.
    pub api_key: Option<String>,
    /// Absolute base URL, e.g. [`PRODUCTION_API_URL`] or [`STAGING_API_URL`].
    pub api_url: Option<String>,
    /// Request timeout. Unset means the HTTP client's default.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// File written by the default logger (default: `yousign-client.log`).
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Config with a credential and base URL; other fields keep their defaults.
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_url: Some(api_url.into()),
            ..Default::default()
        }
    }

    /// Build a configuration from an untyped record such as a parsed JSON
    /// or TOML document.
    ///
    /// Recognized keys: `api_key`, `api_url`, `timeout_secs`, `user_agent`,
    /// `log_file`. Keys of the wrong type fail with
    /// [`ConfigErrorKind::InvalidType`]; missing required keys are reported
    /// when the client is built.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| YousignError::config("config", ConfigErrorKind::InvalidType))?;

        let string_field = |field: &'static str| -> Result<Option<String>> {
            match record.get(field) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(_) => Err(YousignError::config(field, ConfigErrorKind::InvalidType)),
            }
        };

        let timeout = match record.get("timeout_secs") {
            None | Some(Value::Null) => None,
            Some(v) => Some(Duration::from_secs(v.as_u64().ok_or_else(|| {
                YousignError::config("timeout_secs", ConfigErrorKind::InvalidType)
            })?)),
        };

        Ok(Self {
            api_key: string_field("api_key")?,
            api_url: string_field("api_url")?,
            timeout,
            user_agent: string_field("user_agent")?,
            log_file: string_field("log_file")?.map(PathBuf::from),
        })
    }

    /// Read `YOUSIGN_API_KEY` and `YOUSIGN_API_URL` from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            api_url: std::env::var(API_URL_ENV).ok(),
            ..Default::default()
        }
    }
}

impl Client {
    /// Create a new client from an API key and base URL.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, PRODUCTION_API_URL};
    ///
    /// let client = Client::new("0123456789abcdef0123456789abcdef", PRODUCTION_API_URL).unwrap();
    /// ```
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key, api_url))
    }

    /// Create a client from the environment, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with custom configuration.
    ///
    /// Fails with [`YousignError::Configuration`] when the API key is missing
    /// or not hexadecimal, or when the API URL is missing or not absolute.
    /// No request is sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, ClientConfig, STAGING_API_URL};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config(ClientConfig {
    ///     api_key: Some("0123456789abcdef0123456789abcdef".to_string()),
    ///     api_url: Some(STAGING_API_URL.to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     ..Default::default()
    /// }).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let api_key = check_api_key(config.api_key)?;
        let base_url = check_api_url(config.api_url)?;

        let mut default_headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| YousignError::config("api_key", ConfigErrorKind::InvalidFormat))?;
        default_headers.insert(header::AUTHORIZATION, bearer);
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("yousign-rust/{}", env!("CARGO_PKG_VERSION")));
        let mut builder = HttpClient::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            default_headers,
            logger: Arc::new(OnceLock::new()),
            log_file: config.log_file,
        })
    }

    /// Replace the logger. Without one, a [`FileLogger`] is created on first use.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Arc::new(OnceLock::from(logger));
        self
    }

    /// The logger in use, creating the default one if needed.
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger
            .get_or_init(|| {
                let path = self
                    .log_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
                let logger: Arc<dyn Logger> = Arc::new(FileLogger::new(path));
                logger
            })
            .clone()
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Get the users client.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Get the members client.
    pub fn members(&self) -> MembersClient {
        MembersClient::new(self.clone())
    }

    /// Get the files client.
    pub fn files(&self) -> FilesClient {
        FilesClient::new(self.clone())
    }

    /// Get the file objects client.
    pub fn file_objects(&self) -> FileObjectsClient {
        FileObjectsClient::new(self.clone())
    }

    /// Get the procedures client.
    pub fn procedures(&self) -> ProceduresClient {
        ProceduresClient::new(self.clone())
    }

    /// Send a raw request and return the parsed JSON body.
    ///
    /// `extra_headers` override the default headers on collision. An empty
    /// response body is returned as `Value::Null`. Non-success statuses are
    /// logged and returned as [`YousignError::ClientRequest`] with the body.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yousign::{Client, STAGING_API_URL};
    /// use std::collections::HashMap;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("0123456789abcdef0123456789abcdef", STAGING_API_URL)?;
    ///     let users = client.send("get", "/users", &[], "", &HashMap::new()).await?;
    ///     println!("{}", users);
    ///     Ok(())
    /// }
    /// ```
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, &str)],
        body: impl Into<String>,
        extra_headers: &HashMap<String, String>,
    ) -> Result<Value> {
        let method = parse_method(method)?;
        check_path(path)?;
        let headers = self.merge_headers(extra_headers)?;
        let body = body.into();

        let url = format!("{}{}", self.base_url, path);
        self.logger().debug(&format!("sending {} {}", method, path));

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger()
                    .error(&format!("{} {} could not be sent: {}", method, path, e));
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                self.logger().error(&format!(
                    "{} {} response could not be read: {}",
                    method, path, e
                ));
                return Err(e.into());
            }
        };

        if !status.is_success() {
            self.logger().error(&format!(
                "{} {} failed with status {}: {}",
                method,
                path,
                status.as_u16(),
                text
            ));
            return Err(YousignError::ClientRequest {
                status_code: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            self.logger().error(&format!(
                "{} {} returned invalid JSON: {}",
                method, path, e
            ));
            YousignError::Decode(e.to_string())
        })
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let value = self.send("GET", path, query, "", &HashMap::new()).await?;
        self.decode(path, value)
    }

    /// Make an authenticated POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode(body)?;
        let value = self.send("POST", path, &[], body, &HashMap::new()).await?;
        self.decode(path, value)
    }

    /// Make an authenticated PUT request.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode(body)?;
        let value = self.send("PUT", path, &[], body, &HashMap::new()).await?;
        self.decode(path, value)
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send("DELETE", path, &[], "", &HashMap::new())
            .await
            .map(|_| ())
    }

    fn merge_headers(&self, extra_headers: &HashMap<String, String>) -> Result<HeaderMap> {
        let mut headers = self.default_headers.clone();
        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                YousignError::Request(RequestErrorKind::InvalidArgument(format!(
                    "header name '{}'",
                    name
                )))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                YousignError::Request(RequestErrorKind::InvalidArgument(format!(
                    "value of header '{}'",
                    name
                )))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| {
            self.logger()
                .error(&format!("{} returned an unexpected shape: {}", path, e));
            YousignError::Decode(e.to_string())
        })
    }
}

fn check_api_key(api_key: Option<String>) -> Result<String> {
    let api_key =
        api_key.ok_or_else(|| YousignError::config("api_key", ConfigErrorKind::Required))?;
    if api_key.is_empty() || hex::decode(&api_key).is_err() {
        return Err(YousignError::config(
            "api_key",
            ConfigErrorKind::InvalidFormat,
        ));
    }
    Ok(api_key)
}

fn check_api_url(api_url: Option<String>) -> Result<String> {
    let api_url =
        api_url.ok_or_else(|| YousignError::config("api_url", ConfigErrorKind::Required))?;
    let parsed = Url::parse(&api_url)
        .map_err(|_| YousignError::config("api_url", ConfigErrorKind::InvalidUrl))?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(YousignError::config("api_url", ConfigErrorKind::InvalidUrl));
    }
    Ok(api_url.trim_end_matches('/').to_string())
}

fn parse_method(method: &str) -> Result<Method> {
    let upper = method.to_ascii_uppercase();
    if !ALLOWED_METHODS.contains(&upper.as_str()) {
        return Err(YousignError::Request(RequestErrorKind::UnknownMethod(
            method.to_string(),
        )));
    }
    Method::from_bytes(upper.as_bytes())
        .map_err(|_| YousignError::Request(RequestErrorKind::UnknownMethod(method.to_string())))
}

fn check_path(path: &str) -> Result<()> {
    if !path.starts_with('/') || path.len() < 2 {
        return Err(YousignError::Request(RequestErrorKind::InvalidPath(
            path.to_string(),
        )));
    }
    Ok(())
}

fn encode<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body)
        .map_err(|e| YousignError::Decode(format!("request body could not be encoded: {}", e)))
}
