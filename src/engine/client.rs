use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{HeaderMap, HeaderValue},
};
use url::Url;

use super::types::OrderPayload;
use crate::auth::{self, AdminCredentials, AuthMode};
use crate::types::JsonObject;
use crate::{Result, join_url};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`Client`]
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use purpletrader_client_sdk::engine::Config;
///
/// let config = Config::builder().timeout(Duration::from_secs(5)).build();
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Upper bound on each request/response exchange, body included. Defaults to thirty (30)
    /// seconds.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// HTTP client for the trading engine API.
///
/// Cloning is cheap and clones share the underlying connection pool. Calls are independent of
/// each other; nothing is retried or cached.
///
/// # Example
///
/// ```no_run
/// use purpletrader_client_sdk::engine::{Client, Config};
/// use purpletrader_client_sdk::engine::types::Timeframe;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://localhost:8080", Config::default())?;
///
/// let health = client.health().await?;
/// let stats = client.get_stats_timeframe("AAPL", Timeframe::OneHour).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: String,
    config: Config,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client for the engine at `host`.
    ///
    /// No request is made until an operation is called.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid URL or the HTTP client cannot be created.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("purpletrader_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Self::with_http_client(host, config, client)
    }

    /// Creates a client that sends its requests through `client`.
    ///
    /// [`Config::timeout`] is still applied to every request.
    pub fn with_http_client(host: &str, config: Config, client: ReqwestClient) -> Result<Client> {
        Url::parse(host)?;

        Ok(Self {
            host: host.to_owned(),
            config,
            client,
        })
    }

    /// Returns the base URL of the engine, as given at construction.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.host, path)
    }

    async fn get(&self, path: &str) -> Result<JsonObject> {
        let request = self
            .client
            .request(Method::GET, self.url(path))
            .timeout(self.config.timeout)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Builds an admin request, delivering the password as `credentials` (or `default`) says.
    fn admin_request(
        &self,
        method: Method,
        path: &str,
        credentials: &AdminCredentials,
        default: AuthMode,
    ) -> Result<Request> {
        let mode = credentials.mode_or(default);
        let (url, headers) = auth::authorize(self.url(path), credentials.password(), mode)?;

        Ok(self
            .client
            .request(method, url)
            .headers(headers)
            .timeout(self.config.timeout)
            .build()?)
    }

    /// Submits an order.
    ///
    /// Accepts a typed [`Order`](super::types::Order) or a raw JSON object; both are sent as the
    /// same flat JSON body.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use purpletrader_client_sdk::engine::{Client, Config};
    /// use purpletrader_client_sdk::engine::types::{Order, Side};
    /// use purpletrader_client_sdk::types::dec;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("http://localhost:8080", Config::default())?;
    ///
    /// let order = Order::builder()
    ///     .symbol("AAPL")
    ///     .side(Side::Buy)
    ///     .quantity(dec!(10))
    ///     .price(dec!(187.5))
    ///     .build();
    /// let ack = client.submit_order(order).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_order<O: Into<OrderPayload>>(&self, order: O) -> Result<JsonObject> {
        let payload = order.into();
        let request = self
            .client
            .request(Method::POST, self.url("/order"))
            .json(&payload)
            .timeout(self.config.timeout)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Returns the current order book for `symbol`.
    pub async fn get_orderbook(&self, symbol: &str) -> Result<JsonObject> {
        self.get(&format!("/api/v1/orderbook/{symbol}")).await
    }

    /// Returns trading statistics for `symbol`.
    pub async fn get_stats(&self, symbol: &str) -> Result<JsonObject> {
        self.get(&format!("/api/v1/stats/{symbol}")).await
    }

    /// Returns trading statistics for `symbol` over one [`Timeframe`](super::types::Timeframe).
    ///
    /// `timeframe` may be a [`Timeframe`](super::types::Timeframe) or its string form, e.g.
    /// `"1h"`.
    pub async fn get_stats_timeframe<T: AsRef<str>>(
        &self,
        symbol: &str,
        timeframe: T,
    ) -> Result<JsonObject> {
        let timeframe = timeframe.as_ref();
        self.get(&format!("/api/v1/stats/{symbol}/{timeframe}"))
            .await
    }

    /// Returns statistics for every symbol.
    pub async fn get_all_stats(&self) -> Result<JsonObject> {
        self.get("/api/v1/stats/all").await
    }

    /// Returns an engine-wide statistics summary.
    pub async fn get_stats_summary(&self) -> Result<JsonObject> {
        self.get("/api/v1/stats/summary").await
    }

    pub async fn get_leaderboard(&self) -> Result<JsonObject> {
        self.get("/api/v1/leaderboard").await
    }

    /// Performs a health check on the engine.
    pub async fn health(&self) -> Result<JsonObject> {
        self.get("/health").await
    }

    /// Returns the engine's admin status.
    ///
    /// Unless `credentials` pins a mode, the password is sent as a query parameter
    /// ([`AuthMode::Query`]). Note this differs from the admin actions below, which default to
    /// [`AuthMode::Bearer`]; the asymmetry matches what deployed engines expect.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use purpletrader_client_sdk::auth::{AdminCredentials, AuthMode};
    /// use purpletrader_client_sdk::engine::{Client, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("http://localhost:8080", Config::default())?;
    ///
    /// // GET /admin/status?password=hunter2
    /// let status = client.admin_status(&AdminCredentials::new("hunter2")).await?;
    ///
    /// // GET /admin/status with `Authorization: Bearer hunter2`
    /// let credentials = AdminCredentials::new("hunter2").with_mode(AuthMode::Bearer);
    /// let status = client.admin_status(&credentials).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn admin_status(&self, credentials: &AdminCredentials) -> Result<JsonObject> {
        let request =
            self.admin_request(Method::GET, "/admin/status", credentials, AuthMode::Query)?;

        crate::request(&self.client, request).await
    }

    /// Halts order matching on the engine.
    ///
    /// Defaults to [`AuthMode::Bearer`] unless `credentials` pins a mode.
    pub async fn admin_stop_trading(&self, credentials: &AdminCredentials) -> Result<JsonObject> {
        let request = self.admin_request(
            Method::POST,
            "/admin/stop_trading",
            credentials,
            AuthMode::Bearer,
        )?;

        crate::request(&self.client, request).await
    }

    /// Resumes order matching after [`Client::admin_stop_trading`].
    ///
    /// Defaults to [`AuthMode::Bearer`] unless `credentials` pins a mode.
    pub async fn admin_resume_trading(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<JsonObject> {
        let request = self.admin_request(
            Method::POST,
            "/admin/resume_trading",
            credentials,
            AuthMode::Bearer,
        )?;

        crate::request(&self.client, request).await
    }

    /// Flushes the engine's state.
    ///
    /// Defaults to [`AuthMode::Bearer`] unless `credentials` pins a mode.
    pub async fn admin_flush_system(&self, credentials: &AdminCredentials) -> Result<JsonObject> {
        let request = self.admin_request(
            Method::POST,
            "/admin/flush_system",
            credentials,
            AuthMode::Bearer,
        )?;

        crate::request(&self.client, request).await
    }
}
