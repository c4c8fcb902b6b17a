// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Velair units.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};

use crate::command::{Command, FORM_CONTENT_TYPE};
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for reaching a unit over HTTP.
///
/// HTTP is stateless: each request is independent, nothing is kept
/// between calls.
///
/// # Examples
///
/// ```
/// use velair_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.40:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address of the unit. A value starting
    ///   with `http://` or `https://` is used as the base URL as is.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    ///
    /// Ignored when the host already carries an `http://` or `https://`
    /// scheme; include the port in that URL instead.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If the port hasn't been explicitly set, it changes to 443. Ignored
    /// when the host already carries a scheme.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }

        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        self.into_client_with(client)
    }

    /// Creates an `HttpClient` that sends through an existing
    /// `reqwest::Client`.
    ///
    /// The configured timeout is not applied; the given client's own
    /// settings are used.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty.
    pub fn into_client_with(self, client: Client) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        Ok(HttpClient {
            base_url: self.base_url(),
            client,
        })
    }
}

// ============================================================================
// HttpClient - Request execution
// ============================================================================

/// HTTP client for one unit.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use velair_lib::command::StatusCommand;
/// use velair_lib::protocol::{HttpClient, Protocol};
///
/// # async fn example() -> velair_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let status = client.send_command(&StatusCommand).await?.status()?;
/// println!("{} is at {}°C", status.name, status.temperature);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the given host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the unit.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self.build_url(&command.path());

        // The unit expects form bodies on GET requests.
        let mut request = self.client.get(&url);
        if let Some(form) = command.form_body() {
            tracing::debug!(url = %url, form = %form, "Sending HTTP request");
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(form);
        } else {
            tracing::debug!(url = %url, "Sending HTTP request");
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if response.status() != StatusCode::OK {
            return Err(ProtocolError::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response.bytes().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %String::from_utf8_lossy(&body), "Received HTTP response");

        Ok(CommandResponse::new(body.to_vec()))
    }
}
