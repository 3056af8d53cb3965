/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use crate::error::{ConfigurationError, SeedingError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use tracing::info;

/// Environment variable overriding the target service base URL.
pub const BASE_URL_ENV_VAR: &str = "SEEDBED_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Base configuration for building seeding requests: the target base URL plus
/// the default headers attached to every POST. Owned by the test scope and
/// borrowed read-only by the seeding core for the duration of a pass.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_url: Url,
    headers: HeaderMap,
    client: Client,
}

impl RequestSpec {
    pub fn builder() -> RequestSpecBuilder {
        RequestSpecBuilder::default()
    }

    /// Create a request spec for the given base URL with no default headers.
    pub fn new(base_url: &str) -> Result<Self, ConfigurationError> {
        Self::builder().base_url(base_url).build()
    }

    /// Resolve the base URL from `SEEDBED_BASE_URL`, falling back to
    /// `http://localhost:8080`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        info!("Configuring seed requests with base URL: {base_url}");
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Full URL for the provided endpoint path.
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url, SeedingError> {
        self.base_url
            .join(endpoint)
            .map_err(|_| SeedingError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                base: self.base_url.to_string(),
            })
    }
}

impl Default for RequestSpec {
    fn default() -> Self {
        RequestSpec::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

/// Builder for [`RequestSpec`]. Headers are applied in declaration order.
#[derive(Debug, Default)]
pub struct RequestSpecBuilder {
    base_url: Option<String>,
    headers: Vec<(String, String)>,
    client: Option<Client>,
}

impl RequestSpecBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header sent with every seeding request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use a custom HTTP client instead of the default one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<RequestSpec, ConfigurationError> {
        let raw_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&raw_url).map_err(|_| ConfigurationError::InvalidBaseUrl { url: raw_url })?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigurationError::InvalidHeader { name: name.clone() })?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| ConfigurationError::InvalidHeader { name: name.clone() })?;
            headers.append(header_name, header_value);
        }

        Ok(RequestSpec {
            base_url,
            headers,
            client: self.client.unwrap_or_else(Client::new),
        })
    }
}
