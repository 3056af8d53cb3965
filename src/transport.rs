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

use crate::error::SeedingError;
use crate::request_spec::RequestSpec;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Response to one seeding POST: the status and whatever the service sent
/// back. The transport returns it for every status class; classification is
/// the loader's job.
#[derive(Debug)]
pub struct SeedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl SeedResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status line in the `201 Created` form used by the detail logs.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {reason}", self.status.as_u16()),
            None => self.status.as_u16().to_string(),
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The single HTTP capability the seeding core needs: POST a JSON body to a
/// relative endpoint and get the response status and body back. Transport
/// failures (connect, timeout) are errors; unexpected statuses are not.
#[async_trait]
pub trait SeedTransport: Send + Sync {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<SeedResponse, SeedingError>;
}

#[async_trait]
impl SeedTransport for RequestSpec {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<SeedResponse, SeedingError> {
        let url = self.url(endpoint)?;
        let response = self
            .client()
            .post(url)
            .headers(self.headers().clone())
            .json(body)
            .send()
            .await
            .map_err(|source| SeedingError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|source| SeedingError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(SeedResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_status_line_with_canonical_reason() {
        let response = SeedResponse::new(StatusCode::CREATED, HeaderMap::new(), String::new());
        assert_eq!(response.status_line(), "201 Created");
    }

    #[test]
    fn should_format_status_line_without_canonical_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        let response = SeedResponse::new(status, HeaderMap::new(), String::new());
        assert_eq!(response.status_line(), "599");
    }
}
