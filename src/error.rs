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

use std::io;
use thiserror::Error;

/// The test scope is wired up incorrectly: a missing scope instance, an absent
/// request specification, or an invalid declaration. Indicates a mistake by
/// the test author, not a data problem, and is never retried.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("test scope instance is not available")]
    ScopeUnavailable,
    #[error("request specification is not available in the test scope")]
    RequestSpecUnavailable,
    #[error("seed fixture {field} must not be empty")]
    EmptyFixtureField { field: &'static str },
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
    #[error("invalid default header: {name}")]
    InvalidHeader { name: String },
}

/// A fixture could not be seeded: the file was unreadable or unparsable, the
/// transport failed, or an underlying error was raised while processing a
/// descriptor. A single record answering an unexpected HTTP status is NOT an
/// error; it is absorbed into the rejected counter of the seeding report.
#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("cannot read seed fixture '{path}'")]
    FixtureRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse seed fixture '{path}' as an array of {record_type}")]
    FixtureParse {
        path: String,
        record_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize {record_type} record for posting")]
    RecordSerialize {
        record_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot build URL for endpoint '{endpoint}' against base '{base}'")]
    InvalidEndpoint { endpoint: String, base: String },
    #[error("transport error while posting to '{endpoint}'")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Raised by the lifecycle hook around any loader error, identifying the
    /// fixture that failed.
    #[error("failed to seed data from '{source_path}' to endpoint '{endpoint}'")]
    Fixture {
        source_path: String,
        endpoint: String,
        #[source]
        cause: Box<SeedingError>,
    },
}

/// The error type surfaced by the lifecycle hook.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Seeding(#[from] SeedingError),
}
