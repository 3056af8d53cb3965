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

//! The seed loader executes one fixture end-to-end: read the JSON file,
//! deserialize an array of records, POST each record to the endpoint in file
//! order and classify every response. Records are posted strictly
//! sequentially because later records may rely on earlier ones.

use crate::config;
use crate::error::SeedingError;
use crate::report::{RecordOutcome, SeedReport};
use crate::transport::{SeedResponse, SeedTransport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const LOG_SEPARATOR: &str = "--------------------------------------------------------------";

/// Shape a fixture's records must satisfy: decoded from the fixture file and
/// re-encoded as the POST body.
pub trait SeedRecord: DeserializeOwned + Serialize + Send + Sync + 'static {}

impl<T> SeedRecord for T where T: DeserializeOwned + Serialize + Send + Sync + 'static {}

/// Last path segment of `T`'s type name, e.g. `UserRecord` for
/// `my_tests::dto::UserRecord`. Used for diagnostics only.
pub(crate) fn short_type_name<T>() -> &'static str {
    type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or(type_name::<T>())
}

/// Fixture paths resolve the way test resources do: absolute paths as-is,
/// relative paths against the consuming crate's manifest directory when cargo
/// provides it, else the current working directory.
fn resolve_fixture_path(source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(root) => Path::new(&root).join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Seed one fixture using the process-wide response logging configuration.
pub async fn seed<T: SeedRecord>(
    source: &str,
    endpoint: &str,
    transport: &dyn SeedTransport,
) -> Result<SeedReport, SeedingError> {
    seed_with_options::<T>(
        source,
        endpoint,
        transport,
        config::is_response_logging_enabled(),
    )
    .await
}

/// Seed one fixture with an explicit response-logging flag.
///
/// Unexpected statuses are counted as rejected without aborting the remaining
/// records; only file I/O, deserialization and transport failures are fatal,
/// and those leave the target service untouched for the rest of the fixture.
pub async fn seed_with_options<T: SeedRecord>(
    source: &str,
    endpoint: &str,
    transport: &dyn SeedTransport,
    log_responses: bool,
) -> Result<SeedReport, SeedingError> {
    let record_type = short_type_name::<T>();
    let path = resolve_fixture_path(source);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| SeedingError::FixtureRead {
            path: path.display().to_string(),
            source: err,
        })?;
    let records: Vec<T> =
        serde_json::from_slice(&bytes).map_err(|err| SeedingError::FixtureParse {
            path: path.display().to_string(),
            record_type,
            source: err,
        })?;

    info!("{LOG_SEPARATOR}");
    info!(
        "Seeding data for {record_type} :: {} records from {source} to endpoint: {endpoint}",
        records.len()
    );

    let mut report = SeedReport::new(record_type, source, endpoint);
    for record in &records {
        let body = serde_json::to_value(record).map_err(|err| SeedingError::RecordSerialize {
            record_type,
            source: err,
        })?;
        let response = transport.post_json(endpoint, &body).await?;
        let outcome = RecordOutcome::classify(response.status());
        report.count(outcome);
        if log_responses {
            log_response_details(&response, record_type, outcome, &body);
        }
    }

    info!("Seeding data completed for {record_type} from {source}");
    info!(
        "Metrics - Total records: {}, Successfully created: {}, Already existing: {}, Rejected: {}",
        report.total(),
        report.created(),
        report.existing(),
        report.rejected()
    );
    info!("{LOG_SEPARATOR}");

    Ok(report)
}

/// Per-record diagnostics, emitted only when response logging is enabled.
fn log_response_details(
    response: &SeedResponse,
    record_type: &str,
    outcome: RecordOutcome,
    request_body: &Value,
) {
    match serde_json::to_string(request_body) {
        Ok(request_json) => {
            info!("---------- Response Details [{}] ----------", outcome.label());
            info!("Record Type: {record_type}");
            info!("Status Code: {}", response.status().as_u16());
            info!("Status Line: {}", response.status_line());
            info!("Headers: {:?}", response.headers());
            info!("Request Body: {request_json}");
            info!("Response Body: {}", response.body());
            info!("----------------------------------------------");
        }
        Err(err) => warn!("Failed to log response details: {err}"),
    }
}
