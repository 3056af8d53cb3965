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

use crate::config;
use crate::error::{ConfigurationError, SeedingError};
use crate::loader::{self, SeedRecord};
use crate::report::SeedReport;
use crate::transport::SeedTransport;
use futures::future::BoxFuture;
use std::fmt;

type SeedFn = for<'a> fn(
    &'a SeedFixture,
    &'a dyn SeedTransport,
    bool,
) -> BoxFuture<'a, Result<SeedReport, SeedingError>>;

fn run_fixture<'a, T: SeedRecord>(
    fixture: &'a SeedFixture,
    transport: &'a dyn SeedTransport,
    log_responses: bool,
) -> BoxFuture<'a, Result<SeedReport, SeedingError>> {
    Box::pin(loader::seed_with_options::<T>(
        fixture.source(),
        fixture.endpoint(),
        transport,
        log_responses,
    ))
}

/// Declarative description of one seeding operation: which JSON file to read,
/// which endpoint receives the records, and the record type they deserialize
/// into. Pure data at declaration time; the file is only touched once the
/// fixture is seeded. Declaring the same fixture twice on a scope is legal and
/// seeds it twice.
#[derive(Clone)]
pub struct SeedFixture {
    source: String,
    endpoint: String,
    record_type: &'static str,
    run: SeedFn,
}

impl SeedFixture {
    /// Declare a fixture of `T` records. Fails when `source` or `endpoint` is
    /// empty; the file itself is not validated until seeding time.
    pub fn new<T: SeedRecord>(
        source: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let source = source.into();
        let endpoint = endpoint.into();
        if source.is_empty() {
            return Err(ConfigurationError::EmptyFixtureField { field: "source" });
        }
        if endpoint.is_empty() {
            return Err(ConfigurationError::EmptyFixtureField { field: "endpoint" });
        }
        Ok(Self {
            source,
            endpoint,
            record_type: loader::short_type_name::<T>(),
            run: run_fixture::<T>,
        })
    }

    /// Path of the JSON fixture file, relative to the resource root.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Relative endpoint the records are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Short name of the record type, for diagnostics.
    pub fn record_type(&self) -> &'static str {
        self.record_type
    }

    /// Execute this fixture using the process-wide response logging
    /// configuration.
    pub async fn seed(&self, transport: &dyn SeedTransport) -> Result<SeedReport, SeedingError> {
        self.seed_with_options(transport, config::is_response_logging_enabled())
            .await
    }

    /// Execute this fixture with an explicit response-logging flag.
    pub async fn seed_with_options(
        &self,
        transport: &dyn SeedTransport,
        log_responses: bool,
    ) -> Result<SeedReport, SeedingError> {
        (self.run)(self, transport, log_responses).await
    }
}

impl fmt::Debug for SeedFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedFixture")
            .field("source", &self.source)
            .field("endpoint", &self.endpoint)
            .field("record_type", &self.record_type)
            .finish()
    }
}

/// Ordered collection of fixtures attached to one scope or test case.
/// Declaration order is execution order; duplicates are kept and seeded again.
#[derive(Debug, Default, Clone)]
pub struct SeedSet {
    fixtures: Vec<SeedFixture>,
}

impl SeedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fixture, chaining-style.
    pub fn with(mut self, fixture: SeedFixture) -> Self {
        self.fixtures.push(fixture);
        self
    }

    pub fn push(&mut self, fixture: SeedFixture) {
        self.fixtures.push(fixture);
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeedFixture> {
        self.fixtures.iter()
    }
}

impl From<SeedFixture> for SeedSet {
    fn from(fixture: SeedFixture) -> Self {
        SeedSet {
            fixtures: vec![fixture],
        }
    }
}

impl From<Vec<SeedFixture>> for SeedSet {
    fn from(fixtures: Vec<SeedFixture>) -> Self {
        SeedSet { fixtures }
    }
}

impl FromIterator<SeedFixture> for SeedSet {
    fn from_iter<I: IntoIterator<Item = SeedFixture>>(iter: I) -> Self {
        SeedSet {
            fixtures: iter.into_iter().collect(),
        }
    }
}

impl Extend<SeedFixture> for SeedSet {
    fn extend<I: IntoIterator<Item = SeedFixture>>(&mut self, iter: I) {
        self.fixtures.extend(iter);
    }
}

impl IntoIterator for SeedSet {
    type Item = SeedFixture;
    type IntoIter = std::vec::IntoIter<SeedFixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.into_iter()
    }
}

impl<'a> IntoIterator for &'a SeedSet {
    type Item = &'a SeedFixture;
    type IntoIter = std::slice::Iter<'a, SeedFixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn should_fail_with_empty_source() {
        let result = SeedFixture::new::<Value>("", "/api/users");
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyFixtureField { field: "source" })
        ));
    }

    #[test]
    fn should_fail_with_empty_endpoint() {
        let result = SeedFixture::new::<Value>("users.json", "");
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyFixtureField { field: "endpoint" })
        ));
    }

    #[test]
    fn should_capture_the_record_type_name() {
        let fixture = SeedFixture::new::<Value>("users.json", "/api/users").unwrap();
        assert_eq!(fixture.record_type(), "Value");
        assert_eq!(fixture.source(), "users.json");
        assert_eq!(fixture.endpoint(), "/api/users");
    }

    #[test]
    fn should_preserve_declaration_order() {
        let set = SeedSet::new()
            .with(SeedFixture::new::<Value>("currencies.json", "/config/currency").unwrap())
            .with(SeedFixture::new::<Value>("countries.json", "/config/country").unwrap())
            .with(SeedFixture::new::<Value>("currencies.json", "/config/currency").unwrap());

        let sources: Vec<_> = set.iter().map(SeedFixture::source).collect();
        assert_eq!(
            sources,
            ["currencies.json", "countries.json", "currencies.json"]
        );
    }

    #[test]
    fn should_keep_duplicate_fixtures() {
        let fixture = SeedFixture::new::<Value>("users.json", "/api/users").unwrap();
        let set = SeedSet::new().with(fixture.clone()).with(fixture);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn should_build_from_a_single_fixture() {
        let set: SeedSet = SeedFixture::new::<Value>("users.json", "/api/users")
            .unwrap()
            .into();
        assert_eq!(set.len(), 1);
    }
}
