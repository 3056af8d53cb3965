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

//! The lifecycle hook binds fixture declarations to test phases. Fixtures are
//! registered explicitly on the builder: scope-level fixtures seed once
//! before any test of the scope runs, test-level fixtures seed before every
//! invocation of their test.

use crate::config;
use crate::error::{ConfigurationError, SeedError, SeedingError};
use crate::fixture::{SeedFixture, SeedSet};
use crate::report::SeedReport;
use crate::scope::SeedScope;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Lifecycle phases of one scope activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecyclePhase {
    Unstarted,
    ScopeReady,
}

/// Seeds registered fixtures at the right points of a test scope's lifecycle.
///
/// Call [`SeedHarness::before_all`] when entering the scope and
/// [`SeedHarness::before_each`] when entering each test case. Seeding is a
/// blocking setup step: descriptors run in declaration order, one record at a
/// time, and the first hard failure aborts the current setup phase.
pub struct SeedHarness {
    scope: Option<Arc<dyn SeedScope>>,
    scope_set: SeedSet,
    test_sets: Vec<(String, SeedSet)>,
    response_logging: Option<bool>,
    phase: LifecyclePhase,
}

impl SeedHarness {
    pub fn builder() -> SeedHarnessBuilder {
        SeedHarnessBuilder::default()
    }

    /// Scope-entry transition: seeds every scope-level fixture in declaration
    /// order, exactly once per activation. Later calls are no-ops once the
    /// scope is ready.
    pub async fn before_all(&mut self) -> Result<Vec<SeedReport>, SeedError> {
        if self.phase == LifecyclePhase::ScopeReady {
            return Ok(Vec::new());
        }
        debug!(
            "Entering scope, seeding {} scope-level fixtures",
            self.scope_set.len()
        );
        let reports = self.seed_set(&self.scope_set).await?;
        self.phase = LifecyclePhase::ScopeReady;
        Ok(reports)
    }

    /// Test-entry transition: seeds the fixtures registered for `test_name`
    /// in declaration order, on every invocation. Runs the scope-entry
    /// transition first if it has not happened yet.
    pub async fn before_each(&mut self, test_name: &str) -> Result<Vec<SeedReport>, SeedError> {
        let mut reports = self.before_all().await?;
        if let Some(set) = self.test_fixtures(test_name) {
            debug!(
                "Entering test '{test_name}', seeding {} test-level fixtures",
                set.len()
            );
            reports.extend(self.seed_set(set).await?);
        }
        Ok(reports)
    }

    /// Fixtures registered at scope level, in declaration order.
    pub fn scope_fixtures(&self) -> &SeedSet {
        &self.scope_set
    }

    /// Fixtures registered for one test case, if any.
    pub fn test_fixtures(&self, test_name: &str) -> Option<&SeedSet> {
        self.test_sets
            .iter()
            .find(|(name, _)| name == test_name)
            .map(|(_, set)| set)
    }

    async fn seed_set(&self, set: &SeedSet) -> Result<Vec<SeedReport>, SeedError> {
        let mut reports = Vec::with_capacity(set.len());
        for fixture in set {
            reports.push(self.seed_fixture(fixture).await?);
        }
        Ok(reports)
    }

    async fn seed_fixture(&self, fixture: &SeedFixture) -> Result<SeedReport, SeedError> {
        let scope = self
            .scope
            .as_deref()
            .ok_or(ConfigurationError::ScopeUnavailable)?;
        let spec = scope
            .request_spec()
            .ok_or(ConfigurationError::RequestSpecUnavailable)?;
        let log_responses = self
            .response_logging
            .unwrap_or_else(config::is_response_logging_enabled);

        let report = fixture
            .seed_with_options(spec, log_responses)
            .await
            .map_err(|cause| SeedingError::Fixture {
                source_path: fixture.source().to_string(),
                endpoint: fixture.endpoint().to_string(),
                cause: Box::new(cause),
            })?;
        Ok(report)
    }
}

impl fmt::Debug for SeedHarness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedHarness")
            .field("scope_fixtures", &self.scope_set.len())
            .field("test_sets", &self.test_sets.len())
            .field("response_logging", &self.response_logging)
            .field("phase", &self.phase)
            .finish()
    }
}

/// Builder for [`SeedHarness`]. Registration order is seeding order; the same
/// fixture may be registered repeatedly and will seed once per registration.
#[derive(Default)]
pub struct SeedHarnessBuilder {
    scope: Option<Arc<dyn SeedScope>>,
    scope_set: SeedSet,
    test_sets: Vec<(String, SeedSet)>,
    response_logging: Option<bool>,
}

impl SeedHarnessBuilder {
    /// Attach the test scope supplying the request specification.
    pub fn scope(mut self, scope: impl SeedScope + 'static) -> Self {
        self.scope = Some(Arc::new(scope));
        self
    }

    /// Declare fixtures seeded once at scope entry. Accepts a single fixture
    /// or a whole set; repeated calls append in declaration order.
    pub fn seed(mut self, fixtures: impl Into<SeedSet>) -> Self {
        self.scope_set.extend(fixtures.into());
        self
    }

    /// Declare fixtures seeded before every invocation of `test_name`.
    pub fn seed_for_test(
        mut self,
        test_name: impl Into<String>,
        fixtures: impl Into<SeedSet>,
    ) -> Self {
        let test_name = test_name.into();
        let set = fixtures.into();
        match self
            .test_sets
            .iter_mut()
            .find(|(name, _)| *name == test_name)
        {
            Some((_, existing)) => existing.extend(set),
            None => self.test_sets.push((test_name, set)),
        }
        self
    }

    /// Override the process-wide response logging flag for this harness only.
    pub fn response_logging(mut self, enabled: bool) -> Self {
        self.response_logging = Some(enabled);
        self
    }

    pub fn build(self) -> SeedHarness {
        SeedHarness {
            scope: self.scope,
            scope_set: self.scope_set,
            test_sets: self.test_sets,
            response_logging: self.response_logging,
            phase: LifecyclePhase::Unstarted,
        }
    }
}
