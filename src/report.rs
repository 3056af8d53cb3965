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

use reqwest::StatusCode;

/// Classification of a single record's POST response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The service accepted the record (200 or 201).
    Created,
    /// The service reported the record as already present (400).
    AlreadyExists,
    /// Any other status. Counted and optionally logged, never retried.
    Rejected,
}

impl RecordOutcome {
    /// 200/201 classify as created and 400 as already-exists; everything else
    /// is rejected. The conflict status is fixed at 400; services answering a
    /// different conflict status will see those records counted as rejected.
    pub fn classify(status: StatusCode) -> Self {
        match status.as_u16() {
            200 | 201 => RecordOutcome::Created,
            400 => RecordOutcome::AlreadyExists,
            _ => RecordOutcome::Rejected,
        }
    }

    /// Label used by the per-record detail logs.
    pub fn label(&self) -> &'static str {
        match self {
            RecordOutcome::Created => "SUCCESS",
            RecordOutcome::AlreadyExists => "EXISTING",
            RecordOutcome::Rejected => "FAILURE",
        }
    }
}

/// Aggregated counters for one seeding pass over a single fixture, grouped by
/// the fixture's record type and source. Used for observability only; the
/// counters never fail a pass by themselves.
#[derive(Debug, Clone)]
pub struct SeedReport {
    record_type: &'static str,
    source: String,
    endpoint: String,
    total: usize,
    created: usize,
    existing: usize,
    rejected: usize,
}

impl SeedReport {
    pub(crate) fn new(record_type: &'static str, source: &str, endpoint: &str) -> Self {
        Self {
            record_type,
            source: source.to_string(),
            endpoint: endpoint.to_string(),
            total: 0,
            created: 0,
            existing: 0,
            rejected: 0,
        }
    }

    pub(crate) fn count(&mut self, outcome: RecordOutcome) {
        self.total += 1;
        match outcome {
            RecordOutcome::Created => self.created += 1,
            RecordOutcome::AlreadyExists => self.existing += 1,
            RecordOutcome::Rejected => self.rejected += 1,
        }
    }

    pub fn record_type(&self) -> &str {
        self.record_type
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn existing(&self) -> usize {
        self.existing
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
