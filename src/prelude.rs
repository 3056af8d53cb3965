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

//! Convenience re-exports of the public surface.

pub use crate::config::{
    RESPONSE_LOGGING_ENV_VAR, is_response_logging_enabled, reset_to_defaults,
    set_response_logging_enabled,
};
pub use crate::error::{ConfigurationError, SeedError, SeedingError};
pub use crate::fixture::{SeedFixture, SeedSet};
pub use crate::harness::{SeedHarness, SeedHarnessBuilder};
pub use crate::loader::{SeedRecord, seed, seed_with_options};
pub use crate::report::{RecordOutcome, SeedReport};
pub use crate::request_spec::{BASE_URL_ENV_VAR, RequestSpec, RequestSpecBuilder};
pub use crate::scope::SeedScope;
pub use crate::transport::{SeedResponse, SeedTransport};
