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

use crate::request_spec::RequestSpec;

/// Capability a test scope must expose for the lifecycle hook to seed on its
/// behalf: supply the request specification seeding requests are built from.
/// The spec is borrowed read-only for the duration of one seeding pass and
/// never mutated. Returning `None` means the scope has no usable request
/// specification; seeding then fails with a configuration error before any
/// HTTP call is made.
pub trait SeedScope: Send + Sync {
    fn request_spec(&self) -> Option<&RequestSpec>;
}

/// A bare request spec can act as its own scope.
impl SeedScope for RequestSpec {
    fn request_spec(&self) -> Option<&RequestSpec> {
        Some(self)
    }
}
