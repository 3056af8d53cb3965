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

//! Process-wide configuration for the seeding framework. The only setting is
//! the verbose response-logging flag: read once from the environment on first
//! access, overridable at runtime, and resettable to its default. Readers only
//! need eventual visibility, so the flag uses relaxed atomics.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Environment variable enabling verbose response logging. Accepts `1` or
/// `true` (case-insensitive).
pub const RESPONSE_LOGGING_ENV_VAR: &str = "SEEDBED_RESPONSE_LOGGING";

/// Disabled by default to avoid cluttering logs.
const DEFAULT_RESPONSE_LOGGING: bool = false;

static RESPONSE_LOGGING_ENABLED: Lazy<AtomicBool> =
    Lazy::new(|| AtomicBool::new(response_logging_from_env()));

fn flag_enabled(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1")
}

fn response_logging_from_env() -> bool {
    match std::env::var(RESPONSE_LOGGING_ENV_VAR) {
        Ok(value) => {
            let enabled = flag_enabled(&value);
            info!(
                "Seed response logging {} via environment",
                if enabled { "enabled" } else { "disabled" }
            );
            enabled
        }
        Err(_) => DEFAULT_RESPONSE_LOGGING,
    }
}

/// Whether per-record response details are logged during seeding passes.
pub fn is_response_logging_enabled() -> bool {
    RESPONSE_LOGGING_ENABLED.load(Ordering::Relaxed)
}

/// Enable or disable verbose response logging for subsequently-starting
/// seeding passes.
pub fn set_response_logging_enabled(enabled: bool) {
    RESPONSE_LOGGING_ENABLED.store(enabled, Ordering::Relaxed);
    info!(
        "Seed response logging {} programmatically",
        if enabled { "enabled" } else { "disabled" }
    );
}

/// Reset all configuration to default values.
pub fn reset_to_defaults() {
    RESPONSE_LOGGING_ENABLED.store(DEFAULT_RESPONSE_LOGGING, Ordering::Relaxed);
    info!("Seed framework configuration reset to defaults");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn should_parse_flag_values_case_insensitively() {
        assert!(flag_enabled("true"));
        assert!(flag_enabled("TRUE"));
        assert!(flag_enabled("1"));
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled("false"));
        assert!(!flag_enabled("yes"));
        assert!(!flag_enabled(""));
    }

    #[test]
    #[serial]
    fn should_toggle_and_reset_response_logging() {
        reset_to_defaults();
        assert!(!is_response_logging_enabled());

        set_response_logging_enabled(true);
        assert!(is_response_logging_enabled());

        set_response_logging_enabled(false);
        assert!(!is_response_logging_enabled());

        set_response_logging_enabled(true);
        reset_to_defaults();
        assert!(!is_response_logging_enabled());
    }
}
