/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Async completion poller used by the sync flush and load variants

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::errors::{MilvusError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between two status checks
    pub interval: Duration,
    /// Unbounded when `None`
    pub max_attempts: Option<u32>,
    /// Unbounded when `None`
    pub max_duration: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: None,
            max_duration: None,
        }
    }
}

/// Invoke `check` until `is_done` accepts its response, sleeping
/// `config.interval` between attempts. Errors from `check` abort the loop.
pub async fn poll_until<T, F, Fut, P>(
    operation: &str,
    config: &PollConfig,
    cancel: Option<&CancellationToken>,
    mut check: F,
    mut is_done: P,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: FnMut(&T) -> bool,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        if cancel.is_some_and(|token| token.is_cancelled()) {
            return Err(MilvusError::PollCancelled {
                operation: operation.to_string(),
            });
        }

        let response = check().await?;
        attempts += 1;
        if is_done(&response) {
            debug!("{} completed after {} attempts", operation, attempts);
            return Ok(response);
        }

        let out_of_attempts = config.max_attempts.is_some_and(|max| attempts >= max);
        let out_of_time = config
            .max_duration
            .is_some_and(|max| started.elapsed() + config.interval > max);
        if out_of_attempts || out_of_time {
            return Err(MilvusError::PollTimeout {
                operation: operation.to_string(),
                attempts,
            });
        }

        match cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => {
                        return Err(MilvusError::PollCancelled {
                            operation: operation.to_string(),
                        });
                    }
                    _ = tokio::time::sleep(config.interval) => {}
                }
            }
            None => tokio::time::sleep(config.interval).await,
        }
    }
}
