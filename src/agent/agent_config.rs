/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::Duration;

use crate::common::CONFIG;
use crate::message::AgentId;

/// Configuration for creating an agent.
///
/// This struct holds the information needed to configure an agent: its id
/// and the poll interval its loop sleeps for when the mailbox is empty.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    id: AgentId,
    poll_interval: Duration,
}

impl AgentConfig {
    /// Creates a config for `id` with the crate-wide default poll interval.
    pub fn new(id: impl Into<AgentId>) -> Self {
        Self {
            id: id.into(),
            poll_interval: CONFIG.poll_interval(),
        }
    }

    /// Overrides how long the loop sleeps after an empty poll.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// The agent id this config registers under.
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
