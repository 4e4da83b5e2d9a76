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

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Wire sentinel addressing a message to every registered agent but the sender.
pub const BROADCAST_ALL: &str = "ALL";

/// The identifier of an agent registered with a broker.
///
/// Agent ids are cheap to clone and hash; they key the broker's mailbox
/// registry and send-history buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(Arc<str>);

impl AgentId {
    /// Creates an agent id from anything string-like.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AgentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a message is bound: one agent, or everyone but the sender.
///
/// The [`BROADCAST_ALL`] sentinel maps to [`Recipient::All`]; any other
/// string names a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recipient {
    /// A single registered agent.
    Agent(AgentId),
    /// Every registered agent except the sender.
    All,
}

impl Recipient {
    /// Returns the target agent id for point-to-point delivery, `None` for broadcasts.
    pub fn agent(&self) -> Option<&AgentId> {
        match self {
            Recipient::Agent(id) => Some(id),
            Recipient::All => None,
        }
    }
}

impl From<&str> for Recipient {
    fn from(target: &str) -> Self {
        if target == BROADCAST_ALL {
            Recipient::All
        } else {
            Recipient::Agent(AgentId::new(target))
        }
    }
}

impl From<AgentId> for Recipient {
    fn from(id: AgentId) -> Self {
        Recipient::Agent(id)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Agent(id) => fmt::Display::fmt(id, f),
            Recipient::All => f.write_str(BROADCAST_ALL),
        }
    }
}
