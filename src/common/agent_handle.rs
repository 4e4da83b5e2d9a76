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
use std::hash::{Hash, Hasher};

use anyhow::anyhow;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::common::{BrokerRef, CONFIG};
use crate::message::{AgentId, Message, Recipient};

/// A host-side handle to a running agent.
///
/// The handle sends on the agent's behalf through the shared broker and
/// controls the agent's lifecycle: [`stop`](AgentHandle::stop) requests a
/// cooperative exit at the loop's next poll boundary and waits for the loop
/// task to finish.
#[derive(Debug, Clone)]
pub struct AgentHandle {
    /// The id the agent registered under.
    pub(crate) id: AgentId,
    /// The broker every message goes through.
    pub(crate) broker: BrokerRef,
    /// Cancellation observed by the agent loop at poll boundaries.
    pub(crate) cancellation: CancellationToken,
    /// Tracks the spawned loop task.
    pub(crate) tracker: TaskTracker,
}

impl PartialEq for AgentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AgentHandle {}

impl Hash for AgentHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl AgentHandle {
    /// The agent's id.
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// The broker this agent is registered with.
    pub fn broker(&self) -> &BrokerRef {
        &self.broker
    }

    /// Sends a request to `target` and returns the id-stamped message.
    pub fn request(
        &self,
        target: impl Into<Recipient>,
        body: impl Into<String>,
        priority: i32,
    ) -> Message {
        self.broker.send(
            Message::request(self.id.clone(), target, body).with_priority(priority),
        )
    }

    /// Assigns a task to `target` and returns the id-stamped message.
    pub fn assign_task(
        &self,
        target: impl Into<Recipient>,
        body: impl Into<String>,
    ) -> Message {
        self.broker
            .send(Message::task_assignment(self.id.clone(), target, body))
    }

    /// Broadcasts an announcement to every other registered agent.
    pub fn broadcast(&self, body: impl Into<String>) -> Message {
        self.broker.send(Message::broadcast(self.id.clone(), body))
    }

    /// Sends an already-built message through the broker.
    pub fn send(&self, message: Message) -> Message {
        self.broker.send(message)
    }

    /// Stops the agent loop.
    ///
    /// Cancellation is cooperative: an in-flight dispatch runs to
    /// completion, and the loop exits at its next poll boundary. Waits for
    /// the loop task up to the configured shutdown timeout.
    #[instrument(skip(self), fields(agent = %self.id))]
    pub async fn stop(&self) -> anyhow::Result<()> {
        trace!("requesting cooperative stop");
        self.cancellation.cancel();
        // No-op for a started agent; lets wait() resolve if start was never called.
        self.tracker.close();
        tokio::time::timeout(CONFIG.shutdown_timeout(), self.tracker.wait())
            .await
            .map_err(|_| {
                anyhow!(
                    "agent {} did not stop within {:?}",
                    self.id,
                    CONFIG.shutdown_timeout()
                )
            })?;
        trace!("agent loop finished");
        Ok(())
    }
}
