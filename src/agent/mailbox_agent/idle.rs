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

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::agent::{AgentConfig, MailboxAgent, Started};
use crate::common::{AgentHandle, BrokerError, BrokerRef};
use crate::message::Message;
use crate::traits::Collaborator;

/// Type-state marker for a [`MailboxAgent`] that has not started listening.
pub struct Idle;

impl MailboxAgent<Idle> {
    /// Creates an idle agent and registers it with `broker`.
    ///
    /// # Errors
    ///
    /// Returns [`BrokerError::AlreadyRegistered`] if the configured id is
    /// already taken on this broker.
    #[instrument(skip(broker, collaborator))]
    pub fn new(
        config: AgentConfig,
        broker: BrokerRef,
        collaborator: Arc<dyn Collaborator>,
    ) -> Result<Self, BrokerError> {
        broker.register(config.id().clone())?;
        trace!(agent = %config.id(), "agent registered");

        Ok(Self {
            id: config.id().clone(),
            broker,
            poll_interval: config.poll_interval(),
            collaborator,
            on_delivery: Box::new(|_| {}),
            cancellation: CancellationToken::new(),
            tracker: TaskTracker::new(),
            _agent_state: Default::default(),
        })
    }

    /// Installs a hook observing every message the loop dequeues.
    ///
    /// Responses and broadcasts trigger no automatic traffic, so this hook
    /// is the side channel through which a host sees them arrive.
    pub fn on_delivery(mut self, hook: impl Fn(&Message) + Send + Sync + 'static) -> Self {
        self.on_delivery = Box::new(hook);
        self
    }

    /// A handle to this agent, usable before and after `start`.
    pub fn handle(&self) -> AgentHandle {
        AgentHandle {
            id: self.id.clone(),
            broker: self.broker.clone(),
            cancellation: self.cancellation.clone(),
            tracker: self.tracker.clone(),
        }
    }

    /// Spawns the consumption loop and returns the agent's handle.
    #[instrument(skip(self), fields(agent = %self.id))]
    pub fn start(self) -> AgentHandle {
        let handle = self.handle();
        let agent: MailboxAgent<Started> = self.into();
        handle.tracker.spawn(agent.listen());
        handle.tracker.close();
        handle
    }
}

impl From<MailboxAgent<Idle>> for MailboxAgent<Started> {
    fn from(value: MailboxAgent<Idle>) -> Self {
        MailboxAgent::<Started> {
            id: value.id,
            broker: value.broker,
            poll_interval: value.poll_interval,
            collaborator: value.collaborator,
            on_delivery: value.on_delivery,
            cancellation: value.cancellation,
            tracker: value.tracker,
            _agent_state: Default::default(),
        }
    }
}
