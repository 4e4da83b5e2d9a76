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

use futures::future::join_all;
use tracing::{instrument, trace};

use crate::agent::{AgentConfig, Idle, MailboxAgent};
use crate::common::{AgentHandle, Broker, BrokerError, BrokerRef};
use crate::traits::Collaborator;

/// Entry point for hosts embedding the broker.
///
/// `CourierApp` creates the shared [`Broker`] and hands back a [`Runtime`]
/// through which agents are built and shut down. There is no global state:
/// every agent receives the runtime's broker reference at construction.
#[derive(Default, Debug, Clone)]
pub struct CourierApp;

impl CourierApp {
    /// Launches a fresh broker system.
    pub fn launch() -> Runtime {
        Runtime {
            broker: Arc::new(Broker::new()),
            handles: Vec::new(),
        }
    }
}

/// A running broker system: the shared broker plus the agents spawned into it.
#[derive(Debug)]
pub struct Runtime {
    broker: BrokerRef,
    handles: Vec<AgentHandle>,
}

impl Runtime {
    /// A clone of the shared broker reference.
    pub fn broker(&self) -> BrokerRef {
        self.broker.clone()
    }

    /// Number of agents registered with the broker.
    pub fn agent_count(&self) -> usize {
        self.broker.agent_count()
    }

    /// Builds an idle agent bound to this runtime's broker.
    ///
    /// The returned agent still needs [`start`](MailboxAgent::start); use
    /// this over [`spawn_agent`](Runtime::spawn_agent) when a delivery hook
    /// must be wired in first. The agent is registered (and tracked for
    /// [`shutdown_all`](Runtime::shutdown_all)) immediately.
    pub fn new_agent(
        &mut self,
        config: AgentConfig,
        collaborator: Arc<dyn Collaborator>,
    ) -> Result<MailboxAgent<Idle>, BrokerError> {
        let agent = MailboxAgent::new(config, self.broker.clone(), collaborator)?;
        self.handles.push(agent.handle());
        Ok(agent)
    }

    /// Builds and starts an agent in one step, returning its handle.
    #[instrument(skip(self, collaborator))]
    pub fn spawn_agent(
        &mut self,
        config: AgentConfig,
        collaborator: Arc<dyn Collaborator>,
    ) -> Result<AgentHandle, BrokerError> {
        let agent = self.new_agent(config, collaborator)?;
        Ok(agent.start())
    }

    /// Stops every spawned agent concurrently.
    ///
    /// Each stop waits for its loop task up to the configured shutdown
    /// timeout; the first failure is returned after all stops have run.
    #[instrument(skip(self))]
    pub async fn shutdown_all(&mut self) -> anyhow::Result<()> {
        trace!(agents = self.handles.len(), "shutting down all agents");
        let results = join_all(self.handles.iter().map(AgentHandle::stop)).await;
        self.handles.clear();
        for result in results {
            result?;
        }
        Ok(())
    }
}
