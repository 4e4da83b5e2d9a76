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

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::*;

use crate::common::{BrokerError, Mailbox};
use crate::message::{AgentId, Message, MessageId, Recipient};

/// The registry routing messages between per-agent mailboxes.
///
/// The broker owns one [`Mailbox`] and one send-history bucket per
/// registered agent. It holds no task of its own: senders call
/// [`send`](Broker::send) from whatever task they run on, and each agent
/// loop polls its own mailbox through [`receive`](Broker::receive).
#[derive(Default, Debug)]
pub struct Broker {
    /// Thread-safe map of mailboxes, keyed by the owning agent id.
    mailboxes: DashMap<AgentId, Arc<Mailbox>>,
    /// Append-only record of every message each agent has sent.
    history: DashMap<AgentId, Vec<Message>>,
    /// Messages dropped for lack of a registered receiver.
    dropped: AtomicU64,
}

impl Broker {
    /// Creates an empty broker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `agent_id`, creating its empty mailbox and history bucket.
    ///
    /// # Errors
    ///
    /// Returns [`BrokerError::AlreadyRegistered`] if the id is taken.
    /// Re-registering would discard pending mail, so it is rejected rather
    /// than treated as a reinitialize.
    #[instrument(skip(self, agent_id))]
    pub fn register(&self, agent_id: impl Into<AgentId>) -> Result<(), BrokerError> {
        let agent_id = agent_id.into();
        match self.mailboxes.entry(agent_id.clone()) {
            Entry::Occupied(_) => Err(BrokerError::AlreadyRegistered(agent_id)),
            Entry::Vacant(entry) => {
                debug!(agent = %agent_id, "registering agent");
                entry.insert(Arc::new(Mailbox::default()));
                self.history.insert(agent_id, Vec::new());
                Ok(())
            }
        }
    }

    /// Stamps a fresh id on `message` and routes it.
    ///
    /// A [`Recipient::All`] message lands in every registered mailbox except
    /// the sender's own. A point-to-point message lands in its target's
    /// mailbox if the target is registered; otherwise it is dropped without
    /// signalling the sender — the drop is observable through
    /// [`dropped_count`](Broker::dropped_count) and a `warn!` event.
    ///
    /// The stamped message is appended to the sender's history bucket when
    /// the sender is registered, regardless of routing outcome, and returned
    /// to the caller. Any id the caller put on the message beforehand is
    /// discarded here, so only the returned id is meaningful for
    /// correlation.
    #[instrument(skip(self, message), fields(sender = %message.sender, recipient = %message.recipient, kind = %message.kind))]
    pub fn send(&self, mut message: Message) -> Message {
        message.id = MessageId::fresh();

        match &message.recipient {
            Recipient::All => {
                for entry in self.mailboxes.iter() {
                    if *entry.key() != message.sender {
                        trace!(to = %entry.key(), id = %message.id, "broadcast copy");
                        entry.value().push(message.clone());
                    }
                }
            }
            Recipient::Agent(target) => match self.mailboxes.get(target) {
                Some(mailbox) => {
                    trace!(to = %target, id = %message.id, "direct delivery");
                    mailbox.push(message.clone());
                }
                None => {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                    warn!(to = %target, id = %message.id, "receiver not registered, message dropped");
                }
            },
        }

        if let Some(mut bucket) = self.history.get_mut(&message.sender) {
            bucket.push(message.clone());
        }

        message
    }

    /// Removes and returns the next pending message for `agent_id`.
    ///
    /// Never blocks; returns `None` when the mailbox is empty or the agent
    /// was never registered. Callers are expected to poll.
    pub fn receive(&self, agent_id: &AgentId) -> Option<Message> {
        self.mailboxes
            .get(agent_id)
            .and_then(|mailbox| mailbox.try_pop())
    }

    /// Whether `agent_id` has a mailbox.
    pub fn is_registered(&self, agent_id: &AgentId) -> bool {
        self.mailboxes.contains_key(agent_id)
    }

    /// Number of registered agents.
    pub fn agent_count(&self) -> usize {
        self.mailboxes.len()
    }

    /// Snapshot of every message `agent_id` has sent, in call order.
    ///
    /// Empty for unregistered agents.
    pub fn history(&self, agent_id: &AgentId) -> Vec<Message> {
        self.history
            .get(agent_id)
            .map(|bucket| bucket.clone())
            .unwrap_or_default()
    }

    /// Number of messages dropped for lack of a registered receiver.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
