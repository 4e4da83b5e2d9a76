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

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{AgentId, MessageKind, Recipient};

/// Priority assigned to messages that do not ask for one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Unique identifier of a message, assigned by the broker at send time.
///
/// Constructing a message yields the nil placeholder id; whatever value a
/// caller puts in the `id` field is discarded when the message is sent, so
/// only ids observed on messages returned by
/// [`Broker::send`](crate::common::Broker::send) (or received from a
/// mailbox) are meaningful for correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generates a fresh unique id.
    pub(crate) fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether this is the nil placeholder id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A routed unit of agent-to-agent communication.
///
/// Messages are value objects: once constructed, only the broker mutates
/// them, and only to stamp a fresh [`MessageId`] at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique id, stamped by the broker on every send.
    pub id: MessageId,
    /// The originating agent.
    pub sender: AgentId,
    /// A single target agent, or every other registered agent.
    pub recipient: Recipient,
    /// Category driving the receiver's dispatch.
    pub kind: MessageKind,
    /// Opaque text payload.
    pub body: String,
    /// Higher values are serviced first; defaults to [`DEFAULT_PRIORITY`].
    pub priority: i32,
    /// Id of the message this one answers, carried as metadata only.
    pub reply_to: Option<MessageId>,
}

impl Message {
    fn new(
        sender: AgentId,
        recipient: Recipient,
        kind: MessageKind,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::default(),
            sender,
            recipient,
            kind,
            body: body.into(),
            priority: DEFAULT_PRIORITY,
            reply_to: None,
        }
    }

    /// Builds a request addressed to `recipient`.
    pub fn request(
        sender: impl Into<AgentId>,
        recipient: impl Into<Recipient>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(
            sender.into(),
            recipient.into(),
            MessageKind::Request,
            body,
        )
    }

    /// Builds a response to the message identified by `reply_to`.
    pub fn response(
        sender: impl Into<AgentId>,
        recipient: impl Into<Recipient>,
        body: impl Into<String>,
        reply_to: MessageId,
    ) -> Self {
        let mut message = Self::new(
            sender.into(),
            recipient.into(),
            MessageKind::Response,
            body,
        );
        message.reply_to = Some(reply_to);
        message
    }

    /// Builds an announcement fanned out to every other registered agent.
    pub fn broadcast(sender: impl Into<AgentId>, body: impl Into<String>) -> Self {
        Self::new(sender.into(), Recipient::All, MessageKind::Broadcast, body)
    }

    /// Builds a task assignment addressed to `recipient`.
    pub fn task_assignment(
        sender: impl Into<AgentId>,
        recipient: impl Into<Recipient>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(
            sender.into(),
            recipient.into(),
            MessageKind::TaskAssignment,
            body,
        )
    }

    /// Overrides the default priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
