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

#![forbid(unsafe_code)]
//! Courier Library
//!
//! Courier is an in-process message broker for cooperating agents. Each
//! registered agent owns a priority-ordered mailbox; agents exchange
//! point-to-point requests and replies, task assignments, and broadcasts
//! through a shared [`Broker`](crate::common::Broker), and consume their
//! mailboxes from independently scheduled polling loops.

/// Agent loop states and configuration.
pub(crate) mod agent;
/// Broker, mailbox, runtime, and configuration.
pub(crate) mod common;
pub(crate) mod message;
/// Boundary trait definitions consumed by the dispatch loop.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate, as well as the
/// `async_trait` attribute used to implement [`Collaborator`](crate::traits::Collaborator).
pub mod prelude {
    pub use async_trait::async_trait;

    pub use crate::agent::{AgentConfig, Idle, MailboxAgent, Started};
    pub use crate::common::{
        AgentHandle, Broker, BrokerError, BrokerRef, CourierApp, CourierConfig, Mailbox, Runtime,
        CONFIG,
    };
    pub use crate::message::{
        AgentId, Message, MessageId, MessageKind, Recipient, BROADCAST_ALL, DEFAULT_PRIORITY,
    };
    pub use crate::traits::Collaborator;
}
