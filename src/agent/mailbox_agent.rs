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
use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub use idle::Idle;
pub use started::Started;

use crate::common::{BrokerRef, DeliveryHook};
use crate::message::AgentId;
use crate::traits::Collaborator;

mod idle;
mod started;

/// An agent bound to one mailbox, parameterized by its lifecycle state.
///
/// In the [`Idle`] state the agent is constructed and wired; [`start`](MailboxAgent::start)
/// converts it to [`Started`] and spawns the consumption loop, which polls
/// the broker, dispatches each dequeued message by kind, and exits
/// cooperatively when its handle is stopped.
pub struct MailboxAgent<AgentState> {
    pub(crate) id: AgentId,

    pub(crate) broker: BrokerRef,

    pub(crate) poll_interval: Duration,

    pub(crate) collaborator: Arc<dyn Collaborator>,

    /// Hook invoked for every dequeued message.
    pub(crate) on_delivery: DeliveryHook,

    pub(crate) cancellation: CancellationToken,

    pub(crate) tracker: TaskTracker,

    _agent_state: std::marker::PhantomData<AgentState>,
}

impl<AgentState> Debug for MailboxAgent<AgentState> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailboxAgent")
            .field("id", &self.id)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
