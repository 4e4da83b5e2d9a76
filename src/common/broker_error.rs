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

use crate::message::AgentId;

/// Represents errors that can occur while interacting with the broker.
///
/// Routing problems are deliberately absent: sending to an unregistered
/// receiver drops the message without signalling the sender (see
/// [`Broker::send`](crate::common::Broker::send)).
#[derive(Debug)]
pub enum BrokerError {
    /// An agent id was registered a second time.
    AlreadyRegistered(AgentId),
}

impl std::fmt::Display for BrokerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BrokerError::AlreadyRegistered(id) => {
                write!(f, "Agent {} is already registered", id)
            }
        }
    }
}

impl std::error::Error for BrokerError {}
