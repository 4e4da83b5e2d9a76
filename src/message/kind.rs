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

/// The closed set of message categories the dispatch loop understands.
///
/// A [`Request`](MessageKind::Request) and a [`TaskAssignment`](MessageKind::TaskAssignment)
/// trigger follow-up traffic when dispatched; a [`Response`](MessageKind::Response)
/// and a [`Broadcast`](MessageKind::Broadcast) are terminal deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Asks the receiver to produce a [`Response`](MessageKind::Response).
    Request,
    /// Answers an earlier request; carries the request id in `reply_to`.
    Response,
    /// Fan-out announcement with no expected reply.
    Broadcast,
    /// Hands the receiver a task to execute; completion is broadcast.
    TaskAssignment,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            MessageKind::Request => "request",
            MessageKind::Response => "response",
            MessageKind::Broadcast => "broadcast",
            MessageKind::TaskAssignment => "task_assignment",
        };
        f.write_str(kind)
    }
}
