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

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Mutex;

use tracing::{trace, warn};

use crate::common::CONFIG;
use crate::message::Message;

/// A per-agent buffer of pending messages, ordered by priority.
///
/// A mailbox is a multiple-producer/single-consumer structure: any task may
/// [`push`](Mailbox::push) into it through the broker, while only the owning
/// agent's loop ever [`try_pop`](Mailbox::try_pop)s from it. Both operations
/// are non-blocking; the mailbox grows without bound, and crossing the
/// configured warn depth emits a `warn!` event so hosts can layer their own
/// bounding policy on top.
///
/// Ordering is total: priority descending, then arrival sequence ascending,
/// so equal-priority messages drain in FIFO order.
#[derive(Debug, Default)]
pub struct Mailbox {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    heap: BinaryHeap<Queued>,
    arrivals: u64,
}

/// A pending message plus the arrival sequence that breaks priority ties.
#[derive(Debug)]
struct Queued {
    priority: i32,
    seq: u64,
    message: Message,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // Max-heap order: higher priority wins, then the earlier arrival.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl Mailbox {
    /// Inserts a message in priority order. Never blocks the caller.
    pub fn push(&self, message: Message) {
        let mut inner = self.inner.lock().expect("mailbox lock poisoned");
        let seq = inner.arrivals;
        inner.arrivals += 1;
        trace!(id = %message.id, priority = message.priority, seq, "mailbox push");
        inner.heap.push(Queued {
            priority: message.priority,
            seq,
            message,
        });

        let warn_depth = CONFIG.limits.mailbox_warn_depth;
        if warn_depth > 0 && inner.heap.len() == warn_depth {
            warn!(depth = warn_depth, "mailbox reached warn depth");
        }
    }

    /// Removes and returns the highest-priority, earliest-arrived pending
    /// message, or `None` when the mailbox is empty. Never blocks.
    pub fn try_pop(&self) -> Option<Message> {
        let mut inner = self.inner.lock().expect("mailbox lock poisoned");
        let queued = inner.heap.pop()?;
        trace!(id = %queued.message.id, priority = queued.priority, seq = queued.seq, "mailbox pop");
        Some(queued.message)
    }

    /// Number of pending messages.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("mailbox lock poisoned").heap.len()
    }

    /// Whether no messages are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
