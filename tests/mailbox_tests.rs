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

use courier::prelude::*;

use crate::setup::*;

mod setup;

#[tokio::test]
async fn pops_follow_priority_then_arrival_order() {
    initialize_tracing();
    let mailbox = Mailbox::default();

    for (body, priority) in [
        ("low", 1),
        ("urgent-first", 5),
        ("mid", 3),
        ("urgent-second", 5),
    ] {
        mailbox.push(Message::request("alpha", "beta", body).with_priority(priority));
    }

    let drained: Vec<String> = std::iter::from_fn(|| mailbox.try_pop())
        .map(|message| message.body)
        .collect();
    assert_eq!(drained, ["urgent-first", "urgent-second", "mid", "low"]);
}

#[tokio::test]
async fn empty_mailbox_reports_no_message() {
    initialize_tracing();
    let mailbox = Mailbox::default();

    assert!(mailbox.try_pop().is_none());
    assert!(mailbox.try_pop().is_none());

    mailbox.push(Message::request("alpha", "beta", "wake up"));
    assert_eq!(mailbox.try_pop().expect("just pushed").body, "wake up");
    assert!(mailbox.try_pop().is_none());
}

#[tokio::test]
async fn concurrent_producers_land_every_message() {
    initialize_tracing();
    let mailbox = Arc::new(Mailbox::default());

    let mut producers = Vec::new();
    for producer in 0..8 {
        let mailbox = mailbox.clone();
        producers.push(tokio::spawn(async move {
            for i in 0..50 {
                mailbox.push(
                    Message::broadcast(format!("producer-{producer}"), format!("update-{i}"))
                        .with_priority(i % 3),
                );
            }
        }));
    }
    for producer in producers {
        producer.await.expect("producer task panicked");
    }

    assert_eq!(mailbox.len(), 8 * 50);

    let mut last_priority = i32::MAX;
    while let Some(message) = mailbox.try_pop() {
        assert!(message.priority <= last_priority);
        last_priority = message.priority;
    }
    assert!(mailbox.is_empty());
}
