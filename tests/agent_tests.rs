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
use std::sync::{Arc, Mutex};
use std::time::Duration;

use courier::prelude::*;

use crate::setup::collaborators::*;
use crate::setup::*;

mod setup;

const POLL: Duration = Duration::from_millis(5);
const DEADLINE: Duration = Duration::from_secs(2);

fn fast(id: &str) -> AgentConfig {
    AgentConfig::new(id).with_poll_interval(POLL)
}

/// A delivery hook that appends every dequeued message to a shared list.
fn collector() -> (
    Arc<Mutex<Vec<Message>>>,
    impl Fn(&Message) + Send + Sync + 'static,
) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |message: &Message| {
        sink.lock().unwrap().push(message.clone())
    })
}

fn saw_completion(seen: &Arc<Mutex<Vec<Message>>>, task: &str, result: &str) -> bool {
    seen.lock().unwrap().iter().any(|m| {
        m.kind == MessageKind::Broadcast && m.body.contains(task) && m.body.contains(result)
    })
}

#[tokio::test]
async fn request_round_trip() -> anyhow::Result<()> {
    initialize_tracing();
    let mut app = CourierApp::launch();

    let (manager_seen, manager_hook) = collector();
    let manager = app
        .new_agent(fast("manager"), Arc::new(CannedCollaborator::new("unused")))?
        .on_delivery(manager_hook)
        .start();
    let _worker = app
        .new_agent(fast("worker"), Arc::new(CannedCollaborator::new("pong")))?
        .start();

    let request = manager.request("worker", "ping", 1);

    assert!(wait_until(DEADLINE, || !manager_seen.lock().unwrap().is_empty()).await);
    {
        let seen = manager_seen.lock().unwrap();
        let reply = &seen[0];
        assert_eq!(reply.kind, MessageKind::Response);
        assert_eq!(reply.body, "pong");
        assert_eq!(reply.sender, AgentId::new("worker"));
        assert_eq!(reply.reply_to, Some(request.id));
    }

    app.shutdown_all().await
}

#[tokio::test]
async fn task_completion_is_broadcast_to_everyone_else() -> anyhow::Result<()> {
    initialize_tracing();
    let mut app = CourierApp::launch();

    let (manager_seen, manager_hook) = collector();
    let manager = app
        .new_agent(fast("manager"), Arc::new(CannedCollaborator::new("unused")))?
        .on_delivery(manager_hook)
        .start();

    let (w1_seen, w1_hook) = collector();
    let _w1 = app
        .new_agent(fast("worker-1"), Arc::new(CannedCollaborator::new("done")))?
        .on_delivery(w1_hook)
        .start();

    let (w2_seen, w2_hook) = collector();
    let _w2 = app
        .new_agent(fast("worker-2"), Arc::new(CannedCollaborator::new("idle")))?
        .on_delivery(w2_hook)
        .start();

    manager.assign_task("worker-1", "job-1");

    assert!(wait_until(DEADLINE, || saw_completion(&manager_seen, "job-1", "done")).await);
    assert!(wait_until(DEADLINE, || saw_completion(&w2_seen, "job-1", "done")).await);

    // The executing worker saw the assignment but not its own completion broadcast.
    assert!(w1_seen
        .lock()
        .unwrap()
        .iter()
        .any(|m| m.kind == MessageKind::TaskAssignment && m.body == "job-1"));
    assert!(!saw_completion(&w1_seen, "job-1", "done"));

    app.shutdown_all().await
}

#[tokio::test]
async fn queued_requests_drain_in_priority_order() -> anyhow::Result<()> {
    initialize_tracing();
    let mut app = CourierApp::launch();
    let broker = app.broker();

    let recorder = Arc::new(RecordingCollaborator::new("ok"));
    let worker = app.new_agent(fast("worker"), recorder.clone())?;

    // Queue both requests before the loop starts polling.
    broker.send(Message::request("outsider", "worker", "background chores"));
    broker.send(Message::request("outsider", "worker", "urgent escalation").with_priority(5));
    let _worker = worker.start();

    assert!(wait_until(DEADLINE, || recorder.prompts().len() == 2).await);
    let prompts = recorder.prompts();
    assert!(prompts[0].contains("urgent escalation"));
    assert!(prompts[1].contains("background chores"));

    app.shutdown_all().await
}

#[tokio::test]
async fn stop_halts_consumption_at_the_next_poll() -> anyhow::Result<()> {
    initialize_tracing();
    let mut app = CourierApp::launch();

    let worker = app
        .new_agent(fast("worker"), Arc::new(CannedCollaborator::new("pong")))?
        .start();
    worker.stop().await?;

    // Nobody is polling any more: mail stays queued.
    let broker = worker.broker().clone();
    broker.send(Message::request("outsider", "worker", "anyone there?"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        broker
            .receive(&AgentId::new("worker"))
            .expect("message still queued")
            .body,
        "anyone there?"
    );

    app.shutdown_all().await
}

#[tokio::test]
async fn collaborator_failure_leaves_the_loop_alive() -> anyhow::Result<()> {
    initialize_tracing();
    let mut app = CourierApp::launch();

    let (manager_seen, manager_hook) = collector();
    let manager = app
        .new_agent(fast("manager"), Arc::new(CannedCollaborator::new("unused")))?
        .on_delivery(manager_hook)
        .start();
    let _worker = app
        .new_agent(fast("worker"), Arc::new(FlakyCollaborator::new("recovered")))?
        .start();

    // The first request dies inside the collaborator; the second is answered.
    manager.request("worker", "first", 1);
    manager.request("worker", "second", 1);

    assert!(
        wait_until(DEADLINE, || manager_seen
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.body == "recovered"))
        .await
    );
    assert_eq!(
        manager_seen
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.kind == MessageKind::Response)
            .count(),
        1
    );

    app.shutdown_all().await
}

#[tokio::test]
async fn duplicate_agent_id_is_rejected_at_construction() {
    initialize_tracing();
    let mut app = CourierApp::launch();

    let _first = app
        .new_agent(fast("twin"), Arc::new(CannedCollaborator::new("a")))
        .expect("fresh id");
    let second = app.new_agent(fast("twin"), Arc::new(CannedCollaborator::new("b")));
    assert!(matches!(
        second,
        Err(BrokerError::AlreadyRegistered(ref id)) if id.as_str() == "twin"
    ));
}
