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

use tokio::time::sleep;
use tracing::{debug, error, info, instrument, trace};

use crate::agent::MailboxAgent;
use crate::common::CONFIG;
use crate::message::{Message, MessageKind};

/// Type-state marker for a [`MailboxAgent`] whose consumption loop is running.
///
/// The loop polls the broker for the agent's next pending message. A
/// dequeued message is dispatched to completion before the next poll; an
/// empty poll suspends the loop for the configured interval. Cancellation
/// via the agent's handle is observed only at poll boundaries, so an
/// in-flight dispatch always finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Started;

impl MailboxAgent<Started> {
    #[instrument(skip(self), fields(agent = %self.id))]
    pub(crate) async fn listen(self) {
        debug!("agent listening");
        let mut idle_polls: u64 = 0;

        loop {
            if self.cancellation.is_cancelled() {
                trace!("cancellation observed at poll boundary");
                break;
            }

            match self.broker.receive(&self.id) {
                Some(message) => {
                    idle_polls = 0;
                    if let Err(error) = self.dispatch(message).await {
                        // Collaborator failures are not retried; the loop keeps listening.
                        error!(%error, "dispatch failed");
                    }
                }
                None => {
                    idle_polls += 1;
                    let log_every = CONFIG.polling.idle_log_every;
                    if log_every > 0 && idle_polls % log_every == 0 {
                        trace!(idle_polls, "mailbox still empty");
                    }
                    tokio::select! {
                        _ = self.cancellation.cancelled() => {
                            trace!("cancellation observed while idle");
                            break;
                        }
                        _ = sleep(self.poll_interval) => {}
                    }
                }
            }
        }

        debug!("agent stopped");
    }

    #[instrument(skip(self, message), fields(agent = %self.id, kind = %message.kind, from = %message.sender))]
    async fn dispatch(&self, message: Message) -> anyhow::Result<()> {
        trace!(id = %message.id, body = %message.body, "dispatching");
        (self.on_delivery)(&message);

        match message.kind {
            MessageKind::Request => {
                let prompt = format!(
                    "You are agent {}. You received this request: {}\n\nPlease provide a helpful response:",
                    self.id, message.body
                );
                let body = self.collaborator.generate_response(&prompt).await?;
                self.broker.send(Message::response(
                    self.id.clone(),
                    message.sender.clone(),
                    body,
                    message.id,
                ));
            }
            MessageKind::TaskAssignment => {
                let result = self.collaborator.execute_task(&message.body).await?;
                self.broker.send(Message::broadcast(
                    self.id.clone(),
                    format!("Task completed: {}. Result: {}", message.body, result),
                ));
            }
            MessageKind::Response | MessageKind::Broadcast => {
                // Terminal deliveries: observable, but no automatic follow-up traffic.
                info!(id = %message.id, reply_to = ?message.reply_to, "message delivered");
            }
        }

        Ok(())
    }
}
