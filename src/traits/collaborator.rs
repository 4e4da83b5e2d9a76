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

use async_trait::async_trait;

/// The external functions an agent calls while dispatching.
///
/// Supplied by the hosting application — typically an LLM client, but the
/// dispatch loop treats it as a black box that may fail. Failures are not
/// retried here: the loop logs them and keeps listening.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Produces the reply text for an incoming request prompt.
    async fn generate_response(&self, prompt: &str) -> anyhow::Result<String>;

    /// Runs an assigned task to completion and returns its result text.
    ///
    /// Defaults to phrasing the task as a request to
    /// [`generate_response`](Collaborator::generate_response).
    async fn execute_task(&self, task: &str) -> anyhow::Result<String> {
        self.generate_response(&format!("Execute this task: {task}"))
            .await
    }
}
