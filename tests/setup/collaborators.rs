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

//! Stub collaborators standing in for the host's response/task functions.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::bail;

use courier::prelude::*;

/// Returns the same canned reply to every call.
pub struct CannedCollaborator {
    reply: String,
}

impl CannedCollaborator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Collaborator for CannedCollaborator {
    async fn generate_response(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }

    async fn execute_task(&self, _task: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }
}

/// Records every prompt it is given before replying.
pub struct RecordingCollaborator {
    prompts: Mutex<Vec<String>>,
    reply: String,
}

impl RecordingCollaborator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: reply.into(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Collaborator for RecordingCollaborator {
    async fn generate_response(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails its first call, then answers normally.
pub struct FlakyCollaborator {
    failed_once: AtomicBool,
    reply: String,
}

impl FlakyCollaborator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            failed_once: AtomicBool::new(false),
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Collaborator for FlakyCollaborator {
    async fn generate_response(&self, _prompt: &str) -> anyhow::Result<String> {
        if !self.failed_once.swap(true, Ordering::SeqCst) {
            bail!("collaborator offline");
        }
        Ok(self.reply.clone())
    }
}
