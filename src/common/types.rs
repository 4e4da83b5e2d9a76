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

//! Common type aliases shared across the crate.

use std::sync::Arc;

use crate::common::Broker;
use crate::message::Message;

/// A shared reference to the broker, injected into every agent at construction.
///
/// There is no global broker: hosts create one per running system and pass
/// this reference around explicitly.
pub type BrokerRef = Arc<Broker>;

/// Crate-internal: hook invoked for every message an agent dequeues.
///
/// Used as the observable side channel for deliveries that trigger no
/// automatic follow-up traffic (responses and broadcasts).
pub(crate) type DeliveryHook = Box<dyn Fn(&Message) + Send + Sync + 'static>;
