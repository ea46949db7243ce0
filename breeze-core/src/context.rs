// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashMap;

/// Per-buffer bookkeeping for message-type reference interning.
///
/// The first occurrence of a message type name in a buffer assigns
/// `id = counter + 1`; later occurrences are emitted as back-references.
/// The read side applies the same assignment rule on every full message
/// header, so the writer's and reader's counters advance in lock-step over
/// the same byte stream.
///
/// A context is created lazily on first message write or read and is
/// discarded by [`ByteBuffer::reset`](crate::buffer::ByteBuffer::reset).
#[derive(Debug, Default)]
pub struct EncodeContext {
    counter: u64,
    name_to_id: HashMap<String, u64>,
    id_to_name: HashMap<u64, String>,
}

impl EncodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id previously assigned to `name`, if any.
    pub fn lookup_id(&self, name: &str) -> Option<u64> {
        self.name_to_id.get(name).copied()
    }

    /// Assigns the next id to `name` and records it in both directions.
    pub fn intern(&mut self, name: &str) -> u64 {
        self.counter += 1;
        self.name_to_id.insert(name.to_string(), self.counter);
        self.id_to_name.insert(self.counter, name.to_string());
        self.counter
    }

    /// Name assigned to `id`, if any.
    pub fn name_of(&self, id: u64) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }

    pub fn reset(&mut self) {
        self.counter = 0;
        self.name_to_id.clear();
        self.id_to_name.clear();
    }
}
