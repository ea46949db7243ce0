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

/// Default upper bound on container element counts.
pub const DEFAULT_MAX_ELEM_SIZE: usize = 100_000;

/// Configuration for Breeze encoding and decoding.
///
/// A `Config` travels with the [`ByteBuffer`](crate::buffer::ByteBuffer) it
/// was attached to, so every read on that buffer observes the same limits.
#[derive(Clone, Debug)]
pub struct Config {
    /// Upper bound on declared container element counts. A count above this
    /// limit is rejected with `SizeOverflow` before any element is read.
    /// This is a resource-exhaustion guard, not a format limit.
    pub max_elem_size: usize,
    /// Reserved for circular-reference detection. Not enforced in this
    /// version.
    pub max_write_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_elem_size: DEFAULT_MAX_ELEM_SIZE,
            max_write_count: 0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_elem_size(mut self, max_elem_size: usize) -> Self {
        self.max_elem_size = max_elem_size;
        self
    }
}
