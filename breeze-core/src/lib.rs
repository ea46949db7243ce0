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

//! # Breeze Core
//!
//! The core implementation of the Breeze serialization format: a compact,
//! self-describing, cross-language wire format for structured messages,
//! primitives, and generic containers.
//!
//! ## Architecture
//!
//! - **`buffer`**: growable byte buffer with independent read/write cursors
//!   and the big-endian / varint / zigzag primitive codecs
//! - **`types`**: the type-tag grammar, where every leading byte maps to
//!   one logical type and several ranges embed small values directly
//! - **`writer`** / **`reader`**: the codec itself: scalars with and
//!   without tags, packed and heterogeneous containers, message framing
//!   with per-buffer type-reference interning, and the dynamic
//!   `write_value`/`read_value` pair
//! - **`serializer`**: the statically typed dispatch, one trait mapping
//!   Rust types onto the grammar
//! - **`message`** / **`schema`**: the `Message` trait, the
//!   `GenericMessage` fallback, and schema metadata
//! - **`context`**: per-buffer message-type interning state
//! - **`config`** / **`error`**: resource limits and the error type
//!
//! A `ByteBuffer` and its context are exclusively owned by one caller for
//! the duration of an encode or decode; separate buffers can be used from
//! separate threads without coordination.
//!
//! This crate is typically consumed through the `breeze` facade crate,
//! which re-exports the public surface.

pub mod buffer;
pub mod config;
pub mod context;
pub mod error;
pub mod message;
pub mod reader;
pub mod schema;
pub mod serializer;
pub mod types;
pub mod value;
pub mod writer;
