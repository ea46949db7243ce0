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

//! # Breeze
//!
//! Breeze is a compact, self-describing, cross-language binary
//! serialization format for structured messages, primitives, and generic
//! containers, built for RPC payloads and persistent records where
//! polyglot interoperability, schema evolution, and small on-wire size
//! matter.
//!
//! ## Key ideas
//!
//! - **Type-tagged layout**: every value leads with a byte identifying its
//!   type; small integers and short strings are embedded directly in the
//!   tag
//! - **Packed containers**: homogeneous arrays and maps hoist the element
//!   type out of each element
//! - **Message-type interning**: a message name is written once per buffer;
//!   later occurrences are one-byte back-references
//! - **Schema evolution**: fields are identified by stable integer
//!   indices, and unknown fields are skipped
//!
//! ## Dynamically typed values
//!
//! [`Value`] is the universal top type. Anything on the wire can be read
//! into it, and messages without a registered type decode as
//! [`GenericMessage`]:
//!
//! ```rust
//! use breeze::reader::read_value;
//! use breeze::writer::write_value;
//! use breeze::{ByteBuffer, GenericMessage, Value};
//!
//! # fn main() -> Result<(), breeze::Error> {
//! let mut msg = GenericMessage::new("Greeting");
//! msg.put_field(1, Value::from("hi"));
//! msg.put_field(2, Value::from(5i32));
//!
//! let mut buf = ByteBuffer::new(64);
//! write_value(&mut buf, &Value::Message(msg.clone()))?;
//!
//! let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
//! assert_eq!(read_value(&mut rbuf)?, Value::Message(msg));
//! # Ok(())
//! # }
//! ```
//!
//! ## Statically typed values
//!
//! [`Serializer`] maps Rust types onto the wire grammar; containers of
//! statically typed elements choose the packed forms automatically:
//!
//! ```rust
//! use breeze::{ByteBuffer, Serializer};
//!
//! # fn main() -> Result<(), breeze::Error> {
//! let mut buf = ByteBuffer::new(16);
//! vec![1i32, 2, 3].write(&mut buf, true)?;
//!
//! let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
//! assert_eq!(Vec::<i32>::read(&mut rbuf)?, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! Message types implement [`Message`] for their field round trips and get
//! a [`Serializer`] impl from [`impl_breeze_message!`]; see the macro docs
//! for a complete example.

pub use breeze_core::buffer::ByteBuffer;
pub use breeze_core::config::Config;
pub use breeze_core::context::EncodeContext;
pub use breeze_core::error::Error;
pub use breeze_core::impl_breeze_message;
pub use breeze_core::message::{GenericMessage, Message};
pub use breeze_core::schema::{Field, Schema};
pub use breeze_core::serializer::message::{read_message, read_message_tagged, write_message_value};
pub use breeze_core::serializer::Serializer;
pub use breeze_core::value::Value;

pub use breeze_core::reader;
pub use breeze_core::types;
pub use breeze_core::writer;
