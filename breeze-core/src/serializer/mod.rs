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

//! Statically typed serialization.
//!
//! [`Serializer`] maps a Rust type onto the Breeze wire grammar. Scalars,
//! `String`, `Vec<T>`, `HashMap<K, V>`, and `Option<T>` are covered here;
//! message types get their impl from the [`impl_breeze_message!`] macro (or
//! a hand-written equivalent), and [`Value`](crate::value::Value) is the
//! dynamically typed escape hatch.

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::reader::{read_type_header, TypeHeader};

mod bool;
mod list;
mod map;
pub mod message;
mod number;
mod option;
mod string;
mod value;

/// Maps a Rust type to its Breeze wire encoding.
///
/// `breeze_type` is the canonical long-form tag hoisted out of packed
/// containers when this type is the element type. Types without a single
/// canonical tag return `None`, which routes containers of them to the
/// heterogeneous forms: `Value`, `Option<T>`, `bool` (whose tag embeds the
/// value), and `GenericMessage` (whose name varies per instance).
pub trait Serializer: Sized {
    fn breeze_type() -> Option<u8>;

    /// Writes the value: fully tagged when `with_type`, bare payload
    /// otherwise (the form packed containers use).
    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error>;

    /// Writes the hoisted element tag for packed containers. Message types
    /// override this to write the interned message header.
    fn write_packed_type(&self, buf: &mut ByteBuffer) -> Result<(), Error> {
        match Self::breeze_type() {
            Some(tag) => {
                buf.write_u8(tag);
                Ok(())
            }
            None => Err(Error::unsupported(
                "dynamically typed values cannot be packed",
            )),
        }
    }

    /// Reads a tagged value, accepting every convertible wire form.
    fn read(buf: &mut ByteBuffer) -> Result<Self, Error> {
        let head = read_type_header(buf)?;
        Self::read_tagged(buf, &head)
    }

    /// Reads a value whose type header was already consumed. This doubles
    /// as the packed-element reader: the hoisted header applies to every
    /// element, including direct tags whose payload is empty or
    /// fixed-length.
    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error>;
}
