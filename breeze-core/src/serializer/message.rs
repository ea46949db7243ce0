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

//! Message glue between the [`Message`] trait and the [`Serializer`] trait.
//!
//! Concrete message types implement [`Message`] and pick up their
//! [`Serializer`] impl from [`impl_breeze_message!`]; the functions here are
//! what that impl (and any hand-written one) delegates to.

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::message::{GenericMessage, Message};
use crate::reader::{read_message_fields, read_type_header, TypeHeader};
use crate::serializer::Serializer;
use crate::types::MESSAGE;
use crate::writer::{write_message, write_message_without_type};

/// Writes a message occurrence. Without `with_type` only the field region
/// is written, the form packed containers use after hoisting the interned
/// type header out.
pub fn write_message_value<T: Message>(
    msg: &T,
    buf: &mut ByteBuffer,
    with_type: bool,
) -> Result<(), Error> {
    if with_type {
        write_message(buf, msg.name(), |b| msg.write_fields(b))
    } else {
        write_message_without_type(buf, |b| msg.write_fields(b))
    }
}

/// Reads a message whose header was already consumed, checking the
/// received name against the destination's name and alias.
pub fn read_message_tagged<T: Message>(
    buf: &mut ByteBuffer,
    head: &TypeHeader,
) -> Result<T, Error> {
    let name = expect_message_name(head)?;
    let mut msg = T::default();
    if msg.name() != name && msg.alias() != name {
        return Err(Error::message_type_mismatch(msg.name(), name));
    }
    read_message_fields(buf, |b, index| msg.read_field(b, index))?;
    Ok(msg)
}

/// Reads a complete tagged message occurrence into a fresh `T`.
pub fn read_message<T: Message>(buf: &mut ByteBuffer) -> Result<T, Error> {
    let head = read_type_header(buf)?;
    read_message_tagged(buf, &head)
}

fn expect_message_name(head: &TypeHeader) -> Result<&str, Error> {
    match (head.tag, head.name.as_deref()) {
        (MESSAGE, Some(name)) => Ok(name),
        _ => Err(Error::type_mismatch(format!(
            "tag {:#04x} is not convertible to a message",
            head.tag
        ))),
    }
}

impl Serializer for GenericMessage {
    // The name is per-instance, so a generic message has no static wire
    // type to hoist.
    fn breeze_type() -> Option<u8> {
        None
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_message_value(self, buf, with_type)
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        let name = expect_message_name(head)?.to_string();
        let mut msg = GenericMessage::new(name);
        read_message_fields(buf, |b, index| msg.read_field(b, index))?;
        Ok(msg)
    }
}

/// Implements [`Serializer`] for a type that implements [`Message`]: the
/// hand-written counterpart of what the Breeze code generator emits in
/// other languages.
///
/// ```
/// use breeze_core::buffer::ByteBuffer;
/// use breeze_core::error::Error;
/// use breeze_core::impl_breeze_message;
/// use breeze_core::message::Message;
/// use breeze_core::reader::{read_i64, skip_value};
/// use breeze_core::writer::write_i64_field;
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Ping {
///     seq: i64,
/// }
///
/// impl Message for Ping {
///     fn name(&self) -> &str {
///         "Ping"
///     }
///
///     fn write_fields(&self, buf: &mut ByteBuffer) -> Result<(), Error> {
///         write_i64_field(buf, 1, self.seq);
///         Ok(())
///     }
///
///     fn read_field(&mut self, buf: &mut ByteBuffer, index: i32) -> Result<(), Error> {
///         match index {
///             1 => self.seq = read_i64(buf)?,
///             _ => skip_value(buf)?,
///         }
///         Ok(())
///     }
/// }
///
/// impl_breeze_message!(Ping);
/// ```
#[macro_export]
macro_rules! impl_breeze_message {
    ($ty:ty) => {
        impl $crate::serializer::Serializer for $ty {
            fn breeze_type() -> Option<u8> {
                Some($crate::types::MESSAGE)
            }

            fn write(
                &self,
                buf: &mut $crate::buffer::ByteBuffer,
                with_type: bool,
            ) -> Result<(), $crate::error::Error> {
                $crate::serializer::message::write_message_value(self, buf, with_type)
            }

            fn write_packed_type(
                &self,
                buf: &mut $crate::buffer::ByteBuffer,
            ) -> Result<(), $crate::error::Error> {
                $crate::writer::write_message_type(buf, $crate::message::Message::name(self));
                Ok(())
            }

            fn read_tagged(
                buf: &mut $crate::buffer::ByteBuffer,
                head: &$crate::reader::TypeHeader,
            ) -> Result<Self, $crate::error::Error> {
                $crate::serializer::message::read_message_tagged(buf, head)
            }
        }
    };
}
