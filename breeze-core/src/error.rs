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

//! Error type for Breeze encoding and decoding.
//!
//! Error constructors sit on every buffer read and type check, so the
//! fallible paths are marked `#[cold]` to keep the successful paths hot.

use std::borrow::Cow;

use thiserror::Error;

/// Error raised by Breeze encode and decode operations.
///
/// All errors bubble up to the top-level call; nothing is recovered
/// silently.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The buffer was exhausted in the middle of a read.
    #[error("not enough bytes: need {need}, remain {remain}")]
    NotEnough { need: usize, remain: usize },

    /// A varint did not terminate within 64 bits.
    #[error("varint overflow: no terminator within 64 bits")]
    Overflow,

    /// A length-prefixed region did not end exactly at its declared
    /// boundary.
    #[error("declared byte size does not match the region that was read")]
    WrongSize,

    /// A container declared more elements than the configured limit.
    #[error("container size {size} exceeds the limit {max}")]
    SizeOverflow { size: usize, max: usize },

    /// The tag on the wire is not convertible to the destination type.
    #[error("{0}")]
    TypeMismatch(Cow<'static, str>),

    /// A message name matched neither the destination's name nor its alias.
    #[error("message type mismatch: expect {expect}, got {actual}")]
    MessageTypeMismatch { expect: String, actual: String },

    /// A message back-reference pointed at an id the context never assigned.
    #[error("unknown message reference id {0}")]
    MalformedReference(u64),

    /// `field_by_name` was called on a message without an attached schema.
    #[error("message has no schema attached")]
    NoSchema,

    /// A tag outside the defined grammar, or a value shape the encoder
    /// cannot handle.
    #[error("{0}")]
    Unsupported(Cow<'static, str>),
}

impl Error {
    #[cold]
    pub fn not_enough(need: usize, remain: usize) -> Self {
        Error::NotEnough { need, remain }
    }

    #[cold]
    pub fn size_overflow(size: usize, max: usize) -> Self {
        Error::SizeOverflow { size, max }
    }

    #[cold]
    pub fn type_mismatch<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::TypeMismatch(s.into())
    }

    #[cold]
    pub fn message_type_mismatch(expect: &str, actual: &str) -> Self {
        Error::MessageTypeMismatch {
            expect: expect.to_string(),
            actual: actual.to_string(),
        }
    }

    #[cold]
    pub fn malformed_reference(id: u64) -> Self {
        Error::MalformedReference(id)
    }

    #[cold]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Unsupported(s.into())
    }
}

/// Ensures a condition holds; otherwise returns the given [`enum@Error`].
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
