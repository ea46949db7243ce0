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

//! The Breeze type-tag grammar.
//!
//! The leading byte of every encoded value identifies its type. Several tag
//! ranges embed the value (or a short string's length) directly to save
//! bytes; the remaining tags are single fixed constants. Every possible
//! leading byte maps to at most one type, and the writer's compact forms are
//! pure encoder-side choices: readers accept the compact and the long form
//! of each type interchangeably.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Tags `0x00..=0x3e` encode a string whose byte length equals the tag.
pub const STRING_DIRECT_MAX: u8 = 0x3e;
/// String: varint byte length, then UTF-8 bytes.
pub const STRING: u8 = 0x3f;

/// Tags `0x40..=0x7e` encode an int32 directly: value = tag − [`INT32_ZERO`].
pub const INT32_DIRECT_MIN: u8 = 0x40;
pub const INT32_DIRECT_MAX: u8 = 0x7e;
/// Bias for the direct int32 range, covering values −16..=46.
pub const INT32_ZERO: u8 = 0x50;
/// Int32: zigzag varint payload.
pub const INT32: u8 = 0x7f;

/// Tags `0x80..=0x97` encode an int64 directly: value = tag − [`INT64_ZERO`].
pub const INT64_DIRECT_MIN: u8 = 0x80;
pub const INT64_DIRECT_MAX: u8 = 0x97;
/// Bias for the direct int64 range, covering values −8..=15.
pub const INT64_ZERO: u8 = 0x88;
/// Int64: zigzag varint payload.
pub const INT64: u8 = 0x98;

pub const NULL: u8 = 0x99;
pub const TRUE: u8 = 0x9a;
pub const FALSE: u8 = 0x9b;
/// Byte: one raw byte follows.
pub const BYTE: u8 = 0x9c;
/// Bytes: u32 big-endian length, then raw bytes.
pub const BYTES: u8 = 0x9d;
/// Int16: two raw big-endian bytes.
pub const INT16: u8 = 0x9e;
/// Float32: four raw big-endian bytes (IEEE-754 bits).
pub const FLOAT32: u8 = 0x9f;
/// Float64: eight raw big-endian bytes (IEEE-754 bits).
pub const FLOAT64: u8 = 0xa0;

/// Heterogeneous map: varint count, then count (key, value) tagged pairs.
pub const MAP: u8 = 0xd9;
/// Heterogeneous array: varint count, then count tagged values.
pub const ARRAY: u8 = 0xda;
/// Packed map: varint count, hoisted key and value tags, bare payloads.
pub const PACKED_MAP: u8 = 0xdb;
/// Packed array: varint count, one hoisted element tag, bare payloads.
pub const PACKED_ARRAY: u8 = 0xdc;
/// Reserved. Accepted by the grammar, never produced.
pub const SCHEMA: u8 = 0xdd;
/// Message: interned name, u32 field-region length, field pairs.
pub const MESSAGE: u8 = 0xde;
/// Message back-reference: varint id.
pub const REF_MESSAGE: u8 = 0xdf;

/// Tags `0xe0..=0xff` are compact back-references: id = tag − [`REF_MESSAGE`].
pub const DIRECT_REF_MESSAGE_MAX_ID: u64 = 32;

/// The single-byte tags that are plain constants rather than value-embedding
/// ranges. Reader dispatch resolves the direct ranges first, then falls back
/// to this enum; a byte matching neither is outside the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum FixedTag {
    String = 0x3f,
    Int32 = 0x7f,
    Int64 = 0x98,
    Null = 0x99,
    True = 0x9a,
    False = 0x9b,
    Byte = 0x9c,
    Bytes = 0x9d,
    Int16 = 0x9e,
    Float32 = 0x9f,
    Float64 = 0xa0,
    Map = 0xd9,
    Array = 0xda,
    PackedMap = 0xdb,
    PackedArray = 0xdc,
    Schema = 0xdd,
    Message = 0xde,
    RefMessage = 0xdf,
}

/// Value embedded in a direct int32 tag, if `tag` is in the direct range.
#[inline]
pub fn direct_int32(tag: u8) -> Option<i32> {
    if (INT32_DIRECT_MIN..=INT32_DIRECT_MAX).contains(&tag) {
        Some(tag as i32 - INT32_ZERO as i32)
    } else {
        None
    }
}

/// Value embedded in a direct int64 tag, if `tag` is in the direct range.
#[inline]
pub fn direct_int64(tag: u8) -> Option<i64> {
    if (INT64_DIRECT_MIN..=INT64_DIRECT_MAX).contains(&tag) {
        Some(tag as i64 - INT64_ZERO as i64)
    } else {
        None
    }
}
