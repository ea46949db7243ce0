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

//! Read-side codec.
//!
//! Every `read_*_tagged` function takes a tag that has already been
//! consumed and accepts any wire form losslessly convertible to its
//! destination: the compact and long encodings of the matching type, the
//! other integer widths for integer destinations, the other float width
//! for float destinations, and base-10 / decimal string parses both ways.
//! The same functions serve packed containers, where the tag was hoisted
//! out and applies to every element.

use std::collections::HashMap;

use crate::buffer::ByteBuffer;
use crate::ensure;
use crate::error::Error;
use crate::message::{GenericMessage, Message};
use crate::types::*;
use crate::value::Value;

/// A consumed type header: the tag byte and, for messages, the resolved
/// type name. Message tags are normalized to [`MESSAGE`]; back-references
/// are resolved against the buffer's context while the header is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeHeader {
    pub tag: u8,
    pub name: Option<String>,
}

impl TypeHeader {
    pub fn of(tag: u8) -> Self {
        TypeHeader { tag, name: None }
    }
}

/// Reads one type header, interning or resolving message names.
pub fn read_type_header(buf: &mut ByteBuffer) -> Result<TypeHeader, Error> {
    let tag = buf.read_u8()?;
    if tag >= MESSAGE {
        let name = read_message_name(buf, tag)?;
        return Ok(TypeHeader {
            tag: MESSAGE,
            name: Some(name),
        });
    }
    Ok(TypeHeader::of(tag))
}

// Resolves the message name for a header tag in 0xde..=0xff. A full header
// assigns the next id; references look the id up and fail with
// `MalformedReference` when the context never assigned it.
fn read_message_name(buf: &mut ByteBuffer, tag: u8) -> Result<String, Error> {
    if tag == MESSAGE {
        let name = read_string_without_type(buf)?;
        buf.context().intern(&name);
        return Ok(name);
    }
    let id = if tag == REF_MESSAGE {
        buf.read_varint()?
    } else {
        (tag - REF_MESSAGE) as u64
    };
    buf.context()
        .name_of(id)
        .map(str::to_string)
        .ok_or_else(|| Error::malformed_reference(id))
}

pub fn read_string_without_type(buf: &mut ByteBuffer) -> Result<String, Error> {
    let len = buf.read_varint()? as usize;
    let bytes = buf.next(len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::type_mismatch("invalid utf-8 in string"))
}

pub fn read_bytes_without_type(buf: &mut ByteBuffer) -> Result<Vec<u8>, Error> {
    let len = buf.read_u32()? as usize;
    Ok(buf.next(len)?.to_vec())
}

pub fn read_byte_without_type(buf: &mut ByteBuffer) -> Result<u8, Error> {
    buf.read_u8()
}

pub fn read_i16_without_type(buf: &mut ByteBuffer) -> Result<i16, Error> {
    Ok(buf.read_u16()? as i16)
}

pub fn read_i32_without_type(buf: &mut ByteBuffer) -> Result<i32, Error> {
    buf.read_zigzag32()
}

pub fn read_i64_without_type(buf: &mut ByteBuffer) -> Result<i64, Error> {
    buf.read_zigzag64()
}

pub fn read_f32_without_type(buf: &mut ByteBuffer) -> Result<f32, Error> {
    Ok(f32::from_bits(buf.read_u32()?))
}

pub fn read_f64_without_type(buf: &mut ByteBuffer) -> Result<f64, Error> {
    Ok(f64::from_bits(buf.read_u64()?))
}

pub fn read_bool_tagged(_buf: &mut ByteBuffer, tag: u8) -> Result<bool, Error> {
    match tag {
        TRUE => Ok(true),
        FALSE => Ok(false),
        _ => Err(mismatch(tag, "bool")),
    }
}

pub fn read_string_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<String, Error> {
    if tag <= STRING_DIRECT_MAX {
        let bytes = buf.next(tag as usize)?;
        return String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::type_mismatch("invalid utf-8 in string"));
    }
    if let Some(v) = direct_int32(tag) {
        return Ok(v.to_string());
    }
    if let Some(v) = direct_int64(tag) {
        return Ok(v.to_string());
    }
    match tag {
        STRING => read_string_without_type(buf),
        INT16 => Ok(read_i16_without_type(buf)?.to_string()),
        INT32 => Ok(read_i32_without_type(buf)?.to_string()),
        INT64 => Ok(read_i64_without_type(buf)?.to_string()),
        FLOAT32 => Ok(read_f32_without_type(buf)?.to_string()),
        FLOAT64 => Ok(read_f64_without_type(buf)?.to_string()),
        _ => Err(mismatch(tag, "string")),
    }
}

pub fn read_byte_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<u8, Error> {
    match tag {
        BYTE => buf.read_u8(),
        _ => Err(mismatch(tag, "byte")),
    }
}

pub fn read_bytes_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<Vec<u8>, Error> {
    match tag {
        BYTES => read_bytes_without_type(buf),
        _ => Err(mismatch(tag, "bytes")),
    }
}

// All integer destinations accept every integer form (lossy casts
// permitted) plus string parses; this is the shared funnel.
fn read_int_tagged(buf: &mut ByteBuffer, tag: u8, expected: &'static str) -> Result<i64, Error> {
    if let Some(v) = direct_int32(tag) {
        return Ok(v as i64);
    }
    if let Some(v) = direct_int64(tag) {
        return Ok(v);
    }
    if tag <= STRING {
        let s = read_string_tagged(buf, tag)?;
        return s
            .parse::<i64>()
            .map_err(|_| Error::type_mismatch(format!("cannot parse {:?} as {}", s, expected)));
    }
    match tag {
        INT16 => Ok(read_i16_without_type(buf)? as i64),
        INT32 => Ok(read_i32_without_type(buf)? as i64),
        INT64 => read_i64_without_type(buf),
        _ => Err(mismatch(tag, expected)),
    }
}

pub fn read_i16_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<i16, Error> {
    Ok(read_int_tagged(buf, tag, "int16")? as i16)
}

pub fn read_i32_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<i32, Error> {
    Ok(read_int_tagged(buf, tag, "int32")? as i32)
}

pub fn read_i64_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<i64, Error> {
    read_int_tagged(buf, tag, "int64")
}

pub fn read_f32_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<f32, Error> {
    match tag {
        FLOAT32 => read_f32_without_type(buf),
        FLOAT64 => Ok(read_f64_without_type(buf)? as f32),
        _ if tag <= STRING => {
            let s = read_string_tagged(buf, tag)?;
            s.parse::<f64>()
                .map(|f| f as f32)
                .map_err(|_| Error::type_mismatch(format!("cannot parse {:?} as float32", s)))
        }
        _ => Err(mismatch(tag, "float32")),
    }
}

pub fn read_f64_tagged(buf: &mut ByteBuffer, tag: u8) -> Result<f64, Error> {
    match tag {
        FLOAT64 => read_f64_without_type(buf),
        FLOAT32 => Ok(read_f32_without_type(buf)? as f64),
        _ if tag <= STRING => {
            let s = read_string_tagged(buf, tag)?;
            s.parse::<f64>()
                .map_err(|_| Error::type_mismatch(format!("cannot parse {:?} as float64", s)))
        }
        _ => Err(mismatch(tag, "float64")),
    }
}

pub fn read_bool(buf: &mut ByteBuffer) -> Result<bool, Error> {
    let tag = buf.read_u8()?;
    read_bool_tagged(buf, tag)
}

pub fn read_string(buf: &mut ByteBuffer) -> Result<String, Error> {
    let tag = buf.read_u8()?;
    read_string_tagged(buf, tag)
}

pub fn read_byte(buf: &mut ByteBuffer) -> Result<u8, Error> {
    let tag = buf.read_u8()?;
    read_byte_tagged(buf, tag)
}

pub fn read_bytes(buf: &mut ByteBuffer) -> Result<Vec<u8>, Error> {
    let tag = buf.read_u8()?;
    read_bytes_tagged(buf, tag)
}

pub fn read_i16(buf: &mut ByteBuffer) -> Result<i16, Error> {
    let tag = buf.read_u8()?;
    read_i16_tagged(buf, tag)
}

pub fn read_i32(buf: &mut ByteBuffer) -> Result<i32, Error> {
    let tag = buf.read_u8()?;
    read_i32_tagged(buf, tag)
}

pub fn read_i64(buf: &mut ByteBuffer) -> Result<i64, Error> {
    let tag = buf.read_u8()?;
    read_i64_tagged(buf, tag)
}

pub fn read_f32(buf: &mut ByteBuffer) -> Result<f32, Error> {
    let tag = buf.read_u8()?;
    read_f32_tagged(buf, tag)
}

pub fn read_f64(buf: &mut ByteBuffer) -> Result<f64, Error> {
    let tag = buf.read_u8()?;
    read_f64_tagged(buf, tag)
}

/// Reads a container element count, consuming (and ignoring) the leading
/// container tag when `with_type` is set. Counts above the buffer's
/// `max_elem_size` fail with `SizeOverflow` before any element is read.
pub fn read_packed_size(buf: &mut ByteBuffer, with_type: bool) -> Result<usize, Error> {
    if with_type {
        buf.read_u8()?;
    }
    let size = buf.read_varint()? as usize;
    let max = buf.config().max_elem_size;
    ensure!(size <= max, Error::size_overflow(size, max));
    Ok(size)
}

/// Drives a packed container body: consumes the hoisted type header (two
/// for maps), then invokes `elem_fn` once per element. An empty container
/// carries no hoisted headers, so nothing is consumed.
pub fn read_packed(
    buf: &mut ByteBuffer,
    size: usize,
    is_map: bool,
    mut elem_fn: impl FnMut(&mut ByteBuffer) -> Result<(), Error>,
) -> Result<(), Error> {
    if size == 0 {
        return Ok(());
    }
    read_type_header(buf)?;
    if is_map {
        read_type_header(buf)?;
    }
    for _ in 0..size {
        elem_fn(buf)?;
    }
    Ok(())
}

/// Drives the message field loop: reads the 4-byte region length, then
/// repeats (varint index, value) until the region boundary. A region that
/// ends anywhere but exactly on the boundary is `WrongSize`.
pub fn read_message_fields(
    buf: &mut ByteBuffer,
    mut field_fn: impl FnMut(&mut ByteBuffer, i32) -> Result<(), Error>,
) -> Result<(), Error> {
    let total = buf.read_u32()? as usize;
    if total > 0 {
        let end = buf.rpos() + total;
        while buf.rpos() < end {
            let index = buf.read_varint()?;
            ensure!(
                index <= i32::MAX as u64,
                Error::unsupported(format!("field index {} out of range", index))
            );
            field_fn(buf, index as i32)?;
        }
        ensure!(buf.rpos() == end, Error::WrongSize);
    }
    Ok(())
}

/// Reads one dynamically typed value.
pub fn read_value(buf: &mut ByteBuffer) -> Result<Value, Error> {
    let head = read_type_header(buf)?;
    read_value_tagged(buf, &head)
}

/// Reads a value whose type header was already consumed: the entry point
/// shared by the tagged path and packed container elements.
pub fn read_value_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Value, Error> {
    let tag = head.tag;
    if tag <= STRING {
        return Ok(Value::String(read_string_tagged(buf, tag)?));
    }
    if let Some(v) = direct_int32(tag) {
        return Ok(Value::Int32(v));
    }
    if tag == INT32 {
        return Ok(Value::Int32(read_i32_without_type(buf)?));
    }
    if let Some(v) = direct_int64(tag) {
        return Ok(Value::Int64(v));
    }
    if tag == INT64 {
        return Ok(Value::Int64(read_i64_without_type(buf)?));
    }
    match FixedTag::try_from(tag) {
        Ok(FixedTag::Null) => Ok(Value::Null),
        Ok(FixedTag::True) => Ok(Value::Bool(true)),
        Ok(FixedTag::False) => Ok(Value::Bool(false)),
        Ok(FixedTag::Byte) => Ok(Value::Byte(buf.read_u8()?)),
        Ok(FixedTag::Bytes) => Ok(Value::Bytes(read_bytes_without_type(buf)?)),
        Ok(FixedTag::Int16) => Ok(Value::Int16(read_i16_without_type(buf)?)),
        Ok(FixedTag::Float32) => Ok(Value::Float32(read_f32_without_type(buf)?)),
        Ok(FixedTag::Float64) => Ok(Value::Float64(read_f64_without_type(buf)?)),
        Ok(FixedTag::Array) => read_array_value(buf, false),
        Ok(FixedTag::PackedArray) => read_array_value(buf, true),
        Ok(FixedTag::Map) => read_map_value(buf, false),
        Ok(FixedTag::PackedMap) => read_map_value(buf, true),
        Ok(FixedTag::Message) => {
            let name = head
                .name
                .as_deref()
                .ok_or_else(|| Error::type_mismatch("message header without a name"))?;
            let mut message = GenericMessage::new(name);
            read_message_fields(buf, |b, index| message.read_field(b, index))?;
            Ok(Value::Message(message))
        }
        Ok(FixedTag::Schema) => Err(Error::unsupported("schema tag is reserved")),
        _ => Err(Error::unsupported(format!(
            "tag {:#04x} outside the breeze grammar",
            tag
        ))),
    }
}

/// Reads and discards one value; the unknown-field path of message readers.
pub fn skip_value(buf: &mut ByteBuffer) -> Result<(), Error> {
    read_value(buf).map(|_| ())
}

fn read_array_value(buf: &mut ByteBuffer, packed: bool) -> Result<Value, Error> {
    let size = checked_size(buf)?;
    let mut items = Vec::with_capacity(size);
    if packed {
        if size == 0 {
            return Ok(Value::Array(items));
        }
        let head = read_type_header(buf)?;
        for _ in 0..size {
            items.push(read_value_tagged(buf, &head)?);
        }
    } else {
        for _ in 0..size {
            items.push(read_value(buf)?);
        }
    }
    Ok(Value::Array(items))
}

fn read_map_value(buf: &mut ByteBuffer, packed: bool) -> Result<Value, Error> {
    let size = checked_size(buf)?;
    let mut entries = HashMap::with_capacity(size);
    if packed {
        if size == 0 {
            return Ok(Value::Map(entries));
        }
        let key_head = read_type_header(buf)?;
        let value_head = read_type_header(buf)?;
        for _ in 0..size {
            let key = read_value_tagged(buf, &key_head)?;
            let value = read_value_tagged(buf, &value_head)?;
            entries.insert(key, value);
        }
    } else {
        for _ in 0..size {
            let key = read_value(buf)?;
            let value = read_value(buf)?;
            entries.insert(key, value);
        }
    }
    Ok(Value::Map(entries))
}

// Varint element count with the `max_elem_size` guard.
fn checked_size(buf: &mut ByteBuffer) -> Result<usize, Error> {
    let size = buf.read_varint()? as usize;
    let max = buf.config().max_elem_size;
    ensure!(size <= max, Error::size_overflow(size, max));
    Ok(size)
}

#[cold]
fn mismatch(tag: u8, expected: &'static str) -> Error {
    Error::type_mismatch(format!(
        "tag {:#04x} is not convertible to {}",
        tag, expected
    ))
}

/// Reads a packed `map<string, string>`, a common RPC-header shape.
pub fn read_string_string_map(
    buf: &mut ByteBuffer,
    with_type: bool,
) -> Result<HashMap<String, String>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = HashMap::with_capacity(size);
    if size > 0 {
        let key_head = read_type_header(buf)?;
        let value_head = read_type_header(buf)?;
        for _ in 0..size {
            let key = read_string_tagged(buf, key_head.tag)?;
            let value = read_string_tagged(buf, value_head.tag)?;
            out.insert(key, value);
        }
    }
    Ok(out)
}

/// Reads a packed `map<string, int32>`.
pub fn read_string_i32_map(
    buf: &mut ByteBuffer,
    with_type: bool,
) -> Result<HashMap<String, i32>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = HashMap::with_capacity(size);
    if size > 0 {
        let key_head = read_type_header(buf)?;
        let value_head = read_type_header(buf)?;
        for _ in 0..size {
            let key = read_string_tagged(buf, key_head.tag)?;
            let value = read_i32_tagged(buf, value_head.tag)?;
            out.insert(key, value);
        }
    }
    Ok(out)
}

/// Reads a packed `map<string, int64>`.
pub fn read_string_i64_map(
    buf: &mut ByteBuffer,
    with_type: bool,
) -> Result<HashMap<String, i64>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = HashMap::with_capacity(size);
    if size > 0 {
        let key_head = read_type_header(buf)?;
        let value_head = read_type_header(buf)?;
        for _ in 0..size {
            let key = read_string_tagged(buf, key_head.tag)?;
            let value = read_i64_tagged(buf, value_head.tag)?;
            out.insert(key, value);
        }
    }
    Ok(out)
}

/// Reads a packed `array<string>`.
pub fn read_string_array(buf: &mut ByteBuffer, with_type: bool) -> Result<Vec<String>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = Vec::with_capacity(size);
    if size > 0 {
        let head = read_type_header(buf)?;
        for _ in 0..size {
            out.push(read_string_tagged(buf, head.tag)?);
        }
    }
    Ok(out)
}

/// Reads a packed `array<int32>`.
pub fn read_i32_array(buf: &mut ByteBuffer, with_type: bool) -> Result<Vec<i32>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = Vec::with_capacity(size);
    if size > 0 {
        let head = read_type_header(buf)?;
        for _ in 0..size {
            out.push(read_i32_tagged(buf, head.tag)?);
        }
    }
    Ok(out)
}

/// Reads a packed `array<int64>`.
pub fn read_i64_array(buf: &mut ByteBuffer, with_type: bool) -> Result<Vec<i64>, Error> {
    let size = read_packed_size(buf, with_type)?;
    let mut out = Vec::with_capacity(size);
    if size > 0 {
        let head = read_type_header(buf)?;
        for _ in 0..size {
            out.push(read_i64_tagged(buf, head.tag)?);
        }
    }
    Ok(out)
}
