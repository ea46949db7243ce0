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

//! Write-side codec: scalars, containers, and message framing.
//!
//! Every scalar writer takes a `with_type` flag. With the flag set it emits
//! the type tag, choosing the direct form when the value fits; without it,
//! only the bare payload is written, which is what the packed container
//! forms and the message name need.

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::message::Message;
use crate::serializer::Serializer;
use crate::types::*;
use crate::value::Value;

/// The tag doubles as the payload for bool, so `with_type` has no effect.
pub fn write_bool(buf: &mut ByteBuffer, v: bool, _with_type: bool) {
    buf.write_u8(if v { TRUE } else { FALSE });
}

pub fn write_string(buf: &mut ByteBuffer, s: &str, with_type: bool) {
    let bytes = s.as_bytes();
    if with_type {
        if bytes.len() <= STRING_DIRECT_MAX as usize {
            buf.write_u8(bytes.len() as u8);
            buf.write(bytes);
            return;
        }
        buf.write_u8(STRING);
    }
    buf.write_varint(bytes.len() as u64);
    buf.write(bytes);
}

pub fn write_byte(buf: &mut ByteBuffer, v: u8, with_type: bool) {
    if with_type {
        buf.write_u8(BYTE);
    }
    buf.write_u8(v);
}

pub fn write_bytes(buf: &mut ByteBuffer, v: &[u8], with_type: bool) {
    if with_type {
        buf.write_u8(BYTES);
    }
    buf.write_u32(v.len() as u32);
    buf.write(v);
}

pub fn write_i16(buf: &mut ByteBuffer, v: i16, with_type: bool) {
    if with_type {
        buf.write_u8(INT16);
    }
    buf.write_u16(v as u16);
}

pub fn write_i32(buf: &mut ByteBuffer, v: i32, with_type: bool) {
    if with_type {
        if (-16..=46).contains(&v) {
            buf.write_u8((v + INT32_ZERO as i32) as u8);
            return;
        }
        buf.write_u8(INT32);
    }
    buf.write_zigzag32(v);
}

pub fn write_i64(buf: &mut ByteBuffer, v: i64, with_type: bool) {
    if with_type {
        if (-8..=15).contains(&v) {
            buf.write_u8((v + INT64_ZERO as i64) as u8);
            return;
        }
        buf.write_u8(INT64);
    }
    buf.write_zigzag64(v);
}

pub fn write_f32(buf: &mut ByteBuffer, v: f32, with_type: bool) {
    if with_type {
        buf.write_u8(FLOAT32);
    }
    buf.write_u32(v.to_bits());
}

pub fn write_f64(buf: &mut ByteBuffer, v: f64, with_type: bool) {
    if with_type {
        buf.write_u8(FLOAT64);
    }
    buf.write_u64(v.to_bits());
}

/// Writes a message type header, interning the name in the buffer's
/// context. The first occurrence of a name carries the name itself; later
/// occurrences emit a back-reference, compact for ids 1..=32.
pub fn write_message_type(buf: &mut ByteBuffer, name: &str) {
    if let Some(id) = buf.context().lookup_id(name) {
        if id <= DIRECT_REF_MESSAGE_MAX_ID {
            buf.write_u8(REF_MESSAGE + id as u8);
        } else {
            buf.write_u8(REF_MESSAGE);
            buf.write_varint(id);
        }
        return;
    }
    buf.context().intern(name);
    buf.write_u8(MESSAGE);
    write_string(buf, name, false);
}

/// Writes the length-prefixed field region: a 4-byte slot is reserved, the
/// closure writes the field pairs, and the actual byte count is patched in.
pub fn write_message_without_type(
    buf: &mut ByteBuffer,
    fields_fn: impl FnOnce(&mut ByteBuffer) -> Result<(), Error>,
) -> Result<(), Error> {
    let pos = skip_length(buf);
    fields_fn(buf)?;
    write_length(buf, pos);
    Ok(())
}

/// Writes a complete message occurrence: type header plus field region.
pub fn write_message(
    buf: &mut ByteBuffer,
    name: &str,
    fields_fn: impl FnOnce(&mut ByteBuffer) -> Result<(), Error>,
) -> Result<(), Error> {
    write_message_type(buf, name);
    write_message_without_type(buf, fields_fn)
}

/// Writes one field pair: varint index, then the fully tagged value.
pub fn write_field<T: Serializer>(
    buf: &mut ByteBuffer,
    index: i32,
    value: &T,
) -> Result<(), Error> {
    debug_assert!(index >= 0, "field index must be non-negative");
    buf.write_varint(index as u64);
    value.write(buf, true)
}

/// Writes a string field, omitting the pair when the value is empty.
///
/// The typed `write_*_field` helpers implement Breeze's default-value
/// suppression: a field whose value equals the type's zero is not written.
/// Required-field enforcement stays with the caller.
pub fn write_string_field(buf: &mut ByteBuffer, index: i32, v: &str) {
    if !v.is_empty() {
        buf.write_varint(index as u64);
        write_string(buf, v, true);
    }
}

pub fn write_bool_field(buf: &mut ByteBuffer, index: i32, v: bool) {
    if v {
        buf.write_varint(index as u64);
        write_bool(buf, v, true);
    }
}

pub fn write_byte_field(buf: &mut ByteBuffer, index: i32, v: u8) {
    if v != 0 {
        buf.write_varint(index as u64);
        write_byte(buf, v, true);
    }
}

pub fn write_bytes_field(buf: &mut ByteBuffer, index: i32, v: &[u8]) {
    if !v.is_empty() {
        buf.write_varint(index as u64);
        write_bytes(buf, v, true);
    }
}

pub fn write_i16_field(buf: &mut ByteBuffer, index: i32, v: i16) {
    if v != 0 {
        buf.write_varint(index as u64);
        write_i16(buf, v, true);
    }
}

pub fn write_i32_field(buf: &mut ByteBuffer, index: i32, v: i32) {
    if v != 0 {
        buf.write_varint(index as u64);
        write_i32(buf, v, true);
    }
}

pub fn write_i64_field(buf: &mut ByteBuffer, index: i32, v: i64) {
    if v != 0 {
        buf.write_varint(index as u64);
        write_i64(buf, v, true);
    }
}

pub fn write_f32_field(buf: &mut ByteBuffer, index: i32, v: f32) {
    if v != 0.0 {
        buf.write_varint(index as u64);
        write_f32(buf, v, true);
    }
}

pub fn write_f64_field(buf: &mut ByteBuffer, index: i32, v: f64) {
    if v != 0.0 {
        buf.write_varint(index as u64);
        write_f64(buf, v, true);
    }
}

/// Writes a packed-array frame: tag, varint count, then the closure for the
/// hoisted element tag and the bare payloads. The closure is not called for
/// an empty container, which carries no hoisted tag.
pub fn write_packed_array(
    buf: &mut ByteBuffer,
    with_type: bool,
    size: usize,
    elems_fn: impl FnOnce(&mut ByteBuffer) -> Result<(), Error>,
) -> Result<(), Error> {
    if with_type {
        buf.write_u8(PACKED_ARRAY);
    }
    buf.write_varint(size as u64);
    if size > 0 {
        elems_fn(buf)?;
    }
    Ok(())
}

/// Writes a packed-map frame; the closure writes the hoisted key and value
/// tags followed by the bare payload pairs. Not called when the map is
/// empty.
pub fn write_packed_map(
    buf: &mut ByteBuffer,
    with_type: bool,
    size: usize,
    elems_fn: impl FnOnce(&mut ByteBuffer) -> Result<(), Error>,
) -> Result<(), Error> {
    if with_type {
        buf.write_u8(PACKED_MAP);
    }
    buf.write_varint(size as u64);
    if size > 0 {
        elems_fn(buf)?;
    }
    Ok(())
}

/// Writes a dynamically typed value, dispatching on its runtime shape.
///
/// Containers of [`Value`] use the heterogeneous forms: the element type is
/// the top type, so there is no single tag to hoist.
pub fn write_value(buf: &mut ByteBuffer, v: &Value) -> Result<(), Error> {
    match v {
        Value::Null => buf.write_u8(NULL),
        Value::Bool(b) => write_bool(buf, *b, true),
        Value::Byte(b) => write_byte(buf, *b, true),
        Value::Bytes(b) => write_bytes(buf, b, true),
        Value::Int16(i) => write_i16(buf, *i, true),
        Value::Int32(i) => write_i32(buf, *i, true),
        Value::Int64(i) => write_i64(buf, *i, true),
        Value::Float32(f) => write_f32(buf, *f, true),
        Value::Float64(f) => write_f64(buf, *f, true),
        Value::String(s) => write_string(buf, s, true),
        Value::Array(items) => {
            buf.write_u8(ARRAY);
            buf.write_varint(items.len() as u64);
            for item in items {
                write_value(buf, item)?;
            }
        }
        Value::Map(entries) => {
            buf.write_u8(MAP);
            buf.write_varint(entries.len() as u64);
            for (key, value) in entries {
                write_value(buf, key)?;
                write_value(buf, value)?;
            }
        }
        Value::Message(m) => {
            write_message(buf, &m.name, |b| m.write_fields(b))?;
        }
    }
    Ok(())
}

// Reserves 4 bytes for a length written later.
fn skip_length(buf: &mut ByteBuffer) -> usize {
    let pos = buf.wpos();
    buf.set_wpos(pos + 4);
    pos
}

// Patches the region length into the reserved slot.
fn write_length(buf: &mut ByteBuffer, keep_pos: usize) {
    let cur = buf.wpos();
    buf.set_wpos(keep_pos);
    buf.write_u32((cur - keep_pos - 4) as u32);
    buf.set_wpos(cur);
}
