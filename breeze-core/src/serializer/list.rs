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

//! `Vec<T>` encoding.
//!
//! Three wire forms share this impl, selected statically from the element
//! type: `Vec<u8>` is the `bytes` scalar (never an array), elements with a
//! canonical tag use the packed array, and dynamically typed elements fall
//! back to the heterogeneous array.

use crate::buffer::ByteBuffer;
use crate::ensure;
use crate::error::Error;
use crate::reader::{read_packed_size, read_type_header, TypeHeader};
use crate::serializer::Serializer;
use crate::types::{ARRAY, BYTE, BYTES, PACKED_ARRAY};
use crate::writer::write_packed_array;

impl<T: Serializer> Serializer for Vec<T> {
    fn breeze_type() -> Option<u8> {
        match T::breeze_type() {
            Some(BYTE) => Some(BYTES),
            None => Some(ARRAY),
            Some(_) => Some(PACKED_ARRAY),
        }
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        match T::breeze_type() {
            Some(BYTE) => {
                if with_type {
                    buf.write_u8(BYTES);
                }
                buf.write_u32(self.len() as u32);
                for item in self {
                    item.write(buf, false)?;
                }
                Ok(())
            }
            None => {
                if with_type {
                    buf.write_u8(ARRAY);
                }
                buf.write_varint(self.len() as u64);
                for item in self {
                    item.write(buf, true)?;
                }
                Ok(())
            }
            Some(_) => write_packed_array(buf, with_type, self.len(), |b| {
                let mut items = self.iter();
                if let Some(first) = items.next() {
                    first.write_packed_type(b)?;
                    first.write(b, false)?;
                    for item in items {
                        item.write(b, false)?;
                    }
                }
                Ok(())
            }),
        }
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        match head.tag {
            BYTES if T::breeze_type() == Some(BYTE) => {
                let len = buf.read_u32()? as usize;
                ensure!(len <= buf.remain(), Error::not_enough(len, buf.remain()));
                let byte_head = TypeHeader::of(BYTE);
                let mut out = Vec::with_capacity(len);
                for _ in 0..len {
                    out.push(T::read_tagged(buf, &byte_head)?);
                }
                Ok(out)
            }
            ARRAY => {
                let size = read_packed_size(buf, false)?;
                let mut out = Vec::with_capacity(size);
                for _ in 0..size {
                    out.push(T::read(buf)?);
                }
                Ok(out)
            }
            PACKED_ARRAY => {
                let size = read_packed_size(buf, false)?;
                let mut out = Vec::with_capacity(size);
                if size > 0 {
                    let elem_head = read_type_header(buf)?;
                    for _ in 0..size {
                        out.push(T::read_tagged(buf, &elem_head)?);
                    }
                }
                Ok(out)
            }
            tag => Err(Error::type_mismatch(format!(
                "tag {:#04x} is not convertible to an array",
                tag
            ))),
        }
    }
}
