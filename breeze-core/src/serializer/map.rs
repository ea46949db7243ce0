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

use std::collections::HashMap;
use std::hash::Hash;

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::reader::{read_packed_size, read_type_header, TypeHeader};
use crate::serializer::Serializer;
use crate::types::{MAP, PACKED_MAP};
use crate::writer::write_packed_map;

impl<K, V> Serializer for HashMap<K, V>
where
    K: Serializer + Eq + Hash,
    V: Serializer,
{
    // Packed only when both the key and the value type have a canonical
    // tag; otherwise every entry is written fully tagged.
    fn breeze_type() -> Option<u8> {
        if K::breeze_type().is_none() || V::breeze_type().is_none() {
            Some(MAP)
        } else {
            Some(PACKED_MAP)
        }
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        if Self::breeze_type() == Some(MAP) {
            if with_type {
                buf.write_u8(MAP);
            }
            buf.write_varint(self.len() as u64);
            for (key, value) in self {
                key.write(buf, true)?;
                value.write(buf, true)?;
            }
            return Ok(());
        }
        write_packed_map(buf, with_type, self.len(), |b| {
            let mut entries = self.iter();
            if let Some((key, value)) = entries.next() {
                key.write_packed_type(b)?;
                value.write_packed_type(b)?;
                key.write(b, false)?;
                value.write(b, false)?;
                for (key, value) in entries {
                    key.write(b, false)?;
                    value.write(b, false)?;
                }
            }
            Ok(())
        })
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        match head.tag {
            MAP => {
                let size = read_packed_size(buf, false)?;
                let mut out = HashMap::with_capacity(size);
                for _ in 0..size {
                    let key = K::read(buf)?;
                    let value = V::read(buf)?;
                    out.insert(key, value);
                }
                Ok(out)
            }
            PACKED_MAP => {
                let size = read_packed_size(buf, false)?;
                let mut out = HashMap::with_capacity(size);
                if size > 0 {
                    let key_head = read_type_header(buf)?;
                    let value_head = read_type_header(buf)?;
                    for _ in 0..size {
                        let key = K::read_tagged(buf, &key_head)?;
                        let value = V::read_tagged(buf, &value_head)?;
                        out.insert(key, value);
                    }
                }
                Ok(out)
            }
            tag => Err(Error::type_mismatch(format!(
                "tag {:#04x} is not convertible to a map",
                tag
            ))),
        }
    }
}
