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

//! Numeric impls. Breeze has no unsigned logical types: unsigned Rust
//! integers travel through the signed encoding of the same width with
//! their bits preserved, and `u8` is the `byte` type.

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::reader::{
    read_byte_tagged, read_f32_tagged, read_f64_tagged, read_i16_tagged, read_i32_tagged,
    read_i64_tagged, TypeHeader,
};
use crate::serializer::Serializer;
use crate::types::{BYTE, FLOAT32, FLOAT64, INT16, INT32, INT64};
use crate::writer::{write_byte, write_f32, write_f64, write_i16, write_i32, write_i64};

impl Serializer for u8 {
    fn breeze_type() -> Option<u8> {
        Some(BYTE)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_byte(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_byte_tagged(buf, head.tag)
    }
}

impl Serializer for i16 {
    fn breeze_type() -> Option<u8> {
        Some(INT16)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i16(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_i16_tagged(buf, head.tag)
    }
}

impl Serializer for i32 {
    fn breeze_type() -> Option<u8> {
        Some(INT32)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i32(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_i32_tagged(buf, head.tag)
    }
}

impl Serializer for i64 {
    fn breeze_type() -> Option<u8> {
        Some(INT64)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i64(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_i64_tagged(buf, head.tag)
    }
}

impl Serializer for u16 {
    fn breeze_type() -> Option<u8> {
        Some(INT16)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i16(buf, *self as i16, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        Ok(read_i16_tagged(buf, head.tag)? as u16)
    }
}

impl Serializer for u32 {
    fn breeze_type() -> Option<u8> {
        Some(INT32)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i32(buf, *self as i32, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        Ok(read_i32_tagged(buf, head.tag)? as u32)
    }
}

impl Serializer for u64 {
    fn breeze_type() -> Option<u8> {
        Some(INT64)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_i64(buf, *self as i64, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        Ok(read_i64_tagged(buf, head.tag)? as u64)
    }
}

impl Serializer for f32 {
    fn breeze_type() -> Option<u8> {
        Some(FLOAT32)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_f32(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_f32_tagged(buf, head.tag)
    }
}

impl Serializer for f64 {
    fn breeze_type() -> Option<u8> {
        Some(FLOAT64)
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        write_f64(buf, *self, with_type);
        Ok(())
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        read_f64_tagged(buf, head.tag)
    }
}
