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

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::reader::TypeHeader;
use crate::serializer::Serializer;
use crate::types::NULL;

impl<T: Serializer> Serializer for Option<T> {
    // `None` must be representable, and null always carries its own tag, so
    // options never qualify for the packed forms.
    fn breeze_type() -> Option<u8> {
        None
    }

    fn write(&self, buf: &mut ByteBuffer, with_type: bool) -> Result<(), Error> {
        match self {
            None => {
                buf.write_u8(NULL);
                Ok(())
            }
            Some(v) => v.write(buf, with_type),
        }
    }

    fn read_tagged(buf: &mut ByteBuffer, head: &TypeHeader) -> Result<Self, Error> {
        if head.tag == NULL {
            return Ok(None);
        }
        T::read_tagged(buf, head).map(Some)
    }
}
