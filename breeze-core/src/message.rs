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

use crate::buffer::ByteBuffer;
use crate::error::Error;
use crate::reader::read_value;
use crate::schema::Schema;
use crate::value::Value;
use crate::writer::write_field;

/// A named record with integer-indexed fields.
///
/// Every Breeze message type implements this trait; generated code or a
/// hand-written impl supplies the field round trips while the codec owns
/// the framing. The alias is an alternate name accepted on read for
/// cross-language compatibility.
pub trait Message: Default {
    fn name(&self) -> &str;

    fn alias(&self) -> &str {
        ""
    }

    fn schema(&self) -> Option<&Schema> {
        None
    }

    /// Writes the message's field pairs. Called inside the length-prefixed
    /// field region; implementations use [`write_field`] or the typed
    /// `write_*_field` helpers.
    fn write_fields(&self, buf: &mut ByteBuffer) -> Result<(), Error>;

    /// Consumes the value of the field at `index`. Unknown indices should
    /// be discarded with [`skip_value`](crate::reader::skip_value).
    fn read_field(&mut self, buf: &mut ByteBuffer, index: i32) -> Result<(), Error>;
}

/// The fallback message representation used when no concrete message type
/// is registered for a received name: an open map from field index to
/// [`Value`].
#[derive(Clone, Debug, Default)]
pub struct GenericMessage {
    pub name: String,
    pub alias: String,
    schema: Option<Schema>,
    fields: HashMap<i32, Value>,
}

impl GenericMessage {
    pub fn new(name: impl Into<String>) -> Self {
        GenericMessage {
            name: name.into(),
            ..GenericMessage::default()
        }
    }

    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = Some(schema);
    }

    /// Stores a field. Negative indices and null values are ignored.
    pub fn put_field(&mut self, index: i32, value: Value) {
        if index < 0 || value.is_null() {
            return;
        }
        self.fields.insert(index, value);
    }

    pub fn field_by_index(&self, index: i32) -> Option<&Value> {
        self.fields.get(&index)
    }

    /// Looks a field up through the attached schema. Fails with `NoSchema`
    /// when none is attached.
    pub fn field_by_name(&self, name: &str) -> Result<Option<&Value>, Error> {
        let schema = self.schema.as_ref().ok_or(Error::NoSchema)?;
        Ok(schema
            .field_by_name(name)
            .and_then(|field| self.fields.get(&field.index)))
    }

    pub fn fields(&self) -> &HashMap<i32, Value> {
        &self.fields
    }
}

// Schema is out-of-band metadata, not part of the message's identity, so it
// does not participate in equality.
impl PartialEq for GenericMessage {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.alias == other.alias && self.fields == other.fields
    }
}

impl Eq for GenericMessage {}

impl Message for GenericMessage {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    fn write_fields(&self, buf: &mut ByteBuffer) -> Result<(), Error> {
        // Iteration order is unspecified; the reader does not depend on the
        // order of pairs within the region.
        for (&index, value) in &self.fields {
            write_field(buf, index, value)?;
        }
        Ok(())
    }

    fn read_field(&mut self, buf: &mut ByteBuffer, index: i32) -> Result<(), Error> {
        let value = read_value(buf)?;
        self.fields.insert(index, value);
        Ok(())
    }
}
