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

/// Describes one message field: its wire index, name, and IDL type name.
///
/// The index identifies the field on the wire and stays stable across
/// schema evolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub index: i32,
    pub name: String,
    pub type_name: String,
}

impl Field {
    pub fn new(index: i32, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Field {
            index,
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Metadata describing a message type: name, alias, and its fields indexed
/// both by wire index and by name.
///
/// Schemas are constructed by generated code or by hand and treated as
/// immutable once published; they are never written to the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    pub name: String,
    pub alias: String,
    fields: Vec<Field>,
    by_index: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Schema {
            name: name.into(),
            ..Schema::default()
        }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Schema {
            name: name.into(),
            alias: alias.into(),
            ..Schema::default()
        }
    }

    /// Adds a field. Fields with a negative index are ignored.
    pub fn put_field(&mut self, field: Field) {
        if field.index < 0 {
            return;
        }
        let slot = self.fields.len();
        self.by_index.insert(field.index, slot);
        self.by_name.insert(field.name.clone(), slot);
        self.fields.push(field);
    }

    pub fn put_fields(&mut self, fields: impl IntoIterator<Item = Field>) {
        for field in fields {
            self.put_field(field);
        }
    }

    pub fn field_by_index(&self, index: i32) -> Option<&Field> {
        self.by_index.get(&index).map(|&slot| &self.fields[slot])
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|&slot| &self.fields[slot])
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
