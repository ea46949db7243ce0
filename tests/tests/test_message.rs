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

use breeze::reader::{read_message_fields, read_string_without_type, read_value};
use breeze::writer::{write_i32_field, write_value};
use breeze::{read_message, ByteBuffer, Error, Field, GenericMessage, Schema, Serializer, Value};
use breeze_tests::{sample_attachment, sample_request, Attachment, RpcRequest};

fn single_field_message(name: &str) -> GenericMessage {
    let mut msg = GenericMessage::new(name);
    msg.put_field(1, Value::from(5i32));
    msg
}

#[test]
fn test_message_wire_layout_and_interning() {
    // Two occurrences of message "M": the first carries the name, the
    // second is a one-byte back-reference to id 1.
    let msg = single_field_message("M");
    let mut buf = ByteBuffer::new(64);
    write_value(&mut buf, &Value::Message(msg.clone())).unwrap();
    write_value(&mut buf, &Value::Message(msg.clone())).unwrap();

    assert_eq!(
        buf.bytes(),
        &[
            0xde, 0x01, b'M', 0x00, 0x00, 0x00, 0x02, 0x01, 0x55, // full header
            0xe0, 0x00, 0x00, 0x00, 0x02, 0x01, 0x55, // compact reference
        ]
    );

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    assert_eq!(read_value(&mut rbuf).unwrap(), Value::Message(msg.clone()));
    assert_eq!(read_value(&mut rbuf).unwrap(), Value::Message(msg));
    assert_eq!(rbuf.remain(), 0);
}

#[test]
fn test_reference_ids_assigned_in_order() {
    let mut buf = ByteBuffer::new(4096);
    for i in 0..33 {
        let msg = single_field_message(&format!("Msg{}", i));
        write_value(&mut buf, &Value::Message(msg)).unwrap();
    }
    // Ids 1..=32 use the compact form; id 33 needs the long form.
    let pos = buf.wpos();
    write_value(&mut buf, &Value::Message(single_field_message("Msg32"))).unwrap();
    assert_eq!(buf.bytes()[pos], 0xdf);
    assert_eq!(buf.bytes()[pos + 1], 33);

    let pos = buf.wpos();
    write_value(&mut buf, &Value::Message(single_field_message("Msg0"))).unwrap();
    assert_eq!(buf.bytes()[pos], 0xe0);

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    for i in 0..33 {
        let value = read_value(&mut rbuf).unwrap();
        assert_eq!(value.as_message().unwrap().name, format!("Msg{}", i));
    }
    assert_eq!(
        read_value(&mut rbuf).unwrap().as_message().unwrap().name,
        "Msg32"
    );
    assert_eq!(
        read_value(&mut rbuf).unwrap().as_message().unwrap().name,
        "Msg0"
    );
}

#[test]
fn test_reference_to_unknown_id() {
    // A back-reference with no preceding full header.
    let mut buf = ByteBuffer::from_bytes(vec![0xe0, 0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(
        read_value(&mut buf),
        Err(Error::MalformedReference(1))
    ));
}

#[test]
fn test_region_length_mismatch() {
    // Body holds a 3-byte pair but the region declares 2 bytes: parsing
    // the pair overruns the declared boundary.
    let bytes = vec![0xde, 0x01, b'M', 0x00, 0x00, 0x00, 0x02, 0x01, 0x7f, 0x5e];
    let mut buf = ByteBuffer::from_bytes(bytes);
    assert!(matches!(read_value(&mut buf), Err(Error::WrongSize)));
}

#[test]
fn test_empty_field_region() {
    let msg = GenericMessage::new("Empty");
    let mut buf = ByteBuffer::new(16);
    write_value(&mut buf, &Value::Message(msg.clone())).unwrap();
    assert_eq!(buf.bytes()[buf.len() - 4..], [0x00, 0x00, 0x00, 0x00]);
    assert_eq!(
        read_value(&mut ByteBuffer::from_bytes(buf.bytes().to_vec())).unwrap(),
        Value::Message(msg)
    );
}

#[test]
fn test_typed_round_trip() {
    let request = sample_request();
    let mut buf = ByteBuffer::new(1024);
    request.write(&mut buf, true).unwrap();

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let decoded: RpcRequest = read_message(&mut rbuf).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(rbuf.remain(), 0);
}

#[test]
fn test_generic_fallback_sees_nested_fields() {
    let request = sample_request();
    let mut buf = ByteBuffer::new(1024);
    request.write(&mut buf, true).unwrap();

    let value = read_value(&mut ByteBuffer::from_bytes(buf.bytes().to_vec())).unwrap();
    let generic = value.as_message().unwrap();
    assert_eq!(generic.name, "RpcRequest");
    assert_eq!(
        generic.field_by_index(2),
        Some(&Value::from(request.method.as_str()))
    );

    let attachments = generic.field_by_index(3).unwrap().as_map().unwrap();
    let nested = attachments
        .get(&Value::from("m1"))
        .and_then(Value::as_message)
        .unwrap();
    assert_eq!(nested.name, "Attachment");
    assert_eq!(
        nested.field_by_index(10).unwrap().as_array().unwrap().len(),
        request.attachments["m1"].ids.len()
    );
}

#[test]
fn test_message_type_mismatch() {
    let attachment = sample_attachment();
    let mut buf = ByteBuffer::new(512);
    attachment.write(&mut buf, true).unwrap();

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let result: Result<RpcRequest, Error> = read_message(&mut rbuf);
    assert!(matches!(result, Err(Error::MessageTypeMismatch { .. })));
}

#[test]
fn test_alias_accepted_on_read() {
    // A peer that knows this type under its alias can still be decoded.
    let mut aliased = GenericMessage::new("motan.RpcRequest");
    aliased.put_field(1, Value::from(77i32));
    aliased.put_field(2, Value::from("poll"));

    let mut buf = ByteBuffer::new(128);
    write_value(&mut buf, &Value::Message(aliased)).unwrap();

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let decoded: RpcRequest = read_message(&mut rbuf).unwrap();
    assert_eq!(decoded.id, 77);
    assert_eq!(decoded.method, "poll");
}

#[test]
fn test_unknown_fields_are_skipped() {
    let mut msg = GenericMessage::new("RpcRequest");
    msg.put_field(2, Value::from("invoke"));
    msg.put_field(99, Value::from("from a newer schema"));
    msg.put_field(100, Value::Message(single_field_message("Unknown")));

    let mut buf = ByteBuffer::new(256);
    write_value(&mut buf, &Value::Message(msg)).unwrap();

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let decoded: RpcRequest = read_message(&mut rbuf).unwrap();
    assert_eq!(decoded.method, "invoke");
    assert_eq!(decoded.id, 0);
    assert_eq!(rbuf.remain(), 0);
}

#[test]
fn test_default_values_suppressed() {
    let mut buf = ByteBuffer::new(64);
    write_i32_field(&mut buf, 1, 0);
    assert!(buf.is_empty(), "zero-valued field must not be written");
    write_i32_field(&mut buf, 1, 9);
    assert!(!buf.is_empty());

    // A default message round-trips through suppression.
    let mut buf = ByteBuffer::new(64);
    Attachment::default().write(&mut buf, true).unwrap();
    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let decoded: Attachment = read_message(&mut rbuf).unwrap();
    assert_eq!(decoded, Attachment::default());
}

#[test]
fn test_field_iteration_by_index() {
    // Driving the field loop by hand, the way generated code does.
    let msg = single_field_message("Manual");
    let mut buf = ByteBuffer::new(64);
    write_value(&mut buf, &Value::Message(msg)).unwrap();

    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let tag = rbuf.read_u8().unwrap();
    assert_eq!(tag, 0xde);
    assert_eq!(read_string_without_type(&mut rbuf).unwrap(), "Manual");
    rbuf.context().intern("Manual");

    let mut seen = Vec::new();
    read_message_fields(&mut rbuf, |b, index| {
        seen.push((index, read_value(b).unwrap()));
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, vec![(1, Value::Int32(5))]);
}

#[test]
fn test_generic_message_schema_lookup() {
    let mut msg = GenericMessage::new("User");
    msg.put_field(1, Value::from(42i64));
    msg.put_field(2, Value::from("ray"));

    assert!(matches!(msg.field_by_name("id"), Err(Error::NoSchema)));

    let mut schema = Schema::new("User");
    schema.put_fields([
        Field::new(1, "id", "int64"),
        Field::new(2, "name", "string"),
    ]);
    msg.set_schema(schema);

    assert_eq!(msg.field_by_name("id").unwrap(), Some(&Value::Int64(42)));
    assert_eq!(msg.field_by_name("name").unwrap(), Some(&Value::from("ray")));
    assert_eq!(msg.field_by_name("missing").unwrap(), None);
}

#[test]
fn test_put_field_filters_invalid_entries() {
    let mut msg = GenericMessage::new("M");
    msg.put_field(-1, Value::from(1i32));
    msg.put_field(1, Value::Null);
    assert!(msg.fields().is_empty());
    msg.put_field(1, Value::from(1i32));
    assert_eq!(msg.fields().len(), 1);
}

#[test]
fn test_message_name_matching_is_exact() {
    let msg = single_field_message("attachment"); // wrong case
    let mut buf = ByteBuffer::new(64);
    write_value(&mut buf, &Value::Message(msg)).unwrap();
    let mut rbuf = ByteBuffer::from_bytes(buf.bytes().to_vec());
    let result: Result<Attachment, Error> = read_message(&mut rbuf);
    assert!(matches!(result, Err(Error::MessageTypeMismatch { .. })));
}
