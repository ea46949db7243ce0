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

use breeze::reader::{
    read_bool, read_byte, read_bytes, read_f32, read_f64, read_i16, read_i32, read_i64,
    read_string,
};
use breeze::writer::{
    write_bool, write_byte, write_bytes, write_f32, write_f64, write_i16, write_i32, write_i64,
    write_string,
};
use breeze::{ByteBuffer, Error};

fn encoded(write: impl FnOnce(&mut ByteBuffer)) -> Vec<u8> {
    let mut buf = ByteBuffer::new(64);
    write(&mut buf);
    buf.bytes().to_vec()
}

#[test]
fn test_int32_direct_encoding() {
    // One byte for the whole direct range, tag + zigzag outside it.
    assert_eq!(encoded(|b| write_i32(b, 0, true)), [0x50]);
    assert_eq!(encoded(|b| write_i32(b, -16, true)), [0x40]);
    assert_eq!(encoded(|b| write_i32(b, 46, true)), [0x7e]);
    assert_eq!(encoded(|b| write_i32(b, 47, true)), [0x7f, 0x5e]);
    assert_eq!(encoded(|b| write_i32(b, -17, true)), [0x7f, 0x21]);

    for v in [-16i32, 46, 0, 13] {
        let bytes = encoded(|b| write_i32(b, v, true));
        assert_eq!(bytes.len(), 1, "direct int32 {} must be one byte", v);
        assert_eq!(read_i32(&mut ByteBuffer::from_bytes(bytes)).unwrap(), v);
    }
}

#[test]
fn test_int32_long_and_direct_forms_decode_alike() {
    // 5 as a direct tag, and 5 as tag + zigzag varint.
    let direct = vec![0x55];
    let long = vec![0x7f, 0x0a];
    assert_eq!(read_i32(&mut ByteBuffer::from_bytes(direct)).unwrap(), 5);
    assert_eq!(read_i32(&mut ByteBuffer::from_bytes(long)).unwrap(), 5);
}

#[test]
fn test_int64_direct_encoding() {
    assert_eq!(encoded(|b| write_i64(b, 0, true)), [0x88]);
    assert_eq!(encoded(|b| write_i64(b, -8, true)), [0x80]);
    assert_eq!(encoded(|b| write_i64(b, 15, true)), [0x97]);
    assert_eq!(encoded(|b| write_i64(b, 16, true)), [0x98, 0x20]);
    assert_eq!(encoded(|b| write_i64(b, -9, true)), [0x98, 0x11]);

    for v in [i64::MIN, i64::MAX, -123_234_092_342_345, 234, 12, -6, 0] {
        let bytes = encoded(|b| write_i64(b, v, true));
        assert_eq!(read_i64(&mut ByteBuffer::from_bytes(bytes)).unwrap(), v);
    }
}

#[test]
fn test_string_encoding() {
    // Scenario: "hi" is a direct string.
    assert_eq!(encoded(|b| write_string(b, "hi", true)), [0x02, 0x68, 0x69]);
    assert_eq!(encoded(|b| write_string(b, "", true)), [0x00]);

    let s62 = "a".repeat(62);
    let bytes = encoded(|b| write_string(b, &s62, true));
    assert_eq!(bytes.len(), 1 + 62);
    assert_eq!(bytes[0], 0x3e);
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        s62
    );

    let s63 = "b".repeat(63);
    let bytes = encoded(|b| write_string(b, &s63, true));
    assert_eq!(bytes.len(), 1 + 1 + 63);
    assert_eq!(&bytes[..2], &[0x3f, 0x3f]);
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        s63
    );

    for s in ["uwoerj8093lsd#!@#$%^^&&*()lkd", "huek", "测试", ""] {
        let bytes = encoded(|b| write_string(b, s, true));
        assert_eq!(read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(), s);
    }
}

#[test]
fn test_bool_and_null_tags() {
    assert_eq!(encoded(|b| write_bool(b, true, true)), [0x9a]);
    assert_eq!(encoded(|b| write_bool(b, false, true)), [0x9b]);
    assert!(read_bool(&mut ByteBuffer::from_bytes(vec![0x9a])).unwrap());
    assert!(!read_bool(&mut ByteBuffer::from_bytes(vec![0x9b])).unwrap());
}

#[test]
fn test_byte_and_bytes_encoding() {
    assert_eq!(encoded(|b| write_byte(b, 36, true)), [0x9c, 36]);
    assert_eq!(
        encoded(|b| write_bytes(b, &[], true)),
        [0x9d, 0x00, 0x00, 0x00, 0x00]
    );

    let data = b"jlkw!@#%$#%hjsde23kd\\n\\t".to_vec();
    let bytes = encoded(|b| write_bytes(b, &data, true));
    assert_eq!(bytes[0], 0x9d);
    assert_eq!(
        read_bytes(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        data
    );
}

#[test]
fn test_int16_encoding() {
    let bytes = encoded(|b| write_i16(b, -123, true));
    assert_eq!(bytes, [0x9e, 0xff, 0x85]);
    for v in [0i16, -123, i16::MAX, i16::MIN, 234] {
        let bytes = encoded(|b| write_i16(b, v, true));
        assert_eq!(bytes.len(), 3);
        assert_eq!(read_i16(&mut ByteBuffer::from_bytes(bytes)).unwrap(), v);
    }
}

#[test]
fn test_float_encoding() {
    for v in [0.0f32, -123.234, f32::MAX, 3.1415] {
        let bytes = encoded(|b| write_f32(b, v, true));
        assert_eq!(bytes.len(), 5);
        assert_eq!(bytes[0], 0x9f);
        let got = read_f32(&mut ByteBuffer::from_bytes(bytes)).unwrap();
        assert_eq!(got.to_bits(), v.to_bits());
    }
    for v in [0.0f64, -122_343.234, f64::MAX, 23_487_924.234_823_904] {
        let bytes = encoded(|b| write_f64(b, v, true));
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[0], 0xa0);
        let got = read_f64(&mut ByteBuffer::from_bytes(bytes)).unwrap();
        assert_eq!(got.to_bits(), v.to_bits());
    }
}

#[test]
fn test_cross_type_reads_into_integers() {
    // Any integer form converts into any integer destination.
    let bytes = encoded(|b| write_i32(b, 1234, true));
    assert_eq!(read_i64(&mut ByteBuffer::from_bytes(bytes.clone())).unwrap(), 1234);
    assert_eq!(read_i16(&mut ByteBuffer::from_bytes(bytes)).unwrap(), 1234);

    let bytes = encoded(|b| write_i64(b, -77, true));
    assert_eq!(read_i32(&mut ByteBuffer::from_bytes(bytes)).unwrap(), -77);

    let bytes = encoded(|b| write_i16(b, -2, true));
    assert_eq!(read_i64(&mut ByteBuffer::from_bytes(bytes)).unwrap(), -2);

    // Direct forms count as the same type.
    assert_eq!(read_i64(&mut ByteBuffer::from_bytes(vec![0x55])).unwrap(), 5);
    assert_eq!(read_i32(&mut ByteBuffer::from_bytes(vec![0x94])).unwrap(), 12);

    // Base-10 string parses.
    let bytes = encoded(|b| write_string(b, "-4711", true));
    assert_eq!(read_i32(&mut ByteBuffer::from_bytes(bytes)).unwrap(), -4711);
    let bytes = encoded(|b| write_string(b, "not a number", true));
    assert!(matches!(
        read_i32(&mut ByteBuffer::from_bytes(bytes)),
        Err(Error::TypeMismatch(_))
    ));
}

#[test]
fn test_cross_type_reads_into_strings() {
    let bytes = encoded(|b| write_i32(b, 4711, true));
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        "4711"
    );
    let bytes = encoded(|b| write_i64(b, -12, true));
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        "-12"
    );
    let bytes = encoded(|b| write_f64(b, 2.5, true));
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        "2.5"
    );
    let bytes = encoded(|b| write_i16(b, 7, true));
    assert_eq!(
        read_string(&mut ByteBuffer::from_bytes(bytes)).unwrap(),
        "7"
    );
}

#[test]
fn test_cross_type_reads_into_floats() {
    let bytes = encoded(|b| write_f64(b, 2.5, true));
    assert_eq!(read_f32(&mut ByteBuffer::from_bytes(bytes)).unwrap(), 2.5);
    let bytes = encoded(|b| write_f32(b, -1.25, true));
    assert_eq!(read_f64(&mut ByteBuffer::from_bytes(bytes)).unwrap(), -1.25);
    let bytes = encoded(|b| write_string(b, "6.125", true));
    assert_eq!(read_f64(&mut ByteBuffer::from_bytes(bytes)).unwrap(), 6.125);

    // Integers are not convertible to floats.
    let bytes = encoded(|b| write_i32(b, 1234, true));
    assert!(matches!(
        read_f64(&mut ByteBuffer::from_bytes(bytes)),
        Err(Error::TypeMismatch(_))
    ));
}

#[test]
fn test_strict_destinations() {
    // byte and bytes accept only their own tags.
    let bytes = encoded(|b| write_i32(b, 5, true));
    assert!(matches!(
        read_byte(&mut ByteBuffer::from_bytes(bytes.clone())),
        Err(Error::TypeMismatch(_))
    ));
    assert!(matches!(
        read_bytes(&mut ByteBuffer::from_bytes(bytes.clone())),
        Err(Error::TypeMismatch(_))
    ));
    assert!(matches!(
        read_bool(&mut ByteBuffer::from_bytes(bytes)),
        Err(Error::TypeMismatch(_))
    ));
}

#[test]
fn test_payload_only_forms() {
    use breeze::reader::{read_i32_without_type, read_string_without_type};

    let mut buf = ByteBuffer::new(32);
    write_string(&mut buf, "hi", false);
    write_i32(&mut buf, 47, false);
    assert_eq!(buf.bytes(), &[0x02, 0x68, 0x69, 0x5e]);
    assert_eq!(read_string_without_type(&mut buf).unwrap(), "hi");
    assert_eq!(read_i32_without_type(&mut buf).unwrap(), 47);
}

#[test]
fn test_undefined_tags_rejected() {
    use breeze::reader::read_value;
    for tag in [0xa1u8, 0xc0, 0xd8] {
        let mut buf = ByteBuffer::from_bytes(vec![tag]);
        assert!(matches!(read_value(&mut buf), Err(Error::Unsupported(_))));
    }
    // The reserved schema tag is accepted by the grammar but has no payload
    // this codec produces or consumes.
    let mut buf = ByteBuffer::from_bytes(vec![0xdd]);
    assert!(matches!(read_value(&mut buf), Err(Error::Unsupported(_))));
}
