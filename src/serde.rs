//! Serde support: an Xid serializes as its 20 character text form and
//! deserializes from that text or from 12 raw bytes.

use core::fmt;

use ::serde::de::{self, MapAccess, SeqAccess, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::XidError;
use crate::id::Xid;

const EXPECTED: &str = "a 20 character xid string or 12 raw bytes";

impl Serialize for Xid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0u8; crate::codec::ENCODED_LEN];
        s.serialize_str(self.encode_into(&mut buf))
    }
}

/// Self-describing formats (JSON, the `serde::de::value` deserializers) accept
/// either the text form or 12 raw bytes. Non-human-readable formats are asked
/// for a string, matching what `Serialize` writes; they only reach the bytes
/// path if the format itself hands the visitor bytes.
impl<'de> Deserialize<'de> for Xid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_any(XidVisitor)
        } else {
            d.deserialize_str(XidVisitor)
        }
    }
}

struct XidVisitor;

fn mismatch<E: de::Error>(found: &'static str) -> E {
    de::Error::custom(XidError::TypeMismatch {
        expected: EXPECTED,
        found,
    })
}

impl<'de> Visitor<'de> for XidVisitor {
    type Value = Xid;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(EXPECTED)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::from_string(v).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Xid::from_bytes(v).map_err(de::Error::custom)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(mismatch("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(mismatch("integer"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(mismatch("integer"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(mismatch("float"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(mismatch("null"))
    }

    fn visit_seq<A>(self, _: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Err(mismatch("sequence"))
    }

    fn visit_map<A>(self, _: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        Err(mismatch("map"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: [u8; 12] = [
        0x4D, 0x88, 0xE1, 0x5B, 0x60, 0xF4, 0x86, 0xE4, 0x28, 0x41, 0x2D, 0xC9,
    ];

    #[test]
    fn test_serialize_as_string() {
        let id = Xid::from_raw(RAW);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"9m4e2mr0ui3e8a215n4g\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let id: Xid = serde_json::from_str("\"9m4e2mr0ui3e8a215n4g\"").unwrap();
        assert_eq!(id.to_bytes(), RAW);
    }

    #[test]
    fn test_deserialize_invalid_string() {
        let err = serde_json::from_str::<Xid>("\"invalid\"").unwrap_err();
        assert!(err.to_string().starts_with("Invalid ID"), "{err}");
    }

    #[test]
    fn test_deserialize_wrong_type() {
        for input in ["42", "-1", "1.5", "true", "null", "[1, 2]", "{}"] {
            let err = serde_json::from_str::<Xid>(input).unwrap_err();
            assert!(err.to_string().starts_with("Type mismatch"), "{input}: {err}");
        }
    }

    #[test]
    fn test_deserialize_from_bytes() {
        use ::serde::de::value::{BytesDeserializer, Error as ValueError};

        let d = BytesDeserializer::<ValueError>::new(&RAW);
        assert_eq!(Xid::deserialize(d).unwrap().to_bytes(), RAW);

        let d = BytesDeserializer::<ValueError>::new(&RAW[..3]);
        assert!(Xid::deserialize(d).is_err());
    }

    #[test]
    fn test_deserialize_from_str_deserializer() {
        use ::serde::de::value::{Error as ValueError, StrDeserializer};

        let d = StrDeserializer::<ValueError>::new("9m4e2mr0ui3e8a215n4g");
        assert_eq!(Xid::deserialize(d).unwrap().to_bytes(), RAW);

        let d = StrDeserializer::<ValueError>::new("9m4e2mr0ui3e8a215n4!");
        let err = Xid::deserialize(d).unwrap_err();
        assert!(err.to_string().starts_with("Invalid ID"), "{err}");
    }

    #[test]
    fn test_struct_field() {
        #[derive(::serde::Serialize, ::serde::Deserialize, PartialEq, Debug)]
        struct Record {
            id: Xid,
        }

        let record = Record {
            id: Xid::from_raw(RAW),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"9m4e2mr0ui3e8a215n4g"}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }
}
