//! JSON Adapter
//!
//! Thin wrappers of `serde_json` entry points that reject what JSON cannot represent, rather than
//! letting `serde_json` coerce it (a NaN would otherwise be written as `null`).
//!
//! ```
//! use g1_optional::{Value, json};
//!
//! assert_eq!(json::to_string(&Value::<i32>::default()).unwrap(), "null");
//! assert_eq!(json::to_string(&Value::new(5)).unwrap(), "5");
//! assert_eq!(json::from_str::<Value<i32>>("null").unwrap(), Value::default());
//! assert_eq!(json::from_str::<Value<i32>>("5").unwrap(), Value::new(5));
//!
//! assert!(json::to_string(&Value::new(f64::NAN)).unwrap_err().is_unsupported_value());
//! ```

use std::io::{Read, Write};

use serde::de::{Deserialize, DeserializeOwned};
use serde::ser::{Impossible, Serialize, Serializer};
use serde_json::error::Category;

use crate::inspect::{self, Format, Rejection, UnsupportedTypeSnafu};

pub type Error = crate::Error<serde_json::Error>;

pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: ?Sized + Serialize,
{
    inspect(value)?;
    serde_json::to_string(value).map_err(classify)
}

pub fn to_string_pretty<T>(value: &T) -> Result<String, Error>
where
    T: ?Sized + Serialize,
{
    inspect(value)?;
    serde_json::to_string_pretty(value).map_err(classify)
}

pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: ?Sized + Serialize,
{
    inspect(value)?;
    serde_json::to_vec(value).map_err(classify)
}

/// Encodes `value` to `writer`.
///
/// Nothing is written when the value is rejected.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<(), Error>
where
    W: Write,
    T: ?Sized + Serialize,
{
    inspect(value)?;
    serde_json::to_writer(writer, value).map_err(classify)
}

pub fn from_str<'a, T>(data: &'a str) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(data).map_err(classify)
}

pub fn from_slice<'a, T>(data: &'a [u8]) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(data).map_err(classify)
}

pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
    R: Read,
    T: DeserializeOwned,
{
    serde_json::from_reader(reader).map_err(classify)
}

fn inspect<T>(value: &T) -> Result<(), Error>
where
    T: ?Sized + Serialize,
{
    inspect::inspect(Json, value)
}

fn classify(source: serde_json::Error) -> Error {
    match source.classify() {
        Category::Syntax | Category::Eof => Error::Syntax { source },
        _ => Error::Codec { source },
    }
}

#[derive(Clone, Copy, Debug)]
struct Json;

impl Format for Json {
    fn inspect_float(self, value: f64) -> Result<(), Rejection> {
        inspect::ensure_finite(value)
    }

    // `serde_json` writes a byte array as an array of numbers.
    fn inspect_bytes(self) -> Result<(), Rejection> {
        Ok(())
    }

    fn inspect_key<K>(self, key: &K) -> Result<(), Rejection>
    where
        K: ?Sized + Serialize,
    {
        key.serialize(KeyInspector)
    }
}

/// Accepts what `serde_json` can write as an object key: strings and whatever it stringifies.
#[derive(Clone, Copy, Debug)]
struct KeyInspector;

fn reject_key<T>(type_name: &'static str) -> Result<T, Rejection> {
    UnsupportedTypeSnafu { type_name }.fail()
}

impl Serializer for KeyInspector {
    type Ok = ();
    type Error = Rejection;

    type SerializeSeq = Impossible<(), Rejection>;
    type SerializeTuple = Impossible<(), Rejection>;
    type SerializeTupleStruct = Impossible<(), Rejection>;
    type SerializeTupleVariant = Impossible<(), Rejection>;
    type SerializeMap = Impossible<(), Rejection>;
    type SerializeStruct = Impossible<(), Rejection>;
    type SerializeStructVariant = Impossible<(), Rejection>;

    fn serialize_bool(self, _: bool) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_f32(self, value: f32) -> Result<Self::Ok, Self::Error> {
        inspect::ensure_finite(f64::from(value))
    }

    fn serialize_f64(self, value: f64) -> Result<Self::Ok, Self::Error> {
        inspect::ensure_finite(value)
    }

    fn serialize_char(self, _: char) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<Self::Ok, Self::Error> {
        reject_key("byte array map key")
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        reject_key("option map key")
    }

    // Written as the inner key.
    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        reject_key("unit map key")
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok, Self::Error> {
        reject_key("unit struct map key")
    }

    // Written as the variant name.
    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        reject_key("enum variant map key")
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        reject_key("sequence map key")
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        reject_key("tuple map key")
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        reject_key("tuple struct map key")
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        reject_key("enum variant map key")
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        reject_key("map map key")
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        reject_key("struct map key")
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        reject_key("enum variant map key")
    }
}
