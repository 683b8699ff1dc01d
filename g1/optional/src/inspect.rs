use std::error;
use std::fmt;

use serde::ser::{
    self, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};
use snafu::prelude::*;

use crate::error::Error;

//
// Implementer's Notes:
//
// * Codecs are not uniformly strict: `serde_json` writes a NaN as `null`, whereas `serde_yaml`
//   rejects byte arrays with an opaque custom error.  Instead of wrapping each codec's
//   serializer, we walk the value once with a serializer that produces no output and only checks
//   the types and values against the target format, and then hand the value to the codec.
//
// * `Custom` errors are raised by `Serialize` implementors themselves.  We ignore them here; the
//   codec will hit the same error and report it in its own terms.
//

/// What a format can represent, beyond what every Serde format can.
pub(crate) trait Format: Copy {
    fn inspect_float(self, value: f64) -> Result<(), Rejection>;

    fn inspect_bytes(self) -> Result<(), Rejection>;

    fn inspect_key<K>(self, key: &K) -> Result<(), Rejection>
    where
        K: ?Sized + Serialize;
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Rejection {
    #[snafu(display("unsupported type: {type_name}"))]
    UnsupportedType { type_name: &'static str },
    #[snafu(display("unsupported value: {value}"))]
    UnsupportedValue { value: String },
    #[snafu(display("{message}"))]
    Custom { message: String },
}

impl ser::Error for Rejection {
    fn custom<T>(message: T) -> Self
    where
        T: fmt::Display,
    {
        Self::Custom {
            message: message.to_string(),
        }
    }
}

/// Checks `value` against `format`.
pub(crate) fn inspect<F, T, E>(format: F, value: &T) -> Result<(), Error<E>>
where
    F: Format,
    T: ?Sized + Serialize,
    E: error::Error + 'static,
{
    match value.serialize(Inspector(format)) {
        Ok(()) | Err(Rejection::Custom { .. }) => Ok(()),
        Err(Rejection::UnsupportedType { type_name }) => Err(Error::UnsupportedType { type_name }),
        Err(Rejection::UnsupportedValue { value }) => Err(Error::UnsupportedValue { value }),
    }
}

/// Rejects non-finite floats.
pub(crate) fn ensure_finite(value: f64) -> Result<(), Rejection> {
    ensure!(
        value.is_finite(),
        UnsupportedValueSnafu {
            value: value.to_string(),
        }
    );
    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Inspector<F>(pub(crate) F);

impl<F> Serializer for Inspector<F>
where
    F: Format,
{
    type Ok = ();
    type Error = Rejection;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

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
        self.0.inspect_float(f64::from(value))
    }

    fn serialize_f64(self, value: f64) -> Result<Self::Ok, Self::Error> {
        self.0.inspect_float(value)
    }

    fn serialize_char(self, _: char) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<Self::Ok, Self::Error> {
        self.0.inspect_bytes()
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

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
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(self)
    }
}

macro_rules! impl_compound {
    ($trait:ident :: $method:ident($($key:ty)?)) => {
        impl<F> $trait for Inspector<F>
        where
            F: Format,
        {
            type Ok = ();
            type Error = Rejection;

            fn $method<T>(&mut self, $(_: $key, )? value: &T) -> Result<(), Self::Error>
            where
                T: ?Sized + Serialize,
            {
                value.serialize(*self)
            }

            fn end(self) -> Result<Self::Ok, Self::Error> {
                Ok(())
            }
        }
    };
}

impl_compound!(SerializeSeq::serialize_element());
impl_compound!(SerializeTuple::serialize_element());
impl_compound!(SerializeTupleStruct::serialize_field());
impl_compound!(SerializeTupleVariant::serialize_field());
impl_compound!(SerializeStruct::serialize_field(&'static str));
impl_compound!(SerializeStructVariant::serialize_field(&'static str));

impl<F> SerializeMap for Inspector<F>
where
    F: Format,
{
    type Ok = ();
    type Error = Rejection;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        self.0.inspect_key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(*self)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}
