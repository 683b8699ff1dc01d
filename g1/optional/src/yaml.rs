//! YAML Adapter
//!
//! YAML differs from JSON in what it can represent: it has syntax for non-finite floats (`.nan`,
//! `.inf`, and `-.inf`) and allows any node as a mapping key, but it has no byte string.
//!
//! Unset is written as `null`.  On decoding, `~`, `Null`, `NULL`, an empty scalar, and an empty
//! document are read as unset, too.
//!
//! ```
//! use g1_optional::{Value, yaml};
//!
//! assert_eq!(yaml::to_string(&Value::<i32>::default()).unwrap(), "null\n");
//! assert_eq!(yaml::to_string(&Value::new(5)).unwrap(), "5\n");
//! assert_eq!(yaml::from_str::<Value<i32>>("~").unwrap(), Value::default());
//! assert_eq!(yaml::from_str::<Value<i32>>("").unwrap(), Value::default());
//! assert_eq!(yaml::from_str::<Value<i32>>("5").unwrap(), Value::new(5));
//!
//! assert_eq!(yaml::to_string(&Value::new(f64::INFINITY)).unwrap(), ".inf\n");
//! ```

use std::io::{Read, Write};

use serde::de::{Deserialize, DeserializeOwned};
use serde::ser::Serialize;

use crate::inspect::{self, Format, Inspector, Rejection, UnsupportedTypeSnafu};

pub type Error = crate::Error<serde_yaml::Error>;

pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: ?Sized + Serialize,
{
    inspect(value)?;
    serde_yaml::to_string(value).map_err(|source| Error::Codec { source })
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
    serde_yaml::to_writer(writer, value).map_err(|source| Error::Codec { source })
}

//
// NOTE: `serde_yaml` does not classify its errors, and thus all decoding errors are reported as
// `Error::Codec`, including syntax errors.
//

pub fn from_str<'a, T>(data: &'a str) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_yaml::from_str(data).map_err(|source| Error::Codec { source })
}

pub fn from_slice<'a, T>(data: &'a [u8]) -> Result<T, Error>
where
    T: Deserialize<'a>,
{
    serde_yaml::from_slice(data).map_err(|source| Error::Codec { source })
}

pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
    R: Read,
    T: DeserializeOwned,
{
    serde_yaml::from_reader(reader).map_err(|source| Error::Codec { source })
}

fn inspect<T>(value: &T) -> Result<(), Error>
where
    T: ?Sized + Serialize,
{
    inspect::inspect(Yaml, value)
}

#[derive(Clone, Copy, Debug)]
struct Yaml;

impl Format for Yaml {
    fn inspect_float(self, _: f64) -> Result<(), Rejection> {
        Ok(())
    }

    fn inspect_bytes(self) -> Result<(), Rejection> {
        UnsupportedTypeSnafu {
            type_name: "byte array",
        }
        .fail()
    }

    fn inspect_key<K>(self, key: &K) -> Result<(), Rejection>
    where
        K: ?Sized + Serialize,
    {
        key.serialize(Inspector(self))
    }
}
