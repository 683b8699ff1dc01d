#![cfg(feature = "yaml")]

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use g1_optional::{Value, yaml};

fn assert_set<T>(value: T, expect: &str)
where
    T: Debug + Default + DeserializeOwned + PartialEq + Serialize,
{
    let value = Value::new(value);
    assert_eq!(yaml::to_string(&value).unwrap(), expect);
    assert_eq!(yaml::from_str::<Value<T>>(expect).unwrap(), value, "{expect:?}");
}

fn assert_round_trip<T>(value: T)
where
    T: Debug + Default + DeserializeOwned + PartialEq + Serialize,
{
    let value = Value::new(value);
    let yaml = yaml::to_string(&value).unwrap();
    assert_eq!(yaml::from_str::<Value<T>>(&yaml).unwrap(), value, "{yaml:?}");
}

fn assert_unset<T>()
where
    T: Debug + Default + DeserializeOwned + PartialEq + Serialize,
{
    assert_eq!(yaml::to_string(&Value::<T>::default()).unwrap(), "null\n");
    for data in ["null", "~", "Null", "NULL", "", "\n"] {
        assert_eq!(
            yaml::from_str::<Value<T>>(data).unwrap(),
            Value::default(),
            "{data:?}",
        );
    }
}

#[test]
fn boolean() {
    assert_unset::<bool>();
    assert_set(false, "false\n");
    assert_set(true, "true\n");
}

#[test]
fn signed() {
    assert_unset::<i8>();
    assert_set(0i8, "0\n");
    assert_set(i8::MIN, "-128\n");
    assert_set(i8::MAX, "127\n");

    assert_unset::<i16>();
    assert_set(i16::MIN, "-32768\n");
    assert_set(i16::MAX, "32767\n");

    assert_unset::<i32>();
    assert_set(i32::MIN, "-2147483648\n");
    assert_set(i32::MAX, "2147483647\n");

    assert_unset::<i64>();
    assert_set(0i64, "0\n");
    assert_set(i64::MIN, "-9223372036854775808\n");
    assert_set(i64::MAX, "9223372036854775807\n");
}

#[test]
fn unsigned() {
    assert_unset::<u8>();
    assert_set(0u8, "0\n");
    assert_set(u8::MAX, "255\n");

    assert_unset::<u16>();
    assert_set(u16::MAX, "65535\n");

    assert_unset::<u32>();
    assert_set(u32::MAX, "4294967295\n");

    assert_unset::<u64>();
    assert_set(0u64, "0\n");
    assert_set(u64::MAX, "18446744073709551615\n");
}

#[test]
fn float() {
    assert_unset::<f32>();
    assert_set(1.5f32, "1.5\n");
    for value in [0.0f32, f32::MIN, f32::MAX, f32::from_bits(1)] {
        assert_round_trip(value);
    }

    assert_unset::<f64>();
    assert_set(1.5f64, "1.5\n");
    for value in [0.0f64, f64::MIN, f64::MAX, f64::from_bits(1)] {
        assert_round_trip(value);
    }
}

#[test]
fn non_finite() {
    assert_set(f32::INFINITY, ".inf\n");
    assert_set(f32::NEG_INFINITY, "-.inf\n");
    assert_set(f64::INFINITY, ".inf\n");
    assert_set(f64::NEG_INFINITY, "-.inf\n");

    // Both quiet and signaling NaNs are written as `.nan`.
    for bits in [0x7fff_ffff_ffff_ffff, 0x7ff7_ffff_ffff_ffff] {
        let value = f64::from_bits(bits);
        assert_eq!(yaml::to_string(&Value::new(value)).unwrap(), ".nan\n");
    }
    let (value, is_set) = yaml::from_str::<Value<f64>>(".nan").unwrap().into_inner();
    assert!(is_set);
    assert!(value.is_nan());
}

#[test]
fn character() {
    assert_unset::<char>();
    assert_set('A', "A\n");
    assert_round_trip('\u{2e9f}');
}

#[test]
fn string() {
    assert_unset::<String>();
    assert_set(String::new(), "''\n");
    assert_set("The quick brown fox".to_string(), "The quick brown fox\n");
    // A string that reads as null is quoted to keep it set.
    assert_set("null".to_string(), "'null'\n");
    assert_set("~".to_string(), "'~'\n");
}

#[test]
fn vec() {
    assert_unset::<Vec<String>>();
    assert_set(Vec::<String>::new(), "[]\n");
    assert_set(
        vec!["The quick brown fox".to_string()],
        "- The quick brown fox\n",
    );
    assert_set(vec![Value::new(1), Value::default()], "- 1\n- null\n");
}

#[test]
fn map() {
    assert_unset::<BTreeMap<String, String>>();
    assert_set(BTreeMap::<String, String>::new(), "{}\n");
    assert_set(
        BTreeMap::from([("entry".to_string(), "The quick brown fox".to_string())]),
        "entry: The quick brown fox\n",
    );
    assert_set(
        BTreeMap::from([(1u8, Value::new(2u8)), (3u8, Value::default())]),
        "1: 2\n3: null\n",
    );
}

#[test]
fn unsupported_type() {
    let error = yaml::to_string(&Value::new(ByteBuf::from(vec![1, 2, 3]))).unwrap_err();
    assert!(error.is_unsupported_type());
    assert!(error.codec_error().is_none());

    assert!(
        yaml::to_string(&Value::new(vec![ByteBuf::new()]))
            .unwrap_err()
            .is_unsupported_type(),
    );
}

#[test]
fn nil_inner() {
    let value = Value::new(None::<Vec<String>>);
    assert_eq!(yaml::to_string(&value).unwrap(), "null\n");
    assert!(
        yaml::from_str::<Value<Option<Vec<String>>>>("null")
            .unwrap()
            .is_unset(),
    );

    let value = Value::new(None::<BTreeMap<String, String>>);
    assert_eq!(yaml::to_string(&value).unwrap(), "null\n");
    assert!(
        yaml::from_str::<Value<Option<BTreeMap<String, String>>>>("null")
            .unwrap()
            .is_unset(),
    );
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
struct Hidden {
    #[serde(skip)]
    hidden: i32,
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
struct TwoFields {
    a: i32,
    b: bool,
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
struct Renamed {
    #[serde(rename = "value")]
    inner: i32,
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
struct Outer {
    x: Value<i32>,
    y: Value<String>,
    z: Value<TwoFields>,
}

#[test]
fn structs() {
    assert_unset::<Hidden>();
    assert_set(Hidden::default(), "{}\n");

    assert_unset::<TwoFields>();
    assert_set(TwoFields::default(), "a: 0\nb: false\n");

    assert_unset::<Renamed>();
    assert_set(Renamed { inner: 7 }, "value: 7\n");
}

#[test]
fn embedded() {
    for (outer, expect) in [
        (Outer::default(), "x: null\ny: null\nz: null\n"),
        (
            Outer {
                x: Value::new(1),
                y: Value::new(String::new()),
                z: Value::new(TwoFields { a: 2, b: true }),
            },
            "x: 1\ny: ''\nz:\n  a: 2\n  b: true\n",
        ),
    ] {
        assert_eq!(yaml::to_string(&outer).unwrap(), expect);
        assert_eq!(yaml::from_str::<Outer>(expect).unwrap(), outer);
    }

    assert_eq!(
        yaml::from_str::<Outer>("y: foo\n").unwrap(),
        Outer {
            y: Value::new("foo".to_string()),
            ..Outer::default()
        },
    );
    assert_eq!(
        yaml::from_str::<Outer>("x:\ny: ~\nz: null\n").unwrap(),
        Outer::default(),
    );
}

#[test]
fn decode_error() {
    for data in ["qnan", "snan", "(0.0,0.0)"] {
        let error = yaml::from_str::<Value<f64>>(data).unwrap_err();
        assert!(error.codec_error().is_some(), "{data:?}");
    }

    assert!(yaml::from_str::<Value<i8>>("128").is_err());
    assert!(yaml::from_str::<Outer>("x: [1").is_err());
}
