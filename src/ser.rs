//! Dotenv serialization.
//!
//! This module provides the [`Serializer`] implementation that flattens
//! Rust data structures into `KEY=VALUE` environment-file text.
//!
//! ## Overview
//!
//! The serializer performs one depth-first walk of the record:
//!
//! - **Named fields** become path segments; nested record fields flatten
//!   into a single key joined with `_` (`outer.inner` → `outer_inner`)
//! - **Scalars** are rendered per the rules in [`crate::scalar`]
//! - **Sequences** of scalars collapse into one value, joined with the
//!   separator resolved from [`DotenvOptions`]
//! - **Absent optionals** and **empty sequences** produce no line at all;
//!   boolean `false` produces `KEY=` (present but empty)
//!
//! Two fields whose paths flatten to the same key resolve last-write-wins;
//! the later field silently replaces the earlier entry.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_dotenv::{to_string, DotenvOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let env = to_string(&Data { x: 1, y: 2 }).unwrap();
//! assert_eq!(env, "x=1\ny=2");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! For advanced use cases, you can drive the serializer directly:
//!
//! ```rust
//! use serde_dotenv::{DotenvOptions, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut serializer = Serializer::new(DotenvOptions::default());
//! Point { x: 1, y: 2 }.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_output(), "x=1\ny=2");
//! ```

use crate::{scalar, DotenvOptions, EnvMap, Error, Result};
use serde::ser::{Impossible, SerializeSeq};
use serde::{ser, Serialize};

/// The dotenv serializer.
///
/// Holds the state of one encoding pass: the ordered key→value map being
/// built, the key-path stack tracking the current position in the record
/// tree, and the resolved options. Rendering consumes the serializer, so a
/// finished pass cannot be reused; callers needing repeated encodes
/// construct a fresh `Serializer` per call.
pub struct Serializer {
    map: EnvMap,
    path: Vec<String>,
    options: DotenvOptions,
}

impl Serializer {
    pub fn new(options: DotenvOptions) -> Self {
        Serializer {
            map: EnvMap::new(),
            path: Vec::new(),
            options,
        }
    }

    /// Renders the accumulated entries as `KEY=VALUE` lines joined with
    /// `\n`, without a trailing newline.
    #[must_use]
    pub fn into_output(self) -> String {
        self.map.to_text()
    }

    /// Returns the accumulated entries without rendering them.
    #[must_use]
    pub fn into_map(self) -> EnvMap {
        self.map
    }

    /// Flattens the current path stack into an output key.
    ///
    /// Empty path means the value sits above the first field level (a bare
    /// scalar or sequence at the root), which has no key to be written
    /// under.
    fn flat_key(&self) -> Result<String> {
        if self.path.is_empty() {
            return Err(Error::unsupported_type(
                "top-level value must be a record with named fields",
            ));
        }
        Ok(self.path.join("_"))
    }

    fn put_scalar(&mut self, text: String) -> Result<()> {
        let key = self.flat_key()?;
        self.map.insert(key, text);
        Ok(())
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.put_scalar(scalar::bool_text(v).to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.put_scalar(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        self.put_scalar(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.put_scalar(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        self.put_scalar(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        // Formatted at f32 width so the shortest round-tripping form is used
        self.put_scalar(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.put_scalar(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.put_scalar(scalar::escape(v).into_owned())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        SerializeSeq::end(seq)
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        // Absent optionals are elided: the key never appears
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type("unit values"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype enum variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            ser: self,
            parts: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple enum variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct enum variants"))
    }
}

/// Keyed container for structs with statically named fields.
///
/// Each field's name is pushed onto the path stack before the value is
/// encoded and popped afterwards, even when encoding fails, so sibling
/// fields stay correctly pathed.
pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.path.push(key.to_string());
        let result = value.serialize(&mut *self.ser);
        self.ser.path.pop();
        result
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Keyed container for maps with runtime string keys.
pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    pending_key: Option<String>,
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let segment = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.ser.path.push(segment);
        let result = value.serialize(&mut *self.ser);
        self.ser.path.pop();
        result
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Sequence container.
///
/// Buffers the formatted text of each element, preserving order, and on
/// completion joins the buffer with the separator resolved for the current
/// flattened key. An empty buffer writes nothing: an empty sequence is
/// elided like an absent optional. An element that formats to the empty
/// string (boolean `false`) is still counted and joined.
pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    parts: Vec<String>,
}

impl<'a> SeqSerializer<'a> {
    fn push_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(text) = value.serialize(ScalarSerializer)? {
            self.parts.push(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.parts.is_empty() {
            return Ok(());
        }
        let key = self.ser.flat_key()?;
        let joined = self.parts.join(self.ser.options.separator_for(&key));
        self.ser.map.insert(key, joined);
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Formats one sequence element as scalar text.
///
/// `Ok(None)` marks an absent element (`None` in a sequence of optionals),
/// which is skipped rather than joined. Compound elements are rejected:
/// sequences of sequences or sequences of records have no specified
/// flattened form.
struct ScalarSerializer;

impl ser::Serializer for ScalarSerializer {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(scalar::bool_text(v).to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(scalar::escape(v).into_owned()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("byte arrays inside sequences"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type("unit values inside sequences"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype enum variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("sequences nested inside sequences"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("sequences nested inside sequences"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("sequences nested inside sequences"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple enum variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("records inside sequences"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type("records inside sequences"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct enum variants"))
    }
}

/// Captures a map key as a path segment. Only string-shaped keys are
/// accepted; path segments are never quoted or escaped.
struct MapKeySerializer;

fn key_must_be_string() -> Error {
    Error::custom("map keys must be strings")
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_some<T>(self, _value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_string())
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Err(key_must_be_string())
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_string())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_string())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_string())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_string())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_string())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_string())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_string())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Inner {
        value: i32,
    }

    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
        flag: bool,
    }

    #[test]
    fn test_path_stack_restored_after_nested_record() {
        let mut serializer = Serializer::new(DotenvOptions::default());
        let outer = Outer {
            inner: Inner { value: 5 },
            flag: true,
        };
        outer.serialize(&mut serializer).unwrap();
        assert!(serializer.path.is_empty());
        assert_eq!(serializer.into_output(), "inner_value=5\nflag=true");
    }

    #[test]
    fn test_path_stack_restored_after_failed_field() {
        #[derive(Serialize)]
        struct Bad {
            broken: (),
            fine: u8,
        }

        let mut serializer = Serializer::new(DotenvOptions::default());
        let result = Bad { broken: (), fine: 1 }.serialize(&mut serializer);
        assert!(result.is_err());
        assert!(serializer.path.is_empty());
    }

    #[test]
    fn test_into_map_exposes_entries() {
        let mut serializer = Serializer::new(DotenvOptions::default());
        Outer {
            inner: Inner { value: 7 },
            flag: false,
        }
        .serialize(&mut serializer)
        .unwrap();

        let map = serializer.into_map();
        assert_eq!(map.get("inner_value"), Some("7"));
        assert_eq!(map.get("flag"), Some(""));
    }
}
