//! Field values and their Unity YAML text form.
//!
//! Input arrives as loosely shaped JSON. [`FieldValue::from_json`] inspects the
//! shape once and every shape it does not recognise collapses to
//! [`FieldValue::Null`], which prints as the null object reference. Formatting
//! is the `Display` impl and never fails.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map as JsonMap, Value as JsonValue};

/// File id Unity assigns to the main object of a `.asset` file.
pub const MAIN_OBJECT_FILE_ID: i64 = 11400000;
/// File id of the `MonoScript` object a `m_Script` reference points at.
pub const SCRIPT_FILE_ID: i64 = 11500000;
/// Reference `type` for a link into an imported asset.
pub const ASSET_REFERENCE_TYPE: i64 = 2;
/// Reference `type` used when the input does not name one.
pub const DEFAULT_REFERENCE_TYPE: i64 = 3;

pub const NULL_REFERENCE: &str = "{fileID: 0}";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact instead of widening to a float.
    Unsigned(u64),
    Float(f64),
}

impl Number {
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let JsonValue::Number(number) = value else {
            return None;
        };
        if let Some(int) = number.as_i64() {
            Some(Self::Integer(int))
        } else if let Some(int) = number.as_u64() {
            Some(Self::Unsigned(int))
        } else {
            number.as_f64().map(Self::Float)
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write_float(f, v),
        }
    }
}

// Integral floats keep a fractional digit so `1.0` stays distinguishable from `1`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_finite() && v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Number,
    pub g: Number,
    pub b: Number,
    pub a: Number,
}

impl Color {
    pub const fn rgba(r: Number, g: Number, b: Number, a: Number) -> Self {
        Self { r, g, b, a }
    }

    fn from_record(map: &JsonMap<String, JsonValue>) -> Option<Self> {
        let channel = |key: &str| map.get(key).and_then(Number::from_json);
        let a = match map.get("a") {
            Some(value) => Number::from_json(value)?,
            None => Number::Integer(1),
        };
        Some(Self::rgba(channel("r")?, channel("g")?, channel("b")?, a))
    }

    fn from_sequence(items: &[JsonValue]) -> Option<Self> {
        let [r, g, b, a] = items else {
            return None;
        };
        Some(Self::rgba(
            Number::from_json(r)?,
            Number::from_json(g)?,
            Number::from_json(b)?,
            Number::from_json(a)?,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{r: {}, g: {}, b: {}, a: {}}}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// A Unity object reference. `type_id` is only printed alongside a `guid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub file_id: i64,
    pub guid: Option<Cow<'static, str>>,
    pub type_id: i64,
}

impl ObjectRef {
    pub fn local(file_id: i64) -> Self {
        Self {
            file_id,
            guid: None,
            type_id: DEFAULT_REFERENCE_TYPE,
        }
    }

    pub fn external(file_id: i64, guid: impl Into<Cow<'static, str>>, type_id: i64) -> Self {
        Self {
            file_id,
            guid: Some(guid.into()),
            type_id,
        }
    }

    fn from_record(map: &JsonMap<String, JsonValue>) -> Option<Self> {
        let file_id = map.get("fileID")?.as_i64()?;
        let Some(guid) = map.get("guid") else {
            return Some(Self::local(file_id));
        };
        let guid = guid.as_str()?;
        let type_id = match map.get("type") {
            Some(value) => value.as_i64()?,
            None => DEFAULT_REFERENCE_TYPE,
        };
        Some(Self::external(file_id, guid.to_string(), type_id))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.guid {
            Some(guid) => write!(
                f,
                "{{fileID: {}, guid: {}, type: {}}}",
                self.file_id, guid, self.type_id
            ),
            None => write!(f, "{{fileID: {}}}", self.file_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(Cow<'static, str>),
    Color(Color),
    Reference(ObjectRef),
}

impl FieldValue {
    pub const fn text(value: &'static str) -> Self {
        Self::String(Cow::Borrowed(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Classify an arbitrary JSON value by shape.
    ///
    /// Objects carrying `r`, `g` and `b` are colours, objects carrying `fileID`
    /// are references, arrays of exactly four numbers are positional colours.
    /// Anything else that is not a scalar becomes [`FieldValue::Null`], as does
    /// a recognised shape whose members have the wrong JSON type.
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(flag) => Self::Bool(*flag),
            JsonValue::Number(_) => match Number::from_json(value) {
                Some(Number::Integer(v)) => Self::Integer(v),
                Some(Number::Unsigned(v)) => Self::Unsigned(v),
                Some(Number::Float(v)) => Self::Float(v),
                None => Self::Null,
            },
            JsonValue::String(text) => Self::String(Cow::Owned(text.clone())),
            JsonValue::Object(map) => Self::from_record(map),
            JsonValue::Array(items) => Color::from_sequence(items).map_or(Self::Null, Self::Color),
        }
    }

    fn from_record(map: &JsonMap<String, JsonValue>) -> Self {
        if ["r", "g", "b"].iter().all(|key| map.contains_key(*key)) {
            return Color::from_record(map).map_or(Self::Null, Self::Color);
        }
        if map.contains_key("fileID") {
            return ObjectRef::from_record(map).map_or(Self::Null, Self::Reference);
        }
        Self::Null
    }

    /// Value for a field that links to another asset (icon, profiles, prefabs).
    ///
    /// Only an object with a string `guid` produces a link; it always gets
    /// reference type 2 and the main-object file id unless `fileID` is given.
    pub fn asset_link(value: Option<&JsonValue>) -> Self {
        let Some(JsonValue::Object(map)) = value else {
            return Self::Null;
        };
        let Some(JsonValue::String(guid)) = map.get("guid") else {
            return Self::Null;
        };
        let file_id = match map.get("fileID") {
            Some(id) => id.as_i64(),
            None => Some(MAIN_OBJECT_FILE_ID),
        };
        match file_id {
            Some(file_id) => Self::Reference(ObjectRef::external(
                file_id,
                guid.clone(),
                ASSET_REFERENCE_TYPE,
            )),
            None => Self::Null,
        }
    }

    /// Parse a `KEY=VALUE` style scalar typed on the command line.
    ///
    /// Numbers are only taken when the text is already in the form they print
    /// back as, so `007`, `+5` or `1e3` stay text. `{...}`/`[...]` JSON goes
    /// through [`FieldValue::from_json`], everything else is kept as text.
    pub fn parse_scalar(text: &str) -> Self {
        if let Some(number) = parse_canonical_number(text) {
            return number;
        }
        if (text.starts_with('{') || text.starts_with('['))
            && let Ok(json) = serde_json::from_str::<JsonValue>(text)
        {
            return Self::from_json(&json);
        }
        Self::String(Cow::Owned(text.to_string()))
    }
}

fn parse_canonical_number(text: &str) -> Option<FieldValue> {
    let value = if let Ok(int) = text.parse::<i64>() {
        FieldValue::Integer(int)
    } else if let Ok(int) = text.parse::<u64>() {
        FieldValue::Unsigned(int)
    } else {
        let float = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
        FieldValue::Float(float)
    };
    (value.to_string() == text).then_some(value)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(NULL_REFERENCE),
            Self::Bool(flag) => f.write_str(if *flag { "1" } else { "0" }),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write_float(f, *v),
            Self::String(text) => f.write_str(text),
            Self::Color(color) => color.fmt(f),
            Self::Reference(reference) => reference.fmt(f),
        }
    }
}
