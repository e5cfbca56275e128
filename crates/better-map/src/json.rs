use core::fmt::{self, Display};
use core::marker::PhantomData;

use serde::de::{Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::prelude_internal::*;

impl<K: Display, V: Serialize> BetterMap<K, V> {
    /// Flat record keyed by each key's `Display` output, in insertion order.
    ///
    /// Distinct keys that display the same (`1` and `"1"`) collide: the later value
    /// overwrites the earlier one, which keeps its position.
    pub fn json(&self) -> Result<JsonMap<String, JsonValue>, Error> {
        let mut record = JsonMap::with_capacity(self.len());
        for (k, v) in self.iter() {
            record.insert(k.to_string(), serde_json::to_value(v)?);
        }
        Ok(record)
    }

    pub fn to_json(&self) -> Result<JsonValue, Error> {
        self.json().map(JsonValue::Object)
    }
}

impl<V: DeserializeOwned> BetterMap<String, V> {
    /// Builds a map from anything that serializes to a flat object, such as a struct
    /// or a `serde_json::Map`, keeping its field order.
    pub fn from_record<R: Serialize + ?Sized>(record: &R) -> Result<Self, Error> {
        let object = match serde_json::to_value(record)? {
            JsonValue::Object(object) => object,
            other => {
                return Err(Error::NotARecord {
                    found: json_kind(&other),
                });
            }
        };
        let mut map = BetterMap::with_config(Config {
            capacity: object.len(),
            ..Config::default()
        });
        for (key, value) in object {
            map.set(key, serde_json::from_value(value)?);
        }
        debug!(len = map.len(), "built map from record");
        Ok(map)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl<K: Display, V: Serialize> Serialize for BetterMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().map_err(S::Error::custom)?.serialize(serializer)
    }
}

struct BetterMapVisitor<K, V>(PhantomData<fn() -> BetterMap<K, V>>);

impl<'de, K, V> Visitor<'de> for BetterMapVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = BetterMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BetterMap::with_config(Config {
            capacity: access.size_hint().unwrap_or(0),
            ..Config::default()
        });
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for BetterMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BetterMapVisitor(PhantomData))
    }
}
