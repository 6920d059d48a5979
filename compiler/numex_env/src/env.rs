// Evaluation environment for numex.
// A flat map from variable name to binding; there are no scopes.

use std::collections::hash_map::{self, HashMap};

use numex_value::Value;
use thiserror::Error;

/// What a name is bound to.
///
/// Only [`Binding::Value`] can be used in arithmetic. The other variants
/// let callers load loosely typed data and get a typed error at the first
/// reference instead of at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Value(Value),
    Text(String),
    Bool(bool),
    Null,
}

impl Binding {
    pub fn type_name(&self) -> &'static str {
        match self {
            Binding::Value(value) => value.type_name(),
            Binding::Text(_) => "String",
            Binding::Bool(_) => "bool",
            Binding::Null => "null",
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Binding::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Binding::Value(value)
    }
}

macro_rules! numeric_binding {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Binding {
                fn from(value: $ty) -> Self {
                    Binding::Value(Value::from(value))
                }
            }
        )*
    };
}

numeric_binding!(f64, f32, Vec<f64>, Vec<f32>);

impl From<&str> for Binding {
    fn from(text: &str) -> Self {
        Binding::Text(text.to_string())
    }
}

impl From<String> for Binding {
    fn from(text: String) -> Self {
        Binding::Text(text)
    }
}

impl From<bool> for Binding {
    fn from(flag: bool) -> Self {
        Binding::Bool(flag)
    }
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid environment JSON: {0}")]
    Json(String),

    #[error("environment JSON must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unsupported JSON value for key '{key}': {reason}")]
    UnsupportedValue { key: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    bindings: HashMap<String, Binding>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, returning the previous binding if there was one.
    pub fn set(&mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Option<Binding> {
        self.bindings.insert(name.into(), binding.into())
    }

    /// Builder-style [`Env::set`].
    pub fn with(mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Self {
        self.set(name, binding);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Binding> {
        self.bindings.iter()
    }
}

impl<K: Into<String>, B: Into<Binding>> FromIterator<(K, B)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, B)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, binding)| (name.into(), binding.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = (&'a String, &'a Binding);
    type IntoIter = hash_map::Iter<'a, String, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::{Binding, Env, EnvError};
    use serde_json::Value as Json;

    fn kind(json: &Json) -> &'static str {
        match json {
            Json::Null => "null",
            Json::Bool(_) => "a boolean",
            Json::Number(_) => "a number",
            Json::String(_) => "a string",
            Json::Array(_) => "an array",
            Json::Object(_) => "an object",
        }
    }

    fn binding(key: &str, json: Json) -> Result<Binding, EnvError> {
        let unsupported = |reason: String| EnvError::UnsupportedValue {
            key: key.to_string(),
            reason,
        };
        match json {
            Json::Null => Ok(Binding::Null),
            Json::Bool(flag) => Ok(Binding::Bool(flag)),
            Json::String(text) => Ok(Binding::Text(text)),
            Json::Number(n) => n
                .as_f64()
                .map(Binding::from)
                .ok_or_else(|| unsupported(format!("{n} is not representable as f64"))),
            Json::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_f64().ok_or_else(|| {
                        unsupported(format!("element {i} is {}, expected a number", kind(item)))
                    })
                })
                .collect::<Result<Vec<f64>, _>>()
                .map(Binding::from),
            Json::Object(_) => Err(unsupported("nested objects are not supported".to_string())),
        }
    }

    impl Env {
        /// Loads bindings from a JSON object. Numbers become 64-bit scalars
        /// and arrays of numbers become 64-bit vectors.
        ///
        /// ```
        /// use numex_env::{Binding, Env};
        ///
        /// let env = Env::from_json(r#"{"aa": [10, 20, 30], "c": 2.5}"#).unwrap();
        /// assert_eq!(env.get("c"), Some(&Binding::from(2.5)));
        /// ```
        pub fn from_json(source: &str) -> Result<Env, EnvError> {
            let parsed: Json =
                serde_json::from_str(source).map_err(|err| EnvError::Json(err.to_string()))?;
            match parsed {
                Json::Object(map) => map
                    .into_iter()
                    .map(|(key, value)| binding(&key, value).map(|b| (key, b)))
                    .collect(),
                other => Err(EnvError::NotAnObject { found: kind(&other) }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut env = Env::new();
        assert!(env.is_empty());
        assert_eq!(env.set("aa", vec![10.0, 20.0, 30.0]), None);
        env.set("c", 3.0f32);
        env.set("label", "hello");

        assert_eq!(env.len(), 3);
        assert!(env.contains("aa"));
        assert_eq!(
            env.get("aa").and_then(Binding::as_value),
            Some(&Value::Vector64(vec![10.0, 20.0, 30.0]))
        );
        assert_eq!(env.get("c").map(Binding::type_name), Some("f32"));
        assert_eq!(env.get("label").map(Binding::type_name), Some("String"));
        assert_eq!(env.get("missing"), None);
    }

    #[test]
    fn test_rebinding_returns_previous() {
        let mut env = Env::new().with("x", 1.0);
        assert_eq!(env.set("x", true), Some(Binding::from(1.0)));
        assert_eq!(env.remove("x"), Some(Binding::Bool(true)));
        assert!(env.is_empty());
    }

    #[test]
    fn test_collect_from_pairs() {
        let env: Env = [("X", vec![-1.0, 3.0, -2.0]), ("Y", vec![0.0, -1.0, 1.0])]
            .into_iter()
            .collect();
        assert_eq!(env.len(), 2);
        let mut names: Vec<&String> = env.iter().map(|(name, _)| name).collect();
        names.sort();
        assert_eq!(names, ["X", "Y"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let env = Env::from_json(
            r#"{"aa": [10, 20.5], "c": 2, "name": "x", "flag": false, "nothing": null}"#,
        )
        .unwrap();
        assert_eq!(env.get("aa"), Some(&Binding::from(vec![10.0, 20.5])));
        assert_eq!(env.get("c"), Some(&Binding::from(2.0)));
        assert_eq!(env.get("name"), Some(&Binding::Text("x".into())));
        assert_eq!(env.get("flag"), Some(&Binding::Bool(false)));
        assert_eq!(env.get("nothing"), Some(&Binding::Null));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(matches!(
            Env::from_json("[1, 2]"),
            Err(EnvError::NotAnObject { found: "an array" })
        ));
        let err = Env::from_json(r#"{"v": [1, "two"]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported JSON value for key 'v': element 1 is a string, expected a number"
        );
        assert!(matches!(Env::from_json("{"), Err(EnvError::Json(_))));
    }
}
