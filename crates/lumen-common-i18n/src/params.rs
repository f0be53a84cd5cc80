// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Named values for placeholder substitution.

use std::collections::HashMap;
use std::fmt::Display;

/// Placeholder values keyed by name.
///
/// Values are rendered with [`Display`] when they are inserted, so any type
/// with a canonical string form can be passed.
///
/// # Example
///
/// ```
/// use lumen_common_i18n::Params;
///
/// let params = Params::new().with("name", "Ava").with("count", 3);
/// assert_eq!(params.get("count"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Params {
	values: HashMap<String, String>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`Params::insert`].
	pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
		self.insert(name, value);
		self
	}

	/// Set the value for `name`, replacing any earlier value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
		self.values.insert(name.into(), value.to_string());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// A scalar placeholder value as it appears in a serialized parameter map.
///
/// Deserialized values go through [`Display`] like [`Params::insert`] does,
/// so `{ "count": 3 }` and `{ "count": "3" }` produce the same parameters.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum ParamValue {
	Text(String),
	Bool(bool),
	Int(i64),
	UInt(u64),
	Float(f64),
}

#[cfg(feature = "serde")]
impl Display for ParamValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ParamValue::Text(value) => Display::fmt(value, f),
			ParamValue::Bool(value) => Display::fmt(value, f),
			ParamValue::Int(value) => Display::fmt(value, f),
			ParamValue::UInt(value) => Display::fmt(value, f),
			ParamValue::Float(value) => Display::fmt(value, f),
		}
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Params {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let values =
			<HashMap<String, ParamValue> as serde::Deserialize>::deserialize(deserializer)?;
		Ok(values.into_iter().collect())
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut params = Params::new();
		for (name, value) in iter {
			params.insert(name, value);
		}
		params
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: Display,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}
