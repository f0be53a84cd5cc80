// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory translation table.

use std::collections::{BTreeMap, HashMap};

/// Translation table mapping locale -> message key -> template.
///
/// The table is populated by its owner (typically once at startup) and is
/// read-only from the point of view of [`Translator`](crate::Translator).
/// Templates may contain `{name}` placeholders.
///
/// Lookups report presence, not truthiness: an empty template is a valid
/// translation and is returned as `Some("")`.
///
/// # Example
///
/// ```
/// use lumen_common_i18n::Messages;
///
/// let messages = Messages::new()
/// 	.with_locale("en", [("greeting", "Hello, {name}!")])
/// 	.with_locale("es", [("greeting", "¡Hola, {name}!")]);
///
/// assert_eq!(messages.get("es", "greeting"), Some("¡Hola, {name}!"));
/// assert_eq!(messages.get("fr", "greeting"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Messages {
	locales: HashMap<String, HashMap<String, String>>,
}

impl Messages {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`Messages::extend_locale`].
	pub fn with_locale<L, I, K, V>(mut self, locale: L, entries: I) -> Self
	where
		L: Into<String>,
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.extend_locale(locale, entries);
		self
	}

	/// Add or overwrite a single template.
	///
	/// Returns the previous template for this locale and key, if any.
	pub fn insert(
		&mut self,
		locale: impl Into<String>,
		key: impl Into<String>,
		template: impl Into<String>,
	) -> Option<String> {
		self
			.locales
			.entry(locale.into())
			.or_default()
			.insert(key.into(), template.into())
	}

	/// Add or overwrite many templates under one locale.
	///
	/// The locale is registered even when `entries` is empty.
	pub fn extend_locale<L, I, K, V>(&mut self, locale: L, entries: I)
	where
		L: Into<String>,
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let table = self.locales.entry(locale.into()).or_default();
		table.extend(
			entries
				.into_iter()
				.map(|(key, template)| (key.into(), template.into())),
		);
	}

	/// Look up the template for `key` under `locale`.
	///
	/// Returns `None` when the locale is unknown or the key is absent under it.
	pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
		self
			.locales
			.get(locale)
			.and_then(|table| table.get(key))
			.map(String::as_str)
	}

	/// Check whether any templates (or an empty entry set) were registered for `locale`.
	pub fn contains_locale(&self, locale: &str) -> bool {
		self.locales.contains_key(locale)
	}

	/// All registered locales, sorted.
	pub fn locales(&self) -> impl Iterator<Item = &str> {
		let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
		locales.sort_unstable();
		locales.into_iter()
	}

	/// Keys and templates registered for `locale`, sorted by key.
	///
	/// Empty when the locale is unknown.
	pub fn entries(&self, locale: &str) -> BTreeMap<&str, &str> {
		self
			.locales
			.get(locale)
			.map(|table| {
				table
					.iter()
					.map(|(key, template)| (key.as_str(), template.as_str()))
					.collect()
			})
			.unwrap_or_default()
	}

	/// Number of registered locales.
	pub fn len(&self) -> usize {
		self.locales.len()
	}

	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}
}

impl<L, K, V> FromIterator<(L, K, V)> for Messages
where
	L: Into<String>,
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (L, K, V)>>(iter: T) -> Self {
		let mut messages = Messages::new();
		for (locale, key, template) in iter {
			messages.insert(locale, key, template);
		}
		messages
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Messages {
		Messages::new()
			.with_locale("en", [("greeting", "Hello, {name}!"), ("ubuntu", "Ubuntu")])
			.with_locale("zh", [("ubuntu", "乌班图")])
	}

	#[test]
	fn test_get_present() {
		let messages = sample();
		assert_eq!(messages.get("en", "greeting"), Some("Hello, {name}!"));
		assert_eq!(messages.get("zh", "ubuntu"), Some("乌班图"));
	}

	#[test]
	fn test_get_missing_locale() {
		assert_eq!(sample().get("fr", "greeting"), None);
	}

	#[test]
	fn test_get_missing_key() {
		assert_eq!(sample().get("zh", "greeting"), None);
	}

	#[test]
	fn test_empty_template_is_present() {
		let mut messages = Messages::new();
		messages.insert("en", "blank", "");
		assert_eq!(messages.get("en", "blank"), Some(""));
	}

	#[test]
	fn test_insert_returns_previous() {
		let mut messages = Messages::new();
		assert_eq!(messages.insert("en", "k", "one"), None);
		assert_eq!(messages.insert("en", "k", "two"), Some("one".to_string()));
		assert_eq!(messages.get("en", "k"), Some("two"));
	}

	#[test]
	fn test_locales_sorted() {
		let messages = sample().with_locale("ar", Vec::<(String, String)>::new());
		let locales: Vec<&str> = messages.locales().collect();
		assert_eq!(locales, vec!["ar", "en", "zh"]);
		assert!(messages.contains_locale("ar"));
		assert_eq!(messages.len(), 3);
	}

	#[test]
	fn test_entries_sorted_by_key() {
		let messages = sample();
		let keys: Vec<&str> = messages.entries("en").into_keys().collect();
		assert_eq!(keys, vec!["greeting", "ubuntu"]);
		assert!(messages.entries("fr").is_empty());
	}

	#[test]
	fn test_from_iter() {
		let messages: Messages = [
			("en", "a", "A"),
			("en", "b", "B"),
			("es", "a", "Á"),
		]
		.into_iter()
		.collect();
		assert_eq!(messages.get("en", "b"), Some("B"));
		assert_eq!(messages.get("es", "a"), Some("Á"));
		assert_eq!(messages.len(), 2);
	}

	#[test]
	fn test_new_is_empty() {
		assert!(Messages::new().is_empty());
		assert_eq!(Messages::new().locales().count(), 0);
	}
}
