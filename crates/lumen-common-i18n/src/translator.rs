// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message translation and distribution name localization.

use std::sync::Arc;

use crate::{substitute, Messages, Params};

/// Translate `key` for `locale` and fill in its placeholders.
///
/// Falls back to `key` itself when the locale is unknown or has no entry for
/// the key. The fallback is still scanned for placeholders, so a key that
/// happens to contain `{name}` is substituted like any template.
///
/// # Arguments
///
/// * `messages` - The translation table
/// * `locale` - The locale code (e.g., "en", "zh")
/// * `key` - The message key (e.g., "install.done")
/// * `params` - Placeholder values; pass an empty [`Params`] when there are none
///
/// # Example
///
/// ```
/// use lumen_common_i18n::{translate, Messages, Params};
///
/// let messages = Messages::new().with_locale("en", [("greeting", "Hello, {name}!")]);
/// let params = Params::new().with("name", "Ava");
///
/// assert_eq!(translate(&messages, "en", "greeting", &params), "Hello, Ava!");
/// assert_eq!(translate(&messages, "fr", "greeting", &params), "greeting");
/// ```
pub fn translate(messages: &Messages, locale: &str, key: &str, params: &Params) -> String {
	let template = match messages.get(locale, key) {
		Some(template) => template,
		None => {
			tracing::debug!(locale = %locale, key = %key, "translation not found, using key");
			key
		}
	};

	substitute(template, params).into_owned()
}

/// Localized display name for a distribution identifier.
///
/// The identifier is lower-cased to form the lookup key. When there is no
/// entry, the identifier is returned exactly as given.
///
/// # Example
///
/// ```
/// use lumen_common_i18n::{localize_distribution, Messages};
///
/// let messages = Messages::new().with_locale("zh", [("ubuntu", "乌班图")]);
///
/// assert_eq!(localize_distribution(&messages, "zh", "Ubuntu"), "乌班图");
/// assert_eq!(localize_distribution(&messages, "zh", "Debian"), "Debian");
/// ```
pub fn localize_distribution(messages: &Messages, locale: &str, distribution: &str) -> String {
	let key = distribution.to_lowercase();

	match messages.get(locale, &key) {
		Some(name) => name.to_string(),
		None => {
			tracing::debug!(
				locale = %locale,
				distribution = %distribution,
				"no localized distribution name, using identifier"
			);
			distribution.to_string()
		}
	}
}

/// Shared, read-only handle to a translation table.
///
/// Cloning is cheap and clones read the same table. To pick up new
/// translations, build a new [`Messages`] and a new `Translator` from it;
/// translators created earlier keep the table they were built with.
#[derive(Debug, Clone, Default)]
pub struct Translator {
	messages: Arc<Messages>,
}

impl Translator {
	pub fn new(messages: Arc<Messages>) -> Self {
		Self { messages }
	}

	/// The table this translator reads from.
	pub fn messages(&self) -> &Messages {
		&self.messages
	}

	/// See [`translate`].
	pub fn translate(&self, locale: &str, key: &str, params: &Params) -> String {
		translate(&self.messages, locale, key, params)
	}

	/// See [`localize_distribution`].
	pub fn localize_distribution(&self, locale: &str, distribution: &str) -> String {
		localize_distribution(&self.messages, locale, distribution)
	}
}

impl From<Messages> for Translator {
	fn from(messages: Messages) -> Self {
		Self::new(Arc::new(messages))
	}
}

impl From<Arc<Messages>> for Translator {
	fn from(messages: Arc<Messages>) -> Self {
		Self::new(messages)
	}
}
