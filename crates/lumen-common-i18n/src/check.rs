// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Placeholder consistency checks across locales.
//!
//! Intended for the owner of a [`Messages`] table (tests, CI, startup
//! validation). Translation itself never fails, so a template that drops or
//! renames a placeholder only shows up as a visible `{name}` or a missing
//! value at runtime. This check catches that before shipping.

use std::collections::BTreeSet;
use std::fmt;

use crate::{placeholders, Messages};

/// A key whose placeholders differ from the reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatch {
	pub locale: String,
	pub key: String,
	/// Present in the reference template, absent here.
	pub missing: Vec<String>,
	/// Present here, absent in the reference template.
	pub extra: Vec<String>,
}

impl fmt::Display for PlaceholderMismatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.locale, self.key)?;
		if !self.missing.is_empty() {
			write!(f, " missing {{{}}}", self.missing.join("}, {"))?;
		}
		if !self.extra.is_empty() {
			write!(f, " extra {{{}}}", self.extra.join("}, {"))?;
		}
		Ok(())
	}
}

/// Errors reported by [`check_placeholders`].
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
	#[error("reference locale '{locale}' is not in the translation table")]
	UnknownReferenceLocale { locale: String },

	#[error("{} template(s) disagree with the reference locale: {}", .0.len(), join_mismatches(.0))]
	Mismatches(Vec<PlaceholderMismatch>),
}

fn join_mismatches(mismatches: &[PlaceholderMismatch]) -> String {
	mismatches
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

/// Verify that every locale uses the same placeholder names as `reference_locale`.
///
/// Only keys present in both locales are compared. A key missing from a
/// locale is not an error since lookups fall back to the key. Mismatches are
/// sorted by locale, then key.
///
/// # Example
///
/// ```
/// use lumen_common_i18n::{check_placeholders, CheckError, Messages};
///
/// let messages = Messages::new()
/// 	.with_locale("en", [("greeting", "Hello, {name}!")])
/// 	.with_locale("es", [("greeting", "¡Hola, {nombre}!")]);
///
/// let Err(CheckError::Mismatches(found)) = check_placeholders(&messages, "en") else {
/// 	panic!("expected a mismatch");
/// };
/// assert_eq!(found[0].missing, vec!["name"]);
/// assert_eq!(found[0].extra, vec!["nombre"]);
/// ```
pub fn check_placeholders(messages: &Messages, reference_locale: &str) -> Result<(), CheckError> {
	if !messages.contains_locale(reference_locale) {
		return Err(CheckError::UnknownReferenceLocale {
			locale: reference_locale.to_string(),
		});
	}

	let reference = messages.entries(reference_locale);
	let mut mismatches = Vec::new();

	for locale in messages.locales().filter(|l| *l != reference_locale) {
		for (key, template) in messages.entries(locale) {
			let Some(reference_template) = reference.get(key) else {
				continue;
			};

			let expected: BTreeSet<&str> = placeholders(reference_template).collect();
			let actual: BTreeSet<&str> = placeholders(template).collect();
			if expected == actual {
				continue;
			}

			mismatches.push(PlaceholderMismatch {
				locale: locale.to_string(),
				key: key.to_string(),
				missing: expected.difference(&actual).map(|s| s.to_string()).collect(),
				extra: actual.difference(&expected).map(|s| s.to_string()).collect(),
			});
		}
	}

	if mismatches.is_empty() {
		return Ok(());
	}

	tracing::warn!(
		reference = %reference_locale,
		count = mismatches.len(),
		"placeholder mismatches in translation table"
	);
	Err(CheckError::Mismatches(mismatches))
}
