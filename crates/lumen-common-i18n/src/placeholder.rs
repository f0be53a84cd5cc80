// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `{name}` placeholder scanning and substitution.
//!
//! A placeholder is a literal `{`, one or more Unicode word characters
//! (letters, digits, underscore), and a literal `}`. Anything else, including
//! `{}`, `{ name }` or unbalanced braces, is ordinary text.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Params;

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is a valid regex"));

/// Replace every `{name}` in `template` whose name is present in `params`.
///
/// Placeholders without a value are left verbatim. The template is scanned
/// once from left to right; substituted values are never scanned again, so a
/// value containing `{other}` is emitted as-is.
///
/// Returns [`Cow::Borrowed`] when no placeholder was replaced.
///
/// # Example
///
/// ```
/// use lumen_common_i18n::{substitute, Params};
///
/// let params = Params::new().with("name", "Ava");
/// assert_eq!(substitute("Hi {name}, {unknown}", &params), "Hi Ava, {unknown}");
/// ```
pub fn substitute<'a>(template: &'a str, params: &Params) -> Cow<'a, str> {
	if params.is_empty() {
		return Cow::Borrowed(template);
	}

	let mut result: Option<String> = None;
	let mut last_end = 0;

	for caps in PLACEHOLDER.captures_iter(template) {
		let (Some(span), Some(name)) = (caps.get(0), caps.get(1)) else {
			continue;
		};

		let Some(value) = params.get(name.as_str()) else {
			tracing::trace!(
				placeholder = name.as_str(),
				"no value for placeholder, leaving verbatim"
			);
			continue;
		};

		let out = result.get_or_insert_with(|| String::with_capacity(template.len()));
		out.push_str(&template[last_end..span.start()]);
		out.push_str(value);
		last_end = span.end();
	}

	match result {
		Some(mut out) => {
			out.push_str(&template[last_end..]);
			Cow::Owned(out)
		}
		None => Cow::Borrowed(template),
	}
}

/// Names of the placeholders in `template`, in order of appearance.
///
/// Repeated placeholders are yielded once per occurrence.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
	PLACEHOLDER
		.captures_iter(template)
		.filter_map(|caps| caps.get(1))
		.map(|m| m.as_str())
}
