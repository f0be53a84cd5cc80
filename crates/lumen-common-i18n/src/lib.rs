// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message lookup and placeholder substitution for Lumen.
//!
//! This crate resolves message templates from an in-memory translation table
//! and fills in `{name}` placeholders. It never loads files itself: the host
//! application builds a [`Messages`] table (by hand or through serde) and
//! shares it read-only.
//!
//! Lookups never fail:
//!
//! - an unknown locale or key falls back to the key itself
//! - a placeholder without a value is left verbatim
//! - an unknown distribution falls back to the identifier as given
//!
//! # Example
//!
//! ```
//! use lumen_common_i18n::{Messages, Params, Translator};
//!
//! let translator: Translator = Messages::new()
//! 	.with_locale("en", [("greeting", "Hello, {name}!")])
//! 	.with_locale("zh", [("ubuntu", "乌班图")])
//! 	.into();
//!
//! let params = Params::new().with("name", "Ava");
//! assert_eq!(translator.translate("en", "greeting", &params), "Hello, Ava!");
//! assert_eq!(translator.translate("fr", "greeting", &params), "greeting");
//! assert_eq!(translator.translate("en", "greeting", &Params::new()), "Hello, {name}!");
//!
//! assert_eq!(translator.localize_distribution("zh", "Ubuntu"), "乌班图");
//! assert_eq!(translator.localize_distribution("en", "Ubuntu"), "Ubuntu");
//! ```

mod catalog;
mod check;
mod params;
mod placeholder;
mod translator;

pub use catalog::Messages;
pub use check::{check_placeholders, CheckError, PlaceholderMismatch};
pub use params::Params;
pub use placeholder::{placeholders, substitute};
pub use translator::{localize_distribution, translate, Translator};
