// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;
use std::thread;

use lumen_common_i18n::{check_placeholders, Messages, Params, Translator};

fn greeting_table() -> Messages {
	Messages::new().with_locale("en", [("greeting", "Hello, {name}!")])
}

#[test]
fn test_greeting_scenario() {
	let translator = Translator::from(greeting_table());
	let ava = Params::new().with("name", "Ava");

	assert_eq!(translator.translate("en", "greeting", &ava), "Hello, Ava!");
	assert_eq!(translator.translate("fr", "greeting", &ava), "greeting");
	assert_eq!(
		translator.translate("en", "greeting", &Params::new()),
		"Hello, {name}!"
	);
}

#[test]
fn test_distribution_scenario() {
	let translator = Translator::from(
		Messages::new()
			.with_locale("zh", [("ubuntu", "乌班图"), ("debian", "德比安")])
			.with_locale("en", [("ubuntu", "Ubuntu Linux")]),
	);

	assert_eq!(translator.localize_distribution("zh", "Ubuntu"), "乌班图");
	assert_eq!(translator.localize_distribution("zh", "DEBIAN"), "德比安");
	assert_eq!(translator.localize_distribution("en", "Ubuntu"), "Ubuntu Linux");
	assert_eq!(translator.localize_distribution("en", "Fedora"), "Fedora");
	assert_eq!(translator.localize_distribution("ja", "Ubuntu"), "Ubuntu");
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_from_host_config() {
	let json = r#"{
		"en": { "greeting": "Hello, {name}!", "blank": "" },
		"zh": { "ubuntu": "乌班图" }
	}"#;
	let messages: Messages = serde_json::from_str(json).unwrap();

	assert_eq!(messages.get("en", "blank"), Some(""));
	assert_eq!(messages.get("zh", "ubuntu"), Some("乌班图"));

	let translator = Translator::from(messages);
	let params: Params = serde_json::from_str(r#"{ "name": "Ava" }"#).unwrap();
	assert_eq!(translator.translate("en", "greeting", &params), "Hello, Ava!");
	assert_eq!(translator.translate("en", "blank", &params), "");
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_roundtrip() {
	let messages = greeting_table().with_locale("zh", [("greeting", "你好，{name}！")]);
	let json = serde_json::to_string(&messages).unwrap();
	let back: Messages = serde_json::from_str(&json).unwrap();
	assert_eq!(back, messages);
}

#[test]
fn test_concurrent_readers_share_table() {
	let translator = Translator::new(Arc::new(greeting_table()));

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let translator = translator.clone();
			thread::spawn(move || {
				let params = Params::new().with("name", format!("reader-{i}"));
				translator.translate("en", "greeting", &params)
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().unwrap(), format!("Hello, reader-{i}!"));
	}
}

#[test]
fn test_reload_builds_new_translator() {
	let old = Translator::from(greeting_table());
	let reloaded =
		Translator::from(Messages::new().with_locale("en", [("greeting", "Hi, {name}.")]));
	let params = Params::new().with("name", "Ava");

	assert_eq!(old.translate("en", "greeting", &params), "Hello, Ava!");
	assert_eq!(reloaded.translate("en", "greeting", &params), "Hi, Ava.");
}

#[test]
fn test_check_before_serving() {
	let messages = greeting_table().with_locale("zh", [("greeting", "你好，{name}！")]);
	assert!(check_placeholders(&messages, "en").is_ok());
}
