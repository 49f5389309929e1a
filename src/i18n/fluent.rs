// SPDX-License-Identifier: MPL-2.0
//! Fluent-based localization over catalogs embedded at build time.
//!
//! Every `.ftl` file under `assets/i18n/` becomes one available locale,
//! named after the file stem. The startup locale is resolved from, in
//! order, the `--lang` flag, the config file, and the OS locale, with
//! `en-US` as the final fallback.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalogs;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for filename in Catalogs::iter() {
            let Some((locale, bundle)) = parse_catalog(filename.as_ref()) else {
                continue;
            };
            available_locales.push(locale.clone());
            bundles.insert(locale, bundle);
        }

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().unwrap());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switch the active locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translate `key` with Fluent arguments, e.g.
    /// `tr_with_args("notification-copied", &[("text", "Rust")])`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Look the key up in the active bundle. Unknown keys yield a
    /// loud `MISSING:` marker instead of an empty string so catalog
    /// gaps show up during review.
    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let resolved = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| {
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                errors.is_empty().then(|| value.to_string())
            });

        resolved.unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

/// Build one bundle from an embedded `.ftl` file. The catalogs ship
/// inside the binary, so a malformed one is a build defect and panics.
fn parse_catalog(filename: &str) -> Option<(LanguageIdentifier, FluentBundle<FluentResource>)> {
    let locale: LanguageIdentifier = filename.strip_suffix(".ftl")?.parse().ok()?;
    let raw = Catalogs::get(filename)?;

    let resource = FluentResource::try_new(String::from_utf8_lossy(raw.data.as_ref()).into_owned())
        .expect("embedded FTL catalog must parse");
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle
        .add_resource(resource)
        .expect("embedded FTL catalog must have unique message ids");

    Some((locale, bundle))
}

/// First available locale among CLI flag, config file, and OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.language.clone(), sys_locale::get_locale()];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
