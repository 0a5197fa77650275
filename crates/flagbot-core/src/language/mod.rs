//! Reaction shortcode → target language.
//!
//! Slack renders country flags as `:flag-fr:` (or a bare `:fr:` for a handful
//! of countries). The embedded ISO-3166 alpha-2 code is looked up in a static
//! country table, the first listed language wins, and its ISO-639-1 code is
//! mapped to a display name.

mod data;

pub use data::{COUNTRIES, LANGUAGES};

const FLAG_PREFIX: &str = "flag-";

/// A country and the languages spoken there, primary first.
#[derive(Clone, Copy, Debug)]
pub struct Country {
    pub code: &'static str,
    pub languages: &'static [&'static str],
}

/// An ISO-639-1 language and its display names, canonical first.
#[derive(Clone, Copy, Debug)]
pub struct Language {
    pub code: &'static str,
    pub names: &'static [&'static str],
}

/// Resolved translation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

/// Pure lookup over a country/language reference dataset.
#[derive(Clone, Copy, Debug)]
pub struct LanguageResolver {
    countries: &'static [Country],
    languages: &'static [Language],
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageResolver {
    pub fn new(countries: &'static [Country], languages: &'static [Language]) -> Self {
        Self {
            countries,
            languages,
        }
    }

    /// Resolver over the bundled dataset.
    pub fn builtin() -> Self {
        Self::new(COUNTRIES, LANGUAGES)
    }

    /// Map a reaction shortcode to a language, or `None` when the reaction is
    /// not a flag of a country with a known primary language.
    pub fn resolve(&self, reaction: &str) -> Option<LanguageInfo> {
        let country_code = country_code_from_reaction(reaction);

        let country = self
            .countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(country_code))?;
        let lang_code = *country.languages.first()?;

        let language = self.languages.iter().find(|l| l.code == lang_code)?;
        let name = *language.names.first()?;

        Some(LanguageInfo {
            code: language.code.to_string(),
            name: name.to_string(),
        })
    }
}

/// Resolve against the bundled dataset.
pub fn resolve(reaction: &str) -> Option<LanguageInfo> {
    LanguageResolver::builtin().resolve(reaction)
}

/// `"flag-fr"` → `"fr"`, `" jp "` → `"jp"`.
fn country_code_from_reaction(reaction: &str) -> &str {
    let reaction = reaction.trim();
    reaction.strip_prefix(FLAG_PREFIX).unwrap_or(reaction)
}
