//! Token registry: the resolved, insertion-ordered token set.
//!
//! The registry is the single cross-token data structure in the pipeline.
//! It is built once from parsed source files, resolves `{dotted.path}`
//! references, and is immutable afterwards. Build order of the export
//! follows the registry's insertion order exactly (light files first, then
//! dark files, tokens within a file in source key order).

pub mod types;

use indexmap::IndexMap;

pub use types::{reference_target, RawToken, ResolvedToken, Theme};

/// Registry key: a token is identified by its theme and dotted path.
/// The same dotted path may exist in both Light and Dark.
type TokenKey = (Theme, String);

/// The full resolved token set.
///
/// Immutable after construction - use `TokenSetBuilder` to create one.
#[derive(Debug, Default)]
pub struct TokenSet {
    tokens: IndexMap<TokenKey, ResolvedToken>,
    /// Dotted paths that were defined more than once within a theme.
    /// The later definition won; these are surfaced by validation.
    shadowed: Vec<(Theme, String)>,
}

impl TokenSet {
    /// Look up a token by theme and dotted path.
    pub fn get(&self, theme: Theme, dotted_path: &str) -> Option<&ResolvedToken> {
        self.tokens.get(&(theme, dotted_path.to_string()))
    }

    /// Iterate tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedToken> {
        self.tokens.values()
    }

    /// Iterate tokens of one theme, in insertion order.
    pub fn iter_theme(&self, theme: Theme) -> impl Iterator<Item = &ResolvedToken> + '_ {
        self.tokens.values().filter(move |t| t.theme == theme)
    }

    /// Dotted paths that were defined more than once within a theme.
    pub fn shadowed(&self) -> &[(Theme, String)] {
        &self.shadowed
    }

    /// Total number of tokens across both themes.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Builder for constructing a `TokenSet`.
///
/// Collects raw tokens in file order, then resolves references in `build()`.
#[derive(Debug, Default)]
pub struct TokenSetBuilder {
    raw: IndexMap<TokenKey, RawToken>,
    shadowed: Vec<(Theme, String)>,
}

impl TokenSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed token. A token with the same theme and dotted path as
    /// an earlier one replaces it; the shadowed path is recorded.
    pub fn add_token(&mut self, token: RawToken) -> &mut Self {
        let key = (token.theme, token.dotted_path());
        if self.raw.contains_key(&key) {
            self.shadowed.push(key.clone());
        }
        self.raw.insert(key, token);
        self
    }

    /// Add all tokens parsed from one file.
    pub fn add_tokens(&mut self, tokens: impl IntoIterator<Item = RawToken>) -> &mut Self {
        for token in tokens {
            self.add_token(token);
        }
        self
    }

    /// Resolve references and freeze the set.
    ///
    /// References resolve at most one level: a reference to a token whose own
    /// value is another reference yields that literal `{…}` string. Dark
    /// tokens resolve against the dark set first, then fall back to light.
    /// A reference with no target keeps its original string; that is not an
    /// error here (validation reports it as a warning).
    pub fn build(self) -> TokenSet {
        let mut tokens = IndexMap::with_capacity(self.raw.len());

        for (key, token) in &self.raw {
            let resolved_value = match reference_target(&token.value) {
                Some(target) => self
                    .lookup_raw(token.theme, target)
                    .map(|referenced| referenced.value.clone())
                    .unwrap_or_else(|| token.value.clone()),
                None => token.value.clone(),
            };

            tokens.insert(
                key.clone(),
                ResolvedToken {
                    path: token.path.clone(),
                    token_type: token.token_type.clone(),
                    raw_value: token.value.clone(),
                    resolved_value,
                    source: token.source.clone(),
                    theme: token.theme,
                },
            );
        }

        TokenSet {
            tokens,
            shadowed: self.shadowed,
        }
    }

    fn lookup_raw(&self, theme: Theme, dotted_path: &str) -> Option<&RawToken> {
        self.raw
            .get(&(theme, dotted_path.to_string()))
            .or_else(|| self.raw.get(&(Theme::Light, dotted_path.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_json::Value;
    use std::path::PathBuf;

    fn raw(theme: Theme, dotted: &str, token_type: &str, value: Value) -> RawToken {
        RawToken {
            path: dotted.split('.').map(|s| s.to_string()).collect(),
            token_type: token_type.to_string(),
            value,
            source: PathBuf::from(match theme {
                Theme::Light => "tokens/base.json",
                Theme::Dark => "tokens/base.dark.json",
            }),
            theme,
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "z.last", "color", json!("#000000")));
        builder.add_token(raw(Theme::Light, "a.first", "color", json!("#FFFFFF")));
        let set = builder.build();

        let paths: Vec<String> = set.iter().map(|t| t.dotted_path()).collect();
        assert_eq!(paths, vec!["z.last", "a.first"]);
    }

    #[test]
    fn test_reference_resolves_to_raw_value() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "color.base", "color", json!("#FF0000")));
        builder.add_token(raw(Theme::Light, "color.primary", "color", json!("{color.base}")));
        let set = builder.build();

        let primary = set.get(Theme::Light, "color.primary").unwrap();
        assert_eq!(primary.raw_value, json!("{color.base}"));
        assert_eq!(primary.resolved_value, json!("#FF0000"));
    }

    #[test]
    fn test_reference_resolves_one_level_only() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "a", "color", json!("#112233")));
        builder.add_token(raw(Theme::Light, "b", "color", json!("{a}")));
        builder.add_token(raw(Theme::Light, "c", "color", json!("{b}")));
        let set = builder.build();

        // c resolves to b's raw value, which is itself a reference string
        let c = set.get(Theme::Light, "c").unwrap();
        assert_eq!(c.resolved_value, json!("{a}"));
        assert!(c.is_unresolved_reference());
    }

    #[test]
    fn test_unresolved_reference_passes_through() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "x", "color", json!("{does.not.exist}")));
        let set = builder.build();

        let x = set.get(Theme::Light, "x").unwrap();
        assert_eq!(x.resolved_value, json!("{does.not.exist}"));
        assert!(x.is_unresolved_reference());
    }

    #[test]
    fn test_dark_reference_prefers_dark_target() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "color.base", "color", json!("#FFFFFF")));
        builder.add_token(raw(Theme::Dark, "color.base", "color", json!("#000000")));
        builder.add_token(raw(Theme::Dark, "color.surface", "color", json!("{color.base}")));
        let set = builder.build();

        let surface = set.get(Theme::Dark, "color.surface").unwrap();
        assert_eq!(surface.resolved_value, json!("#000000"));
    }

    #[test]
    fn test_dark_reference_falls_back_to_light() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "spacing.md", "dimension", json!("16px")));
        builder.add_token(raw(Theme::Dark, "spacing.gap", "dimension", json!("{spacing.md}")));
        let set = builder.build();

        let gap = set.get(Theme::Dark, "spacing.gap").unwrap();
        assert_eq!(gap.resolved_value, json!("16px"));
    }

    #[test]
    fn test_duplicate_path_last_wins_and_is_recorded() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "color.base", "color", json!("#111111")));
        builder.add_token(raw(Theme::Light, "color.base", "color", json!("#222222")));
        let set = builder.build();

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(Theme::Light, "color.base").unwrap().raw_value,
            json!("#222222")
        );
        assert_eq!(set.shadowed(), &[(Theme::Light, "color.base".to_string())]);
    }

    #[test]
    fn test_same_path_in_both_themes_coexists() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "color.bg", "color", json!("#FFFFFF")));
        builder.add_token(raw(Theme::Dark, "color.bg", "color", json!("#000000")));
        let set = builder.build();

        assert_eq!(set.len(), 2);
        assert!(set.shadowed().is_empty());
    }

    #[test]
    fn test_iter_theme_filters() {
        let mut builder = TokenSetBuilder::new();
        builder.add_token(raw(Theme::Light, "a", "color", json!("#FFFFFF")));
        builder.add_token(raw(Theme::Dark, "b", "color", json!("#000000")));
        builder.add_token(raw(Theme::Light, "c", "color", json!("#888888")));
        let set = builder.build();

        let light: Vec<String> = set
            .iter_theme(Theme::Light)
            .map(|t| t.dotted_path())
            .collect();
        assert_eq!(light, vec!["a", "c"]);
    }
}
