//! Internationalization (i18n) support for `llmbench-ui`.
//!
//! Messages are Fluent files embedded at compile time with `rust-embed`, selected with
//! `i18n-embed` and looked up through the `t!` macro (a thin wrapper over `fl!`, which
//! checks keys against the fallback locale at compile time).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/llmbench_ui.ftl   (fallback/reference)
//!   pt-BR/llmbench_ui.ftl
//! ```
//!
//! Call `init()` once at app start; it is idempotent.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("page-title")
///     t!("some-key", name = "value")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "llmbench_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "selected languages"),
            Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            warn!(tag, "ignoring invalid language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language the loader currently resolves messages in, e.g. `pt-BR` after `init()` picked
/// it from the system locale. Seeds the locale selector and the shared language signal.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Label for the benchmark navigation link. Platform crates call this rather than
/// `t!`, since `fl!` resolves keys against the calling crate's `i18n.toml`.
pub fn tr_nav_benchmark() -> String {
    crate::t!("nav-benchmark")
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_file_is_named_after_domain() {
        let path = format!("{FALLBACK_LANGUAGE}/{DOMAIN}.ftl");
        assert!(Localizations::get(&path).is_some(), "missing {path}");
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
    }

    #[test]
    fn embedded_languages() {
        assert_eq!(available_languages(), vec!["en-US", "pt-BR"]);
    }

    #[test]
    fn switching_language_changes_lookups() {
        set_language("pt-BR").unwrap();
        assert_eq!(current_language(), "pt-BR");
        assert_eq!(fl!(&*LOADER, "col-time"), "Tempo");
        set_language("en-US").unwrap();
        assert_eq!(current_language(), "en-US");
        assert_eq!(fl!(&*LOADER, "col-time"), "Time");
    }

    #[test]
    fn current_language_is_selectable() {
        init();
        assert!(available_languages().contains(&current_language()));
    }

    #[test]
    fn invalid_tag_is_ignored() {
        assert!(set_language("not a tag!").is_ok());
    }
}
