//! Built-in token tables, one per language family.
//!
//! Tokens are registered once at startup and immutable for the lifetime of a
//! scan. Each token binds a literal to a feature id plus a boundary rule.

use super::boundary::Boundary;

/// A literal token bound to a feature id and a boundary rule.
#[derive(Debug, Clone)]
pub struct ScannerToken {
    pub text: String,
    pub feature_id: String,
    pub boundary: Boundary,
}

impl ScannerToken {
    pub fn new(text: &str, feature_id: &str, boundary: Boundary) -> Self {
        Self {
            text: text.to_string(),
            feature_id: feature_id.to_string(),
            boundary,
        }
    }
}

/// JS-family tokens: identifiers and member chains.
const JS_TOKENS: &[(&str, &str)] = &[
    ("navigator.clipboard", "async-clipboard"),
    ("Promise.any", "promise-any"),
    ("Promise.allSettled", "promise-allsettled"),
    ("structuredClone", "structured-clone"),
    ("Object.hasOwn", "object-hasown"),
    ("Array.fromAsync", "array-fromasync"),
    ("Intl.Segmenter", "intl-segmenter"),
    ("navigator.share", "web-share"),
    ("IntersectionObserver", "intersection-observer"),
    ("ResizeObserver", "resize-observer"),
    ("BroadcastChannel", "broadcastchannel"),
    ("AbortSignal.timeout", "abortsignal-timeout"),
    ("requestIdleCallback", "requestidlecallback"),
    ("OffscreenCanvas", "offscreencanvas"),
    ("scheduler.postTask", "scheduler-posttask"),
    ("URLPattern", "urlpattern"),
];

/// CSS-family tokens: properties and value keywords.
const CSS_TOKENS: &[(&str, &str)] = &[
    ("text-wrap", "text-wrap"),
    ("aspect-ratio", "aspect-ratio"),
    ("container-type", "container-queries"),
    ("container-name", "container-queries"),
    ("backdrop-filter", "backdrop-filter"),
    ("content-visibility", "content-visibility"),
    ("subgrid", "subgrid"),
    ("scrollbar-gutter", "scrollbar-gutter"),
    ("accent-color", "accent-color"),
    ("view-transition-name", "view-transitions"),
    ("overscroll-behavior", "overscroll-behavior"),
];

/// The two token collections consumed by the document scanner.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    pub js: Vec<ScannerToken>,
    pub css: Vec<ScannerToken>,
}

impl TokenRegistry {
    /// The built-in registry matching the bundled feature dataset.
    pub fn builtin() -> Self {
        let js = JS_TOKENS
            .iter()
            .map(|(text, id)| ScannerToken::new(text, id, Boundary::Identifier))
            .collect();

        let mut css: Vec<ScannerToken> = CSS_TOKENS
            .iter()
            .map(|(text, id)| ScannerToken::new(text, id, Boundary::Css))
            .collect();
        // The bare `:has` needs its own rule to distinguish the functional
        // pseudo-class from an unrelated colon-prefixed word.
        css.push(ScannerToken::new(":has", "has", Boundary::CssFunction));

        Self { js, css }
    }
}
