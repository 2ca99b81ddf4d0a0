#![forbid(unsafe_code)]

//! Message resolution with locale fallback.
//!
//! Default messages live in an immutable catalog keyed by locale. A caller
//! override always wins. An unsupported locale never fails resolution: a
//! [`LocaleDiagnostic`] is logged and returned, and the default locale's
//! entry is used instead.
//!
//! # Invariants
//!
//! 1. Resolved text is never empty.
//! 2. At most one diagnostic per call to [`resolve`].
//! 3. Locale keys are normalized before lookup (`en_US.UTF-8` → `en-US`).

use std::fmt;

/// Bumped whenever catalog wording changes.
pub const CATALOG_VERSION: u32 = 1;

/// Locale used when the requested one is not in the catalog.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Which message to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    Success,
}

struct MessageSet {
    locale: &'static str,
    error: fn(&str) -> String,
    success: fn(&str) -> String,
}

impl MessageSet {
    fn render(&self, kind: MessageKind, name: &str) -> String {
        match kind {
            MessageKind::Error => (self.error)(name),
            MessageKind::Success => (self.success)(name),
        }
    }
}

static CATALOG: &[MessageSet] = &[
    MessageSet {
        locale: "en-US",
        error: en_us_error,
        success: en_us_success,
    },
    MessageSet {
        locale: "zh-CN",
        error: zh_cn_error,
        success: zh_cn_success,
    },
];

fn en_us_error(name: &str) -> String {
    if name.is_empty() {
        "Please select an option.".to_string()
    } else {
        format!("Please select {name}.")
    }
}

fn en_us_success(name: &str) -> String {
    if name.is_empty() {
        "Selection is valid.".to_string()
    } else {
        format!("{name} is valid.")
    }
}

fn zh_cn_error(name: &str) -> String {
    if name.is_empty() {
        "请选择一个选项".to_string()
    } else {
        format!("请选择{name}")
    }
}

fn zh_cn_success(name: &str) -> String {
    if name.is_empty() {
        "选择有效".to_string()
    } else {
        format!("{name}有效")
    }
}

fn supported_locales() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|set| set.locale)
}

/// Warning raised when a config names a locale the catalog lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDiagnostic {
    /// Locale as given in the config.
    pub requested: String,
    /// Locale whose messages were used instead.
    pub fallback: &'static str,
}

impl fmt::Display for LocaleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported locale {:?}, falling back to {}",
            self.requested, self.fallback
        )
    }
}

/// Resolved display text plus any diagnostic produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub diagnostic: Option<LocaleDiagnostic>,
}

/// Resolve the message for `kind`.
///
/// A non-empty `override_msg` is returned verbatim without touching the
/// catalog.
pub fn resolve(
    locale: &str,
    kind: MessageKind,
    override_msg: Option<&str>,
    name: &str,
) -> Resolution {
    if let Some(msg) = override_msg.filter(|m| !m.is_empty()) {
        return Resolution {
            text: msg.to_string(),
            diagnostic: None,
        };
    }

    if let Some(set) = lookup(locale) {
        return Resolution {
            text: set.render(kind, name),
            diagnostic: None,
        };
    }

    let diagnostic = LocaleDiagnostic {
        requested: locale.to_string(),
        fallback: DEFAULT_LOCALE,
    };
    tracing::warn!(
        target: "ftui_radio::messages",
        locale = %diagnostic.requested,
        fallback = diagnostic.fallback,
        supported = %supported_locales().collect::<Vec<_>>().join(", "),
        catalog_version = CATALOG_VERSION,
        "unsupported locale, using default messages"
    );
    Resolution {
        text: default_set().render(kind, name),
        diagnostic: Some(diagnostic),
    }
}

fn lookup(locale: &str) -> Option<&'static MessageSet> {
    let normalized = normalize_locale(locale)?;
    CATALOG
        .iter()
        .find(|set| set.locale.eq_ignore_ascii_case(&normalized))
}

fn default_set() -> &'static MessageSet {
    // CATALOG[0] is DEFAULT_LOCALE; see catalog_starts_with_default_locale.
    &CATALOG[0]
}

fn normalize_locale(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.replace('_', "-"))
}
