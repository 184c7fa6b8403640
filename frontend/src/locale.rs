//! Supported UI locales and the locale-prefix convention.
//!
//! Every client route is prefixed with a locale segment (`/en/...`,
//! `/es/...`, `/pt/...`). An unknown prefix fails to parse and the router
//! falls through to the not-found route; a bare `/` redirects to the stored
//! preference (default English).

use std::fmt;
use std::str::FromStr;

/// Storage key holding the visitor's locale preference. This key survives
/// `clear_auth`.
pub const LOCALE_STORAGE_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Pt,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Pt => "pt",
        }
    }

    /// Locale prefix of a path such as `/es/admin/users`, defaulting to
    /// English when the prefix is missing or unknown.
    pub fn from_path(path: &str) -> Locale {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "pt" => Ok(Locale::Pt),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_locales() {
        assert_eq!("en".parse(), Ok(Locale::En));
        assert_eq!("es".parse(), Ok(Locale::Es));
        assert_eq!("pt".parse(), Ok(Locale::Pt));
        assert_eq!("de".parse::<Locale>(), Err(()));
    }

    #[test]
    fn path_prefix_defaults_to_english() {
        assert_eq!(Locale::from_path("/es/admin/users"), Locale::Es);
        assert_eq!(Locale::from_path("/pt"), Locale::Pt);
        assert_eq!(Locale::from_path("/fr/login"), Locale::En);
        assert_eq!(Locale::from_path("/"), Locale::En);
        assert_eq!(Locale::from_path(""), Locale::En);
    }
}
