// Build time configuration, every field has a default so a plain
// `trunk build` works without any environment.

use crate::components::ctx::{require_ctx, ContextError};
use yew::prelude::*;

const DEFAULT_DEMO_API_BASE: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_GITHUB_LOGIN: &str = "gsalunke";
const DEFAULT_DEBOUNCE_MS: i32 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct Conf {
    pub demo_api_base: AttrValue,
    pub github_api_base: AttrValue,
    pub github_login: AttrValue,
    pub debounce_ms: i32,
    /// Prepended to every local storage key the pages use.
    pub storage_prefix: AttrValue,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            demo_api_base: DEFAULT_DEMO_API_BASE.into(),
            github_api_base: DEFAULT_GITHUB_API_BASE.into(),
            github_login: DEFAULT_GITHUB_LOGIN.into(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            storage_prefix: AttrValue::from(""),
        }
    }
}

impl Conf {
    pub fn derive() -> Self {
        Self::from_overrides(Overrides {
            demo_api_base: option_env!("SHOWCASE_DEMO_API_BASE"),
            github_api_base: option_env!("SHOWCASE_GITHUB_API_BASE"),
            github_login: option_env!("SHOWCASE_GITHUB_LOGIN"),
            debounce_ms: option_env!("SHOWCASE_DEBOUNCE_MS"),
            storage_prefix: option_env!("SHOWCASE_STORAGE_PREFIX"),
        })
    }

    fn from_overrides(overrides: Overrides) -> Self {
        let defaults = Self::default();
        let text = |value: Option<&'static str>, default: AttrValue| match value {
            Some(value) if !value.trim().is_empty() => AttrValue::from(value),
            _ => default,
        };

        Self {
            demo_api_base: text(overrides.demo_api_base, defaults.demo_api_base),
            github_api_base: text(overrides.github_api_base, defaults.github_api_base),
            github_login: text(overrides.github_login, defaults.github_login),
            debounce_ms: overrides
                .debounce_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.debounce_ms),
            storage_prefix: overrides
                .storage_prefix
                .map(AttrValue::from)
                .unwrap_or(defaults.storage_prefix),
        }
    }

    pub fn storage_key(&self, key: &str) -> AttrValue {
        format!("{}{}", self.storage_prefix, key).into()
    }
}

#[derive(Default)]
struct Overrides {
    demo_api_base: Option<&'static str>,
    github_api_base: Option<&'static str>,
    github_login: Option<&'static str>,
    debounce_ms: Option<&'static str>,
    storage_prefix: Option<&'static str>,
}

#[hook]
pub fn use_conf() -> Result<Conf, ContextError> {
    require_ctx(use_context::<Conf>(), "use_conf", "ContextProvider<Conf>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_gives_defaults() {
        assert_eq!(Conf::from_overrides(Overrides::default()), Conf::default());
    }

    #[test]
    fn overrides_replace_defaults() {
        let conf = Conf::from_overrides(Overrides {
            demo_api_base: Some("http://localhost:3000"),
            debounce_ms: Some(" 250 "),
            storage_prefix: Some("showcase."),
            ..Default::default()
        });

        assert_eq!(&*conf.demo_api_base, "http://localhost:3000");
        assert_eq!(&*conf.github_api_base, DEFAULT_GITHUB_API_BASE);
        assert_eq!(conf.debounce_ms, 250);
        assert_eq!(&*conf.storage_key("user-name"), "showcase.user-name");
    }

    #[test]
    fn blank_or_broken_overrides_are_ignored() {
        let conf = Conf::from_overrides(Overrides {
            github_login: Some("  "),
            debounce_ms: Some("soon"),
            ..Default::default()
        });

        assert_eq!(&*conf.github_login, DEFAULT_GITHUB_LOGIN);
        assert_eq!(conf.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(&*conf.storage_key("user-name"), "user-name");
    }
}
