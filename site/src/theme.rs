use std::{fmt, str::FromStr};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// theme preference
//
// the user's chosen display mode.  there is exactly one of these per browser session;
// the toggle control is the only writer and everything else reads the resolved
// appearance through the root attribute that the stylesheet keys off of
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

// what actually gets painted once System has been resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System if system_prefers_dark => Appearance::Dark,
            ThemePreference::System => Appearance::Light,
        }
    }

    // the toggle cycles between light and dark; a System preference flips to the
    // opposite of whatever the system currently resolves to
    pub fn toggled(self, system_prefers_dark: bool) -> ThemePreference {
        match self.resolve(system_prefers_dark) {
            Appearance::Light => ThemePreference::Dark,
            Appearance::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(anyhow::Error::msg(format!("unknown theme preference: {other}"))),
        }
    }
}

// persistence adapter
//
// the theme is the only thing this site stores.  the browser implementation lives in
// the webapp and wraps localStorage; the adapter is injected at the root so the state
// below never touches a global
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// theme state
//
// owns the current preference and the store it is persisted to.  set() is the single
// writer; storage failures are logged and otherwise ignored since losing the
// preference across reloads is not worth interrupting the user over
#[derive(Debug)]
pub struct ThemeState<S: ThemeStore> {
    preference: ThemePreference,
    store: S,
    key: String,
}

impl<S: ThemeStore> ThemeState<S> {
    pub fn load(store: S, key: &str, default: ThemePreference) -> Self {
        let preference = match store.get(key) {
            Some(value) => match value.parse() {
                Ok(pref) => pref,
                Err(err) => {
                    warn!("ignoring stored theme: {err}");
                    default
                }
            },
            None => default,
        };

        debug!({ preference = %preference }, "loaded theme preference");

        ThemeState {
            preference,
            store,
            key: key.to_owned(),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn appearance(&self, system_prefers_dark: bool) -> Appearance {
        self.preference.resolve(system_prefers_dark)
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;

        if let Err(err) = self.store.set(&self.key, preference.as_str()) {
            warn!("failed to persist theme preference: {err}");
        }
    }

    pub fn toggle(&mut self, system_prefers_dark: bool) -> ThemePreference {
        let next = self.preference.toggled(system_prefers_dark);
        self.set(next);
        next
    }

    // the system color scheme changed; only a System preference has anything to repaint
    pub fn follow_system(&self, system_prefers_dark: bool) -> Option<Appearance> {
        match self.preference {
            ThemePreference::System => Some(self.appearance(system_prefers_dark)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    const KEY: &str = "theme";

    #[derive(Debug, Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn new() -> Self {
            MemoryStore::default()
        }

        fn failing() -> Self {
            MemoryStore {
                items: RefCell::new(HashMap::new()),
                fail_writes: true,
            }
        }
    }

    impl ThemeStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(anyhow::Error::msg("storage is read-only"));
            }

            self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_first_visit_defaults_to_light() {
        let store = MemoryStore::new();
        let state = ThemeState::load(&store, KEY, ThemePreference::default());

        assert_eq!(state.preference(), ThemePreference::Light);
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn test_toggle_persists_and_survives_reload() {
        let store = MemoryStore::new();

        let mut state = ThemeState::load(&store, KEY, ThemePreference::Light);
        assert_eq!(state.toggle(false), ThemePreference::Dark);
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));

        // a fresh state over the same store is what a reload looks like
        let reloaded = ThemeState::load(&store, KEY, ThemePreference::Light);
        assert_eq!(reloaded.preference(), ThemePreference::Dark);
        assert_eq!(reloaded.appearance(false), Appearance::Dark);

        let mut state = reloaded;
        assert_eq!(state.toggle(false), ThemePreference::Light);
        assert_eq!(store.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_preference_resolves_and_toggles() {
        assert_eq!(ThemePreference::System.resolve(true), Appearance::Dark);
        assert_eq!(ThemePreference::System.resolve(false), Appearance::Light);

        assert_eq!(ThemePreference::System.toggled(true), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(false), ThemePreference::Dark);
    }

    #[test]
    fn test_unparseable_stored_value_uses_default() {
        let store = MemoryStore::new();
        store.set(KEY, "sepia").unwrap();

        let state = ThemeState::load(&store, KEY, ThemePreference::Light);
        assert_eq!(state.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_write_failures_are_ignored() {
        let store = MemoryStore::failing();
        let mut state = ThemeState::load(&store, KEY, ThemePreference::Light);

        state.set(ThemePreference::Dark);
        assert_eq!(state.preference(), ThemePreference::Dark);
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn test_system_changes_repaint_only_system_preference() {
        let store = MemoryStore::new();

        let mut state = ThemeState::load(&store, KEY, ThemePreference::System);
        assert_eq!(state.follow_system(true), Some(Appearance::Dark));
        assert_eq!(state.follow_system(false), Some(Appearance::Light));

        state.set(ThemePreference::Light);
        assert_eq!(state.follow_system(true), None);

        state.set(ThemePreference::Dark);
        assert_eq!(state.follow_system(false), None);
    }

    #[test]
    fn test_parse_and_display() {
        for pref in [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System] {
            assert_eq!(pref.to_string().parse::<ThemePreference>().unwrap(), pref);
        }
        assert_eq!(" Dark ".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("".parse::<ThemePreference>().is_err());
    }
}
