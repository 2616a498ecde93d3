use dioxus::prelude::*;
use futures::{
    StreamExt,
    channel::mpsc::{UnboundedReceiver, unbounded},
};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::MediaQueryListEvent;

use site::theme::{Appearance, ThemePreference, ThemeState};

use crate::CONFIG;
use crate::common::storage::LocalThemeStore;

// theme context
//
// provided once by the root layout.  components read the preference through this
// instead of a global, and toggle() is the only way to change it
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: Signal<ThemeState<LocalThemeStore>>,
    system_dark: Signal<bool>,
}

impl ThemeContext {
    pub fn appearance(&self) -> Appearance {
        self.state.read().appearance(*self.system_dark.read())
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.state.write().toggle(*self.system_dark.peek());
        apply_appearance(self.appearance());
        next
    }

    fn system_changed(&mut self, dark: bool) {
        self.system_dark.set(dark);

        if let Some(appearance) = self.state.peek().follow_system(dark) {
            apply_appearance(appearance);
        }
    }
}

pub fn load_theme() -> ThemeState<LocalThemeStore> {
    ThemeState::load(LocalThemeStore, &CONFIG.theme.storage_key, CONFIG.theme.default)
}

pub fn use_theme_provider() -> ThemeContext {
    let mut theme = use_context_provider(|| ThemeContext {
        state: Signal::new(load_theme()),
        system_dark: Signal::new(system_prefers_dark()),
    });

    // a System preference repaints whenever the os color scheme changes
    use_future(move || async move {
        let Some(mut changes) = watch_system_scheme() else {
            return;
        };

        while let Some(dark) = changes.next().await {
            debug!({ dark = dark }, "system color scheme changed");
            theme.system_changed(dark);
        }
    });

    theme
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

// forward prefers-color-scheme changes into the dioxus runtime
//
// the browser calls the listener outside of any component, so it only pushes onto a
// channel that the provider's future drains.  the listener lives as long as the page
fn watch_system_scheme() -> Option<UnboundedReceiver<bool>> {
    let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()?;

    let (tx, rx) = unbounded();
    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |evt: MediaQueryListEvent| {
        let _ = tx.unbounded_send(evt.matches());
    });

    if let Err(err) =
        query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
    {
        warn!("failed to watch the system color scheme: {err:?}");
        return None;
    }

    listener.forget();

    Some(rx)
}

// set the root attribute that the stylesheet keys off of
//
// main() calls this before the first render so a stored dark preference never flashes
// the light palette
pub fn apply_appearance(appearance: Appearance) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        warn!("no document element to apply the theme to");
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", appearance.as_str()) {
        warn!("failed to set theme attribute: {err:?}");
    }

    if let Err(err) = root
        .class_list()
        .toggle_with_force("dark", appearance == Appearance::Dark)
    {
        warn!("failed to set theme class: {err:?}");
    }

    debug!({ appearance = appearance.as_str() }, "applied theme");
}
