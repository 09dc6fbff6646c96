use log::warn;
use timerhub::theme::{apply_theme, load_theme, store_theme};
use timerhub::{hotkey_for, Hotkey, Theme};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

/// Current theme plus the callback that flips it.
#[derive(Clone)]
pub struct ThemeControl {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

/// Theme state restored from `localStorage`. Every change is applied to the
/// document element and written back.
#[hook]
pub fn use_theme() -> ThemeControl {
    let theme = use_state(load_theme);

    use_effect_with(*theme, |&current| {
        if let Err(err) = apply_theme(current) {
            warn!("Could not apply {} theme: {}", current.as_str(), err);
        }
        if let Err(err) = store_theme(current) {
            warn!("Could not save theme preference: {}", err);
        }
        || ()
    });

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    ThemeControl {
        theme: *theme,
        on_toggle,
    }
}

/// Listen for Space / R on the document for the lifetime of the component.
///
/// `on_hotkey` should be stable across renders (e.g. from `use_callback`); a
/// new callback re-registers the listener.
#[hook]
pub fn use_hotkeys(on_hotkey: Callback<Hotkey>) {
    use_effect_with(on_hotkey, |on_hotkey| {
        let on_hotkey = on_hotkey.clone();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let tag = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|el| el.tag_name());
            let Some(hotkey) = hotkey_for(&event.code(), &event.key(), tag.as_deref()) else {
                return;
            };
            if hotkey == Hotkey::ToggleRun {
                // keep Space from scrolling the page or clicking a focused button
                event.prevent_default();
            }
            on_hotkey.emit(hotkey);
        });

        let document = gloo_utils::document();
        if let Err(e) = document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            warn!("Could not register keyboard shortcuts: {:?}", e);
        }

        move || {
            if let Err(e) = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                warn!("Could not remove keyboard shortcuts: {:?}", e);
            }
        }
    });
}
