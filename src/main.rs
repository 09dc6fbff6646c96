//! TimerHub: countdown timers for cooking, sport and study, built with Yew.
//! Wires the tab bar, theme toggle, keyboard shortcuts and the four timer panels.

use log::{error, info};
use std::rc::Rc;
use timerhub::{Hotkey, HotkeySignal, PresetTable, Tab};
use yew::prelude::*;

mod components;
mod hooks;

use components::{TabBar, ThemeToggle, TimerPanel};
use hooks::{use_hotkeys, use_theme};

/// Load the embedded preset table, falling back to defaults without presets.
fn load_presets() -> PresetTable {
    match PresetTable::builtin() {
        Ok(table) => {
            info!(
                "Loaded presets for {} tabs (default {}s)",
                table.tabs.len(),
                table.default_seconds
            );
            table
        }
        Err(err) => {
            error!("{}; starting without presets", err);
            PresetTable::default()
        }
    }
}

/// Root component: one panel per tab, all mounted so hidden timers keep running.
#[function_component]
pub fn App() -> Html {
    let presets = use_memo((), |_| load_presets());
    let active_tab = use_state(|| Tab::Cook);
    let theme = use_theme();

    // Latest hotkey press, numbered so panels can skip presses already seen
    let hotkey = use_state(|| None::<HotkeySignal>);
    let hotkey_seq = use_mut_ref(|| 0u32);
    let on_hotkey = {
        let hotkey = hotkey.clone();
        use_callback((), move |key: Hotkey, _| {
            let mut seq = hotkey_seq.borrow_mut();
            *seq = seq.wrapping_add(1);
            hotkey.set(Some(HotkeySignal {
                seq: *seq,
                hotkey: key,
            }));
        })
    };
    use_hotkeys(on_hotkey);

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    html! {
        <main class="app">
            <header class="topbar">
                <h1>{ "TimerHub" }</h1>
                <ThemeToggle theme={theme.theme} on_toggle={theme.on_toggle.clone()} />
            </header>
            <TabBar active={*active_tab} on_select={on_select_tab} />
            { for Tab::ALL.iter().map(|&tab| html! {
                <TimerPanel
                    key={tab.key()}
                    tab={tab}
                    active={tab == *active_tab}
                    presets={Rc::new(presets.presets_for(tab).to_vec())}
                    default_secs={presets.default_seconds}
                    hotkey={*hotkey}
                />
            }) }
        </main>
    }
}

/// Entry point: installs the panic hook and console logger, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
