//! Yew view components for the TimerHub UI.
//!
//! Everything here except [`TimerPanel`] is stateless and renders from props.
//! `TimerPanel` owns one `PanelState` driven by an animation-frame scheduler.

use std::rc::Rc;
use timerhub::config::{
    ACTIVE_PRESET_CLASS, FINISHED_CLASS, LABEL_RESET, RING_RADIUS, RING_STROKE_WIDTH, RING_VIEWBOX,
};
use timerhub::{
    format_countdown, ring_circumference, ring_dash_offset, HotkeySignal, PanelState,
    PresetOption, RafScheduler, Tab, Theme,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

// ──────────────────────────────────────────────────────────────────────────────
// Header widgets

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tabs" role="tablist">
            { for Tab::ALL.iter().map(|&tab| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class="tab"
                        role="tab"
                        data-tab={tab.key()}
                        aria-selected={(tab == props.active).to_string()}
                        onclick={Callback::from(move |_| on_select.emit(tab))}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button id="themeToggle" class="theme-toggle" onclick={props.on_toggle.clone()}>
            { props.theme.toggle_label() }
        </button>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Timer pieces

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub fraction: f64,
    pub finished: bool,
}

/// Circular progress indicator; the visible arc is `fraction` of the track.
#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let center = (RING_VIEWBOX / 2).to_string();
    let radius = RING_RADIUS.to_string();
    let style = format!(
        "stroke-dasharray: {:.3}; stroke-dashoffset: {:.3};",
        ring_circumference(),
        ring_dash_offset(props.fraction)
    );
    html! {
        <svg class="ring" viewBox={format!("0 0 {0} {0}", RING_VIEWBOX)} aria-hidden="true">
            <circle class="ring-track"
                cx={center.clone()} cy={center.clone()} r={radius.clone()}
                stroke-width={RING_STROKE_WIDTH.to_string()} />
            <circle class={classes!("ring-progress", props.finished.then_some(FINISHED_CLASS))}
                cx={center.clone()} cy={center} r={radius}
                stroke-width={RING_STROKE_WIDTH.to_string()}
                style={style} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct PresetButtonsProps {
    pub presets: Rc<Vec<PresetOption>>,
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component(PresetButtons)]
pub fn preset_buttons(props: &PresetButtonsProps) -> Html {
    if props.presets.is_empty() {
        return html! {};
    }
    html! {
        <div class="presets">
            { for props.presets.iter().enumerate().map(|(idx, preset)| {
                let on_select = props.on_select.clone();
                let active = props.selected == Some(idx);
                html! {
                    <button
                        class={classes!("preset", active.then_some(ACTIVE_PRESET_CLASS))}
                        onclick={Callback::from(move |_| on_select.emit(idx))}
                    >
                        <span class="preset-label">{ preset.label.clone() }</span>
                        <span class="preset-time">{ format_countdown(preset.seconds) }</span>
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DurationInputsProps {
    pub minutes: String,
    pub seconds: String,
    pub on_minutes: Callback<String>,
    pub on_seconds: Callback<String>,
}

/// Minutes/seconds fields for the General tab.
#[function_component(DurationInputs)]
pub fn duration_inputs(props: &DurationInputsProps) -> Html {
    let field_input = |cb: &Callback<String>| {
        let cb = cb.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <div class="duration-inputs">
            <label for="generalMin">{ "Minutes" }</label>
            <input id="generalMin" type="number" min="0" step="1"
                value={props.minutes.clone()}
                oninput={field_input(&props.on_minutes)} />
            <label for="generalSec">{ "Seconds" }</label>
            <input id="generalSec" type="number" min="0" step="1"
                value={props.seconds.clone()}
                oninput={field_input(&props.on_seconds)} />
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Panel

#[derive(Properties, PartialEq)]
pub struct TimerPanelProps {
    pub tab: Tab,
    pub active: bool,
    pub presets: Rc<Vec<PresetOption>>,
    pub default_secs: f64,
    /// Latest hotkey press; only the active panel acts on it.
    pub hotkey: Option<HotkeySignal>,
}

pub enum PanelMsg {
    Toggle,
    Reset,
    SelectPreset(usize),
    Frame(f64),
    MinutesInput(String),
    SecondsInput(String),
}

/// One tab's timer: preset buttons or manual fields, the ring, and controls.
pub struct TimerPanel {
    state: PanelState<RafScheduler>,
    last_hotkey_seq: u32,
}

impl Component for TimerPanel {
    type Message = PanelMsg;
    type Properties = TimerPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let on_frame = ctx.link().callback(PanelMsg::Frame);
        let scheduler = RafScheduler::new(move |ts| on_frame.emit(ts));
        Self {
            state: PanelState::new(props.tab, scheduler, props.default_secs),
            last_hotkey_seq: props.hotkey.map_or(0, |signal| signal.seq),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PanelMsg::Toggle => self.state.toggle(),
            PanelMsg::Reset => self.state.reset(),
            PanelMsg::SelectPreset(idx) => {
                return self.state.select_preset(&ctx.props().presets, idx);
            }
            PanelMsg::Frame(ts) => self.state.tick(ts),
            PanelMsg::MinutesInput(text) => self.state.set_minutes(text),
            PanelMsg::SecondsInput(text) => self.state.set_seconds(text),
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if let Some(signal) = props.hotkey {
            if signal.seq != self.last_hotkey_seq {
                self.last_hotkey_seq = signal.seq;
                if props.active {
                    self.state.apply_hotkey(signal.hotkey);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let key = props.tab.key();
        let display = self.state.display();

        html! {
            <section class="card" id={format!("panel-{}", key)} role="tabpanel"
                data-phase={self.state.timer().phase().as_str()}
                hidden={!props.active}>
                <h2>{ props.tab.label() }</h2>
                if props.tab.has_manual_input() {
                    <DurationInputs
                        minutes={self.state.minutes().to_string()}
                        seconds={self.state.seconds().to_string()}
                        on_minutes={link.callback(PanelMsg::MinutesInput)}
                        on_seconds={link.callback(PanelMsg::SecondsInput)}
                    />
                } else {
                    <PresetButtons
                        presets={props.presets.clone()}
                        selected={self.state.selected_preset()}
                        on_select={link.callback(PanelMsg::SelectPreset)}
                    />
                }
                <div class="timer-face">
                    <ProgressRing fraction={display.ring_fraction} finished={display.finished} />
                    <div id={format!("{}Display", key)}
                        class={classes!("display", display.finished.then_some(FINISHED_CLASS))}>
                        { display.text.clone() }
                    </div>
                </div>
                <div class="controls">
                    <button id={format!("{}Toggle", key)} class="primary"
                        onclick={link.callback(|_| PanelMsg::Toggle)}>
                        { display.control.text() }
                    </button>
                    <button id={format!("{}Reset", key)}
                        onclick={link.callback(|_| PanelMsg::Reset)}>
                        { LABEL_RESET }
                    </button>
                </div>
            </section>
        }
    }
}
