use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SystemControlsProps {
    /// Last volume level reported by the PC (0..=100).
    pub volume: u32,
    pub on_shutdown: Callback<()>,
    pub on_restart: Callback<()>,
    pub on_sleep: Callback<()>,
    pub on_lock: Callback<()>,
    pub on_volume_change: Callback<u32>,
    pub on_volume_up: Callback<()>,
    pub on_volume_down: Callback<()>,
    pub on_mute: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Wrap a destructive action in a browser confirm dialog.
fn confirmed(cb: Callback<()>, prompt: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Some(win) = web_sys::window() {
            if win.confirm_with_message(prompt).unwrap_or(false) {
                cb.emit(());
            }
        } else {
            cb.emit(());
        }
    })
}

#[function_component(SystemControls)]
pub fn system_controls(props: &SystemControlsProps) -> Html {
    let shutdown_cb = confirmed(
        props.on_shutdown.clone(),
        "Are you sure you want to shutdown the PC?",
    );
    let restart_cb = confirmed(
        props.on_restart.clone(),
        "Are you sure you want to restart the PC?",
    );
    let sleep_cb = {
        let cb = props.on_sleep.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let lock_cb = {
        let cb = props.on_lock.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let vol_up_cb = {
        let cb = props.on_volume_up.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let vol_down_cb = {
        let cb = props.on_volume_down.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mute_cb = {
        let cb = props.on_mute.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let slider_cb = {
        let cb = props.on_volume_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(level) = input.value().parse::<u32>() {
                cb.emit(level.min(100));
            }
        })
    };

    let power_btn = "padding:16px 8px; display:flex; flex-direction:column; align-items:center; gap:6px;";

    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Power Controls"}</div>
            <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:10px;">
                <button style={format!("{power_btn} background:#f85149; border:1px solid #b62324; color:#fff;")} onclick={shutdown_cb} disabled={props.disabled}>
                    <span>{"⏻"}</span><span>{"Shutdown"}</span>
                </button>
                <button style={format!("{power_btn} background:#9e6a03; border:1px solid #7d5503; color:#fff;")} onclick={restart_cb} disabled={props.disabled}>
                    <span>{"🔄"}</span><span>{"Restart"}</span>
                </button>
                <button style={power_btn} onclick={sleep_cb} disabled={props.disabled}>
                    <span>{"😴"}</span><span>{"Sleep"}</span>
                </button>
                <button style={power_btn} onclick={lock_cb} disabled={props.disabled}>
                    <span>{"🔒"}</span><span>{"Lock"}</span>
                </button>
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Volume Control"}</div>
            <div style="display:flex; align-items:center; gap:10px;">
                <button onclick={vol_down_cb} disabled={props.disabled}>{"🔉"}</button>
                <input
                    type="range"
                    min="0"
                    max="100"
                    value={props.volume.to_string()}
                    oninput={slider_cb}
                    disabled={props.disabled}
                    style="flex:1;"
                />
                <span style="min-width:44px; text-align:right; font-variant-numeric:tabular-nums;">{ format!("{}%", props.volume) }</span>
                <button onclick={vol_up_cb} disabled={props.disabled}>{"🔊"}</button>
            </div>
            <button style="margin-top:12px; width:100%; padding:10px;" onclick={mute_cb} disabled={props.disabled}>
                {"🔇 Mute / Unmute"}
            </button>
        </div>
    </div>}
}
