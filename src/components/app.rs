//! Root component: header with connection control, tabbed panels, socket
//! wiring, and the toast. Every remote command callback lives here and the
//! panels stay presentational.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::connect_modal::ConnectModal;
use super::media_controls::MediaControls;
use super::search_panel::SearchPanel;
use super::system_controls::SystemControls;
use super::toast::Toast;
use super::touch_pad::TouchPad;
use super::virtual_keyboard::VirtualKeyboard;
use crate::model::{Command, MouseButton, ServerEvent};
use crate::socket::SocketClient;
use crate::state::connection::ConnectionStatus;
use crate::util::{clog, normalize_url, parse_addr};

const LAST_ADDR_KEY: &str = "pcr_last_addr";
const TOAST_MS: i32 = 2000;

#[derive(PartialEq, Eq, Clone, Copy)]
enum Tab {
    Touchpad,
    Keyboard,
    System,
    Media,
    Search,
}

const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Touchpad, "🖱️", "Mouse"),
    (Tab::Keyboard, "⌨️", "Keys"),
    (Tab::System, "⚡", "System"),
    (Tab::Media, "🎵", "Media"),
    (Tab::Search, "🔍", "Search"),
];

#[function_component(App)]
pub fn app() -> Html {
    let tab = use_state(|| Tab::Touchpad);
    let status = use_state(ConnectionStatus::default);
    let volume = use_state(|| 50u32);
    let toast = use_state(|| None::<String>);
    let show_modal = use_state(|| false);
    let last_addr = use_state(String::new);
    let socket = use_mut_ref(|| None::<SocketClient>);

    // Load the last-used address once on mount.
    {
        let last_addr = last_addr.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(LAST_ADDR_KEY) {
                        last_addr.set(raw);
                    }
                }
            }
            || ()
        });
    }

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |msg: String| {
            toast.set(Some(msg));
            let toast = toast.clone();
            let clear = Closure::once_into_js(move || toast.set(None));
            if let Some(win) = web_sys::window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    clear.unchecked_ref(),
                    TOAST_MS,
                );
            }
        })
    };

    let do_connect = {
        let socket = socket.clone();
        let status = status.clone();
        let volume = volume.clone();
        let show_modal = show_modal.clone();
        let last_addr = last_addr.clone();
        Callback::from(move |addr: String| {
            let (host, port) = parse_addr(&addr);
            if host.is_empty() {
                return;
            }
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(LAST_ADDR_KEY, &addr);
                }
            }
            last_addr.set(addr.clone());

            let mut slot = socket.borrow_mut();
            let client = slot.get_or_insert_with(|| {
                let on_status = {
                    let status = status.clone();
                    Callback::from(move |s: ConnectionStatus| status.set(s))
                };
                let on_event = {
                    let status = status.clone();
                    let volume = volume.clone();
                    Callback::from(move |ev: ServerEvent| match ev {
                        ServerEvent::VolumeUpdate { level } => volume.set(level.min(100)),
                        ServerEvent::ConnectionStatus { status: s, .. } => {
                            if s == "connected" {
                                status.set(ConnectionStatus::Connected);
                            }
                        }
                        ServerEvent::CommandResponse { .. } => {}
                        ServerEvent::Unknown => clog("app: ignoring unknown server event"),
                    })
                };
                SocketClient::new(on_status, on_event)
            });
            client.connect(&host, port);
            show_modal.set(false);
        })
    };

    let connect_btn_cb = {
        let socket = socket.clone();
        let status = status.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |_| {
            if status.is_connected() {
                if let Some(client) = socket.borrow().as_ref() {
                    client.disconnect();
                }
            } else {
                show_modal.set(true);
            }
        })
    };
    let close_modal_cb = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    // Single funnel for outgoing commands.
    let emit_cmd = {
        let socket = socket.clone();
        Callback::from(move |cmd: Command| {
            if let Some(client) = socket.borrow().as_ref() {
                client.emit(&cmd);
            }
        })
    };
    // Command + toast in one go.
    let emit_with_toast = {
        let emit_cmd = emit_cmd.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |(cmd, msg): (Command, String)| {
            emit_cmd.emit(cmd);
            show_toast.emit(msg);
        })
    };

    // Mouse
    let on_mouse_move = {
        let emit = emit_cmd.clone();
        Callback::from(move |(dx, dy): (f64, f64)| emit.emit(Command::mouse_move(dx, dy)))
    };
    let on_left_click = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| {
            emit.emit(Command::MouseClick {
                button: MouseButton::Left,
            })
        })
    };
    let on_right_click = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| {
            emit.emit(Command::MouseClick {
                button: MouseButton::Right,
            })
        })
    };
    let on_double_click = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| {
            emit.emit(Command::MouseClick {
                button: MouseButton::Double,
            })
        })
    };
    let on_scroll = {
        let emit = emit_cmd.clone();
        Callback::from(move |delta: i32| emit.emit(Command::MouseScroll { delta }))
    };

    // Keyboard
    let on_type = {
        let emit = emit_with_toast.clone();
        Callback::from(move |text: String| {
            emit.emit((Command::KeyboardType { text }, "Text sent".to_string()))
        })
    };
    let on_key = {
        let emit = emit_cmd.clone();
        Callback::from(move |key: String| emit.emit(Command::KeyboardKey { key }))
    };
    let on_hotkey = {
        let emit = emit_cmd.clone();
        Callback::from(move |keys: Vec<String>| emit.emit(Command::KeyboardHotkey { keys }))
    };

    // System
    let on_shutdown = {
        let emit = emit_with_toast.clone();
        Callback::from(move |_| {
            emit.emit((Command::SystemShutdown {}, "Shutdown command sent".to_string()))
        })
    };
    let on_restart = {
        let emit = emit_with_toast.clone();
        Callback::from(move |_| {
            emit.emit((Command::SystemRestart {}, "Restart command sent".to_string()))
        })
    };
    let on_sleep = {
        let emit = emit_with_toast.clone();
        Callback::from(move |_| {
            emit.emit((Command::SystemSleep {}, "Sleep command sent".to_string()))
        })
    };
    let on_lock = {
        let emit = emit_with_toast.clone();
        Callback::from(move |_| emit.emit((Command::SystemLock {}, "PC locked".to_string())))
    };
    let on_volume_change = {
        let emit = emit_cmd.clone();
        Callback::from(move |level: u32| emit.emit(Command::volume_set(level)))
    };
    let on_volume_up = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::VolumeUp {}))
    };
    let on_volume_down = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::VolumeDown {}))
    };
    let on_mute = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::VolumeMute {}))
    };

    // Media + presentation
    let on_play_pause = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::MediaPlayPause {}))
    };
    let on_next = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::MediaNext {}))
    };
    let on_prev = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::MediaPrev {}))
    };
    let on_stop = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::MediaStop {}))
    };
    let on_slide_next = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::SlideNext {}))
    };
    let on_slide_prev = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::SlidePrev {}))
    };
    let on_slideshow_start = {
        let emit = emit_with_toast.clone();
        Callback::from(move |from_current: bool| {
            let msg = if from_current {
                "Slideshow from current"
            } else {
                "Slideshow started"
            };
            emit.emit((Command::SlideshowStart { from_current }, msg.to_string()))
        })
    };
    let on_slideshow_end = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::SlideshowEnd {}))
    };
    let on_page_up = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::PageUp {}))
    };
    let on_page_down = {
        let emit = emit_cmd.clone();
        Callback::from(move |_| emit.emit(Command::PageDown {}))
    };

    // Browser
    let on_search = {
        let emit = emit_with_toast.clone();
        Callback::from(move |query: String| {
            let msg = format!("Searching: {query}");
            emit.emit((Command::BrowserSearch { query }, msg))
        })
    };
    let on_open_url = {
        let emit = emit_with_toast.clone();
        Callback::from(move |url: String| {
            let url = normalize_url(&url);
            let msg = format!("Opening: {url}");
            emit.emit((Command::BrowserUrl { url }, msg))
        })
    };
    let on_open_google = {
        let emit = emit_with_toast.clone();
        Callback::from(move |_| {
            emit.emit((Command::BrowserGoogle {}, "Opening Google".to_string()))
        })
    };

    let connected = status.is_connected();
    let disabled = !connected;
    let (btn_label, btn_style) = match *status {
        ConnectionStatus::Connecting => ("...", "background:#9e6a03; color:#fff;"),
        ConnectionStatus::Connected => ("DISCONNECT", "background:#f85149; color:#fff;"),
        ConnectionStatus::Disconnected => ("CONNECT", "background:#238636; color:#fff;"),
    };

    // Panels stay mounted; only the active one is shown, so gesture and
    // input state survive tab switches.
    let panel_style = |t: Tab| {
        if *tab == t {
            "display:block; flex:1; padding:16px; overflow-y:auto;"
        } else {
            "display:none;"
        }
    };

    html! {<div style="display:flex; flex-direction:column; height:100vh; background:#0d1117; color:#e6edf3;">
        <header style="display:flex; justify-content:space-between; align-items:center; padding:12px 16px; background:#161b22; border-bottom:1px solid #30363d;">
            <div style="display:flex; align-items:center; gap:10px; font-weight:600;">
                <span>{"🖥️"}</span>
                <span>{"PC Control"}</span>
            </div>
            <button
                style={format!("padding:8px 16px; border-radius:8px; border:none; font-weight:600; {btn_style}")}
                onclick={connect_btn_cb}
            >{ btn_label }</button>
        </header>

        <main style="flex:1; display:flex; flex-direction:column; overflow:hidden;">
            <div style={panel_style(Tab::Touchpad)}>
                <TouchPad
                    on_move={on_mouse_move}
                    on_left_click={on_left_click}
                    on_right_click={on_right_click}
                    on_double_click={on_double_click}
                    on_scroll={on_scroll}
                    disabled={disabled}
                />
            </div>
            <div style={panel_style(Tab::Keyboard)}>
                <VirtualKeyboard
                    on_type={on_type}
                    on_key={on_key}
                    on_hotkey={on_hotkey}
                    disabled={disabled}
                />
            </div>
            <div style={panel_style(Tab::System)}>
                <SystemControls
                    volume={*volume}
                    on_shutdown={on_shutdown}
                    on_restart={on_restart}
                    on_sleep={on_sleep}
                    on_lock={on_lock}
                    on_volume_change={on_volume_change}
                    on_volume_up={on_volume_up}
                    on_volume_down={on_volume_down}
                    on_mute={on_mute}
                    disabled={disabled}
                />
            </div>
            <div style={panel_style(Tab::Media)}>
                <MediaControls
                    on_play_pause={on_play_pause}
                    on_next={on_next}
                    on_prev={on_prev}
                    on_stop={on_stop}
                    on_slide_next={on_slide_next}
                    on_slide_prev={on_slide_prev}
                    on_slideshow_start={on_slideshow_start}
                    on_slideshow_end={on_slideshow_end}
                    on_page_up={on_page_up}
                    on_page_down={on_page_down}
                    disabled={disabled}
                />
            </div>
            <div style={panel_style(Tab::Search)}>
                <SearchPanel
                    on_search={on_search}
                    on_open_url={on_open_url}
                    on_open_google={on_open_google}
                    disabled={disabled}
                />
            </div>
        </main>

        <nav style="display:flex; background:#161b22; border-top:1px solid #30363d;">
            { for TABS.iter().map(|(t, icon, label)| {
                let tab_handle = tab.clone();
                let t = *t;
                let style = if *tab == t {
                    "flex:1; padding:10px 4px; background:#0d1117; color:#58a6ff; border:none; display:flex; flex-direction:column; align-items:center; gap:2px;"
                } else {
                    "flex:1; padding:10px 4px; background:none; color:#8b949e; border:none; display:flex; flex-direction:column; align-items:center; gap:2px;"
                };
                html! {<button {style} onclick={Callback::from(move |_| tab_handle.set(t))}>
                    <span>{ *icon }</span>
                    <span style="font-size:11px;">{ *label }</span>
                </button>}
            }) }
        </nav>

        <ConnectModal
            show={*show_modal}
            initial_addr={(*last_addr).clone()}
            on_connect={do_connect}
            on_close={close_modal_cb}
        />
        <Toast message={(*toast).clone()} />
    </div>}
}
