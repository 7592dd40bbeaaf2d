use web_sys::HtmlInputElement;
use yew::prelude::*;

const SPECIAL_KEYS: &[(&str, &str)] = &[
    ("Enter ↵", "enter"),
    ("Backspace ⌫", "backspace"),
    ("Tab ⇥", "tab"),
    ("Escape", "escape"),
    ("Space", "space"),
    ("↑", "up"),
    ("↓", "down"),
    ("←", "left"),
    ("→", "right"),
    ("Home", "home"),
    ("End", "end"),
    ("Delete", "delete"),
];

const HOTKEYS: &[(&str, &[&str])] = &[
    ("Copy", &["ctrl", "c"]),
    ("Paste", &["ctrl", "v"]),
    ("Cut", &["ctrl", "x"]),
    ("Undo", &["ctrl", "z"]),
    ("Redo", &["ctrl", "y"]),
    ("Select All", &["ctrl", "a"]),
    ("Save", &["ctrl", "s"]),
    ("Find", &["ctrl", "f"]),
];

#[derive(Properties, PartialEq, Clone)]
pub struct VirtualKeyboardProps {
    /// Free text typed on the remote machine as a whole.
    pub on_type: Callback<String>,
    /// One named special key (enter, backspace, ...).
    pub on_key: Callback<String>,
    /// A chord like ["ctrl", "c"].
    pub on_hotkey: Callback<Vec<String>>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(VirtualKeyboard)]
pub fn virtual_keyboard(props: &VirtualKeyboardProps) -> Html {
    let text = use_state(String::new);

    let submit = {
        let text = text.clone();
        let on_type = props.on_type.clone();
        Callback::from(move |_: ()| {
            if !text.trim().is_empty() {
                on_type.emit((*text).clone());
                text.set(String::new());
            }
        })
    };

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };
    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };
    let send_cb = {
        let submit = submit.clone();
        Callback::from(move |_| submit.emit(()))
    };

    let can_send = !props.disabled && !text.trim().is_empty();

    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div style="display:flex; gap:8px;">
            <input
                type="text"
                placeholder="Type text to send..."
                value={(*text).clone()}
                {oninput}
                {onkeydown}
                disabled={props.disabled}
                style="flex:1; padding:12px; background:#0d1117; border:1px solid #30363d; border-radius:8px; color:inherit;"
            />
            <button style="padding:12px 18px;" onclick={send_cb} disabled={!can_send}>{"➤"}</button>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Special Keys"}</div>
            <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:8px;">
                { for SPECIAL_KEYS.iter().map(|(label, key)| {
                    let cb = props.on_key.clone();
                    let key = (*key).to_string();
                    html! {<button
                        style="padding:10px 6px;"
                        onclick={Callback::from(move |_| cb.emit(key.clone()))}
                        disabled={props.disabled}
                    >{ *label }</button>}
                }) }
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Shortcuts"}</div>
            <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:8px;">
                { for HOTKEYS.iter().map(|(label, keys)| {
                    let cb = props.on_hotkey.clone();
                    let keys: Vec<String> = keys.iter().map(|k| (*k).to_string()).collect();
                    html! {<button
                        style="padding:10px 6px;"
                        onclick={Callback::from(move |_| cb.emit(keys.clone()))}
                        disabled={props.disabled}
                    >{ *label }</button>}
                }) }
            </div>
        </div>
    </div>}
}
