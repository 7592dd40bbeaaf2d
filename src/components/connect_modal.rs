use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectModalProps {
    pub show: bool,
    /// Prefill, typically the last address that connected successfully.
    pub initial_addr: String,
    pub on_connect: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(ConnectModal)]
pub fn connect_modal(props: &ConnectModalProps) -> Html {
    let addr = use_state(String::new);

    // Re-seed the input each time the dialog opens.
    {
        let addr = addr.clone();
        let initial = props.initial_addr.clone();
        use_effect_with(props.show, move |shown| {
            if *shown {
                addr.set(initial);
            }
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let submit = {
        let addr = addr.clone();
        let on_connect = props.on_connect.clone();
        Callback::from(move |_: ()| {
            let value = addr.trim().to_string();
            if !value.is_empty() {
                on_connect.emit(value);
            }
        })
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop_cb = Callback::from(|e: MouseEvent| e.stop_propagation());
    let oninput = {
        let addr = addr.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            addr.set(input.value());
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
    let connect_btn = {
        let submit = submit.clone();
        Callback::from(move |_| submit.emit(()))
    };

    html! {<div
        style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.8); padding:20px; z-index:1000;"
        onclick={close_cb.clone()}
    >
        <div
            style="background:#161b22; border:1px solid #30363d; border-radius:16px; padding:24px; width:100%; max-width:320px; display:flex; flex-direction:column; gap:16px;"
            onclick={stop_cb}
        >
            <h2 style="margin:0; font-size:18px;">{"Connect to PC"}</h2>
            <p style="margin:0; font-size:14px; opacity:0.7;">
                {"Enter the address shown in the PC Control agent window."}
            </p>
            <input
                type="text"
                placeholder="e.g., 192.168.1.100"
                value={(*addr).clone()}
                {oninput}
                {onkeydown}
                style="width:100%; padding:12px; background:#0d1117; border:1px solid #30363d; border-radius:8px; color:inherit;"
            />
            <div style="display:flex; gap:12px;">
                <button style="flex:1; padding:10px;" onclick={close_cb}>{"Cancel"}</button>
                <button style="flex:1; padding:10px;" onclick={connect_btn} disabled={addr.trim().is_empty()}>{"Connect"}</button>
            </div>
        </div>
    </div>}
}
