use web_sys::HtmlInputElement;
use yew::prelude::*;

const QUICK_LINKS: &[(&str, &str, &str)] = &[
    ("📺", "YouTube", "youtube.com"),
    ("✉️", "Gmail", "gmail.com"),
    ("💻", "GitHub", "github.com"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct SearchPanelProps {
    pub on_search: Callback<String>,
    pub on_open_url: Callback<String>,
    pub on_open_google: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let query = use_state(String::new);
    let url = use_state(String::new);

    let submit_search = {
        let query = query.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: ()| {
            let q = query.trim().to_string();
            if !q.is_empty() {
                on_search.emit(q);
                query.set(String::new());
            }
        })
    };
    let submit_url = {
        let url = url.clone();
        let on_open_url = props.on_open_url.clone();
        Callback::from(move |_: ()| {
            let u = url.trim().to_string();
            if !u.is_empty() {
                on_open_url.emit(u);
                url.set(String::new());
            }
        })
    };

    let query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            url.set(input.value());
        })
    };
    let query_keydown = {
        let submit = submit_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };
    let url_keydown = {
        let submit = submit_url.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };
    let search_btn = {
        let submit = submit_search.clone();
        Callback::from(move |_| submit.emit(()))
    };
    let url_btn = {
        let submit = submit_url.clone();
        Callback::from(move |_| submit.emit(()))
    };
    let google_cb = {
        let cb = props.on_open_google.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let input_style = "flex:1; padding:12px; background:#0d1117; border:1px solid #30363d; border-radius:8px; color:inherit;";

    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Web Search"}</div>
            <div style="display:flex; gap:8px;">
                <input
                    type="text"
                    placeholder="Search on Google..."
                    value={(*query).clone()}
                    oninput={query_input}
                    onkeydown={query_keydown}
                    disabled={props.disabled}
                    style={input_style}
                />
                <button style="padding:12px 16px;" onclick={search_btn} disabled={props.disabled || query.trim().is_empty()}>{"🔍"}</button>
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Open URL"}</div>
            <div style="display:flex; gap:8px;">
                <input
                    type="url"
                    placeholder="Enter URL (e.g., youtube.com)"
                    value={(*url).clone()}
                    oninput={url_input}
                    onkeydown={url_keydown}
                    disabled={props.disabled}
                    style={input_style}
                />
                <button style="padding:12px 16px;" onclick={url_btn} disabled={props.disabled || url.trim().is_empty()}>{"🌐"}</button>
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Quick Actions"}</div>
            <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:8px;">
                <button style="padding:14px 8px;" onclick={google_cb} disabled={props.disabled}>
                    {"🔍 Open Google"}
                </button>
                { for QUICK_LINKS.iter().map(|(icon, label, target)| {
                    let cb = props.on_open_url.clone();
                    let target = (*target).to_string();
                    html! {<button
                        style="padding:14px 8px;"
                        onclick={Callback::from(move |_| cb.emit(target.clone()))}
                        disabled={props.disabled}
                    >{ format!("{icon} {label}") }</button>}
                }) }
            </div>
        </div>
    </div>}
}
