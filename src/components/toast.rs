use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: Option<String>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(msg) = &props.message else {
        return html! {};
    };
    html! {<div style="position:fixed; bottom:84px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:10px 16px; font-size:14px; z-index:100;">
        { msg.clone() }
    </div>}
}
