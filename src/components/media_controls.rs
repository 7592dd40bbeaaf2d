use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MediaControlsProps {
    pub on_play_pause: Callback<()>,
    pub on_next: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_stop: Callback<()>,
    pub on_slide_next: Callback<()>,
    pub on_slide_prev: Callback<()>,
    /// Payload: start from the current slide instead of the beginning.
    pub on_slideshow_start: Callback<bool>,
    pub on_slideshow_end: Callback<()>,
    pub on_page_up: Callback<()>,
    pub on_page_down: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

fn unit_cb(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

#[function_component(MediaControls)]
pub fn media_controls(props: &MediaControlsProps) -> Html {
    let play_cb = unit_cb(&props.on_play_pause);
    let next_cb = unit_cb(&props.on_next);
    let prev_cb = unit_cb(&props.on_prev);
    let stop_cb = unit_cb(&props.on_stop);
    let slide_next_cb = unit_cb(&props.on_slide_next);
    let slide_prev_cb = unit_cb(&props.on_slide_prev);
    let slideshow_end_cb = unit_cb(&props.on_slideshow_end);
    let page_up_cb = unit_cb(&props.on_page_up);
    let page_down_cb = unit_cb(&props.on_page_down);
    let start_cb = {
        let cb = props.on_slideshow_start.clone();
        Callback::from(move |_| cb.emit(false))
    };
    let start_current_cb = {
        let cb = props.on_slideshow_start.clone();
        Callback::from(move |_| cb.emit(true))
    };

    let media_btn = "padding:14px 18px; font-size:20px;";
    let slide_btn = "flex:1; padding:12px 8px;";

    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Media Playback"}</div>
            <div style="display:flex; justify-content:center; gap:10px;">
                <button style={media_btn} onclick={prev_cb} disabled={props.disabled}>{"⏮"}</button>
                <button style={media_btn} onclick={stop_cb} disabled={props.disabled}>{"⏹"}</button>
                <button style={format!("{media_btn} font-size:26px;")} onclick={play_cb} disabled={props.disabled}>{"⏯"}</button>
                <button style={media_btn} onclick={next_cb} disabled={props.disabled}>{"⏭"}</button>
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Presentation Controls"}</div>
            <div style="display:flex; gap:8px;">
                <button style={slide_btn} onclick={slide_prev_cb} disabled={props.disabled}>{"◀ Previous"}</button>
                <button style={slide_btn} onclick={start_cb} disabled={props.disabled}>{"▶ Start (F5)"}</button>
                <button style={slide_btn} onclick={slide_next_cb} disabled={props.disabled}>{"Next ▶"}</button>
            </div>
            <div style="display:flex; gap:8px; margin-top:8px;">
                <button style={slide_btn} onclick={start_current_cb} disabled={props.disabled}>{"⏩ Current (Shift+F5)"}</button>
                <button style={slide_btn} onclick={slideshow_end_cb} disabled={props.disabled}>{"✖ End (Esc)"}</button>
            </div>
        </div>

        <div>
            <div style="font-size:12px; opacity:0.7; margin-bottom:8px;">{"Page Navigation"}</div>
            <div style="display:flex; gap:8px;">
                <button style={slide_btn} onclick={page_up_cb} disabled={props.disabled}>{"⬆ Page Up"}</button>
                <button style={slide_btn} onclick={page_down_cb} disabled={props.disabled}>{"⬇ Page Down"}</button>
            </div>
        </div>
    </div>}
}
