//! Touch surface that drives the remote cursor, plus explicit click buttons.
//! Raw touch events are fed through `GestureState`; the resulting intents go
//! out through the callback props.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::state::gesture::{Contact, GestureIntent, GestureState};

#[derive(Properties, PartialEq, Clone)]
pub struct TouchPadProps {
    pub on_move: Callback<(f64, f64)>,
    pub on_left_click: Callback<()>,
    pub on_right_click: Callback<()>,
    pub on_double_click: Callback<()>,
    pub on_scroll: Callback<i32>,
    #[prop_or_default]
    pub disabled: bool,
}

fn contacts_of(e: &TouchEvent, pad: &HtmlElement) -> Vec<Contact> {
    let rect = pad.get_bounding_client_rect();
    let touches = e.touches();
    let mut out = Vec::with_capacity(touches.length() as usize);
    for i in 0..touches.length() {
        if let Some(t) = touches.item(i) {
            out.push(Contact::new(
                t.client_x() as f64 - rect.left(),
                t.client_y() as f64 - rect.top(),
            ));
        }
    }
    out
}

#[function_component(TouchPad)]
pub fn touch_pad(props: &TouchPadProps) -> Html {
    let pad_ref = use_node_ref();
    let gesture = use_mut_ref(GestureState::default);
    // Listeners are attached once on mount; mirror the latest props into a
    // ref so the closures never act on stale callbacks or disabled state.
    let props_ref = use_mut_ref(|| props.clone());
    let active = use_state(|| false);
    let touch_pos = use_state(|| (0.0f64, 0.0f64));

    {
        let props_ref = props_ref.clone();
        use_effect_with(props.clone(), move |p| {
            *props_ref.borrow_mut() = p.clone();
            || ()
        });
    }

    {
        let pad_ref = pad_ref.clone();
        let gesture = gesture.clone();
        let props_ref = props_ref.clone();
        let active = active.clone();
        let touch_pos = touch_pos.clone();
        use_effect_with((), move |_| {
            let pad: HtmlElement = pad_ref
                .cast::<HtmlElement>()
                .expect("pad_ref not attached to an element");

            let start_cb = {
                let pad = pad.clone();
                let gesture = gesture.clone();
                let props_ref = props_ref.clone();
                let active = active.clone();
                let touch_pos = touch_pos.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if props_ref.borrow().disabled {
                        return;
                    }
                    let contacts = contacts_of(&e, &pad);
                    if let Some(first) = contacts.first() {
                        active.set(true);
                        touch_pos.set((first.x, first.y));
                    }
                    gesture.borrow_mut().touch_start(&contacts);
                }) as Box<dyn FnMut(_)>)
            };
            pad.add_event_listener_with_callback(
                "touchstart",
                start_cb.as_ref().unchecked_ref(),
            )
            .ok();

            let move_cb = {
                let pad = pad.clone();
                let gesture = gesture.clone();
                let props_ref = props_ref.clone();
                let touch_pos = touch_pos.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    let p = props_ref.borrow().clone();
                    if p.disabled {
                        return;
                    }
                    let contacts = contacts_of(&e, &pad);
                    if let Some(first) = contacts.first() {
                        touch_pos.set((first.x, first.y));
                    }
                    match gesture.borrow_mut().touch_move(&contacts) {
                        Some(GestureIntent::Move { dx, dy }) => p.on_move.emit((dx, dy)),
                        Some(GestureIntent::Scroll { delta }) => p.on_scroll.emit(delta),
                        _ => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pad.add_event_listener_with_callback("touchmove", move_cb.as_ref().unchecked_ref())
                .ok();

            let end_cb = {
                let gesture = gesture.clone();
                let props_ref = props_ref.clone();
                let active = active.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let p = props_ref.borrow().clone();
                    if p.disabled {
                        return;
                    }
                    if e.touches().length() == 0 {
                        active.set(false);
                        let intent = gesture.borrow_mut().touch_end(js_sys::Date::now());
                        if intent == Some(GestureIntent::DoubleClick) {
                            p.on_double_click.emit(());
                        }
                    } else {
                        // A finger lifted mid-gesture; the leftover contact
                        // must not continue as a cursor move.
                        gesture.borrow_mut().cancel();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            pad.add_event_listener_with_callback("touchend", end_cb.as_ref().unchecked_ref())
                .ok();

            let cancel_cb = {
                let gesture = gesture.clone();
                let active = active.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    gesture.borrow_mut().cancel();
                    active.set(false);
                }) as Box<dyn FnMut(_)>)
            };
            pad.add_event_listener_with_callback(
                "touchcancel",
                cancel_cb.as_ref().unchecked_ref(),
            )
            .ok();

            move || {
                let _ = pad.remove_event_listener_with_callback(
                    "touchstart",
                    start_cb.as_ref().unchecked_ref(),
                );
                let _ = pad.remove_event_listener_with_callback(
                    "touchmove",
                    move_cb.as_ref().unchecked_ref(),
                );
                let _ = pad.remove_event_listener_with_callback(
                    "touchend",
                    end_cb.as_ref().unchecked_ref(),
                );
                let _ = pad.remove_event_listener_with_callback(
                    "touchcancel",
                    cancel_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let left_cb = {
        let cb = props.on_left_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let right_cb = {
        let cb = props.on_right_click.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let hint = if props.disabled {
        "Connect to control"
    } else {
        "Swipe to move cursor"
    };
    let (tx, ty) = *touch_pos;

    html! {<div style="display:flex; flex-direction:column; gap:12px; height:100%;">
        <div
            ref={pad_ref}
            style="position:relative; flex:1; min-height:280px; background:#0d1117; border:1px solid #30363d; border-radius:12px; overflow:hidden; touch-action:none; display:flex; align-items:center; justify-content:center;"
        >
            <span style="font-size:14px; opacity:0.55; pointer-events:none;">{ hint }</span>
            { if *active { html! {
                <div style={format!(
                    "position:absolute; left:{}px; top:{}px; width:60px; height:60px; border-radius:50%; background:rgba(88,166,255,0.25); border:1px solid #58a6ff; pointer-events:none;",
                    tx - 30.0, ty - 30.0
                )} />
            } } else { html! {} } }
        </div>
        <div style="display:flex; gap:12px;">
            <button style="flex:1; padding:14px;" onclick={left_cb} disabled={props.disabled}>{"Left Click"}</button>
            <button style="flex:1; padding:14px;" onclick={right_cb} disabled={props.disabled}>{"Right Click"}</button>
        </div>
    </div>}
}
