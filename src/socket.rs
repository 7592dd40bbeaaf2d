//! WebSocket client for the desktop agent.
//! Owns the socket, reports status changes to the UI, decodes incoming
//! frames, and retries a few times after an unexpected drop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};
use yew::Callback;

use crate::model::{Command, ServerEvent};
use crate::state::connection::{ConnectionStatus, ReconnectPolicy};
use crate::util::clog;

pub struct SocketClient {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    ws: Option<WebSocket>,
    host: String,
    port: u16,
    policy: ReconnectPolicy,
    /// Set while the user asked for the teardown; suppresses reconnection.
    manual_close: bool,
    on_status: Callback<ConnectionStatus>,
    on_event: Callback<ServerEvent>,
    // Handler closures must outlive the socket they are attached to.
    _on_open: Option<Closure<dyn FnMut()>>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
    _on_error: Option<Closure<dyn FnMut(ErrorEvent)>>,
    _retry: Option<Closure<dyn FnMut()>>,
    /// Handle of a scheduled reconnect timer. Must be cleared before the
    /// retry closure is dropped, or the browser would invoke a dead closure.
    retry_timer: Option<i32>,
}

impl SocketClient {
    pub fn new(on_status: Callback<ConnectionStatus>, on_event: Callback<ServerEvent>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                ws: None,
                host: String::new(),
                port: 0,
                policy: ReconnectPolicy::default(),
                manual_close: true,
                on_status,
                on_event,
                _on_open: None,
                _on_message: None,
                _on_close: None,
                _on_error: None,
                _retry: None,
                retry_timer: None,
            })),
        }
    }

    /// Open (or re-open) the link. Any previous socket is detached first so
    /// its close event cannot trigger a reconnect to the old address.
    pub fn connect(&self, host: &str, port: u16) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(ws) = inner.ws.take() {
                detach(&ws);
            }
            inner.host = host.to_string();
            inner.port = port;
            inner.manual_close = false;
            cancel_retry(&mut inner);
            inner.policy.reset();
        }
        set_status(&self.inner, ConnectionStatus::Connecting);
        open_socket(&self.inner);
    }

    pub fn disconnect(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.manual_close = true;
            cancel_retry(&mut inner);
            if let Some(ws) = inner.ws.take() {
                detach(&ws);
            }
        }
        set_status(&self.inner, ConnectionStatus::Disconnected);
    }

    /// Send a command. Silently dropped unless the socket is open; the UI is
    /// disabled while disconnected, so anything arriving here mid-drop is a
    /// race not worth surfacing.
    pub fn emit(&self, cmd: &Command) {
        let inner = self.inner.borrow();
        let Some(ws) = &inner.ws else {
            return;
        };
        if ws.ready_state() != WebSocket::OPEN {
            return;
        }
        match serde_json::to_string(cmd) {
            Ok(frame) => {
                if ws.send_with_str(&frame).is_err() {
                    clog("socket: send failed");
                }
            }
            Err(err) => clog(&format!("socket: encode failed: {err}")),
        }
    }
}

/// Drop all handlers and close; used when a socket is replaced or torn down.
fn detach(ws: &WebSocket) {
    ws.set_onopen(None);
    ws.set_onmessage(None);
    ws.set_onclose(None);
    ws.set_onerror(None);
    let _ = ws.close();
}

/// Cancel a pending reconnect before its closure goes away.
fn cancel_retry(inner: &mut Inner) {
    if let Some(handle) = inner.retry_timer.take() {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
    inner._retry = None;
}

fn set_status(inner: &Rc<RefCell<Inner>>, status: ConnectionStatus) {
    // Clone the callback out so the emit (which may re-enter the client
    // from a re-render) runs without the RefCell borrowed.
    let on_status = inner.borrow().on_status.clone();
    on_status.emit(status);
}

fn open_socket(inner: &Rc<RefCell<Inner>>) {
    let url = {
        let guard = inner.borrow();
        format!("ws://{}:{}/ws", guard.host, guard.port)
    };
    let ws = match WebSocket::new(&url) {
        Ok(ws) => ws,
        Err(err) => {
            clog(&format!("socket: failed to open {url}: {err:?}"));
            set_status(inner, ConnectionStatus::Disconnected);
            return;
        }
    };

    let on_open = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move || {
            let on_status = {
                let mut guard = inner.borrow_mut();
                guard.policy.reset();
                guard.on_status.clone()
            };
            on_status.emit(ConnectionStatus::Connected);
        }) as Box<dyn FnMut()>)
    };
    ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

    let on_message = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move |e: MessageEvent| {
            let Some(text) = e.data().as_string() else {
                return;
            };
            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => {
                    let on_event = inner.borrow().on_event.clone();
                    on_event.emit(event);
                }
                Err(err) => clog(&format!("socket: bad frame: {err}")),
            }
        }) as Box<dyn FnMut(MessageEvent)>)
    };
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let on_close = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move |_e: CloseEvent| {
            handle_drop(&inner);
        }) as Box<dyn FnMut(CloseEvent)>)
    };
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    // The browser fires close right after error; close does the bookkeeping.
    let on_error = Closure::wrap(Box::new(move |_e: ErrorEvent| {
        clog("socket: connection error");
    }) as Box<dyn FnMut(ErrorEvent)>);
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let mut guard = inner.borrow_mut();
    guard.ws = Some(ws);
    guard._on_open = Some(on_open);
    guard._on_message = Some(on_message);
    guard._on_close = Some(on_close);
    guard._on_error = Some(on_error);
}

/// Unexpected close: report it and, within the retry budget, schedule a
/// reconnect to the same address.
fn handle_drop(inner: &Rc<RefCell<Inner>>) {
    let (on_status, retry_delay) = {
        let mut guard = inner.borrow_mut();
        guard.ws = None;
        let delay = if guard.manual_close {
            None
        } else {
            guard.policy.next_delay_ms()
        };
        (guard.on_status.clone(), delay)
    };
    on_status.emit(ConnectionStatus::Disconnected);

    let Some(delay) = retry_delay else {
        return;
    };
    let retry = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move || {
            // The timer has fired; its handle is dead.
            inner.borrow_mut().retry_timer = None;
            set_status(&inner, ConnectionStatus::Connecting);
            open_socket(&inner);
        }) as Box<dyn FnMut()>)
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let handle = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        retry.as_ref().unchecked_ref(),
        delay as i32,
    ) {
        Ok(handle) => handle,
        Err(_) => {
            clog("socket: failed to schedule reconnect");
            return;
        }
    };
    let mut guard = inner.borrow_mut();
    guard.retry_timer = Some(handle);
    guard._retry = Some(retry);
}
