//! Wire model for the PC control protocol.
//! Every frame is a JSON envelope `{"event": <name>, "data": {...}}`; the
//! event names here match the handlers the desktop agent registers.

use serde::{Deserialize, Serialize};

/// Cursor speed multiplier applied by the remote side to every move delta.
pub const MOUSE_SENSITIVITY: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    /// Double left click, resolved server-side.
    Double,
}

/// A named command sent to the PC. Commands without a payload still carry an
/// empty `data` object so the agent can treat every frame uniformly.
/// Client-to-server only, so it is never deserialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Command {
    MouseMove { dx: f64, dy: f64, sensitivity: f64 },
    MouseClick { button: MouseButton },
    MouseScroll { delta: i32 },

    KeyboardType { text: String },
    KeyboardKey { key: String },
    KeyboardHotkey { keys: Vec<String> },

    SystemShutdown {},
    SystemRestart {},
    SystemSleep {},
    SystemLock {},

    VolumeSet { level: u32 },
    VolumeUp {},
    VolumeDown {},
    VolumeMute {},
    VolumeGet {},

    MediaPlayPause {},
    MediaNext {},
    MediaPrev {},
    MediaStop {},

    SlideNext {},
    SlidePrev {},
    SlideshowStart { from_current: bool },
    SlideshowEnd {},
    PageUp {},
    PageDown {},

    BrowserSearch { query: String },
    BrowserUrl { url: String },
    BrowserGoogle {},
}

impl Command {
    pub fn mouse_move(dx: f64, dy: f64) -> Self {
        Command::MouseMove {
            dx,
            dy,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }

    /// Volume is a percentage; out-of-range requests are clamped here rather
    /// than trusting every caller.
    pub fn volume_set(level: u32) -> Self {
        Command::VolumeSet {
            level: level.min(100),
        }
    }
}

/// Events pushed by the PC. Unrecognized event names decode to `Unknown` and
/// are logged rather than failing the frame, whether or not they carry a
/// payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerEvent {
    ConnectionStatus {
        status: String,
        message: Option<String>,
    },
    VolumeUpdate {
        level: u32,
    },
    CommandResponse {
        status: String,
        command: String,
    },
    Unknown,
}

/// The raw frame shape; `data` may be absent entirely.
#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct StatusData {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct VolumeData {
    level: u32,
}

#[derive(Deserialize)]
struct ResponseData {
    status: String,
    command: String,
}

impl<'de> Deserialize<'de> for ServerEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let envelope = Envelope::deserialize(deserializer)?;
        let event = match envelope.event.as_str() {
            "connection_status" => {
                let d: StatusData =
                    serde_json::from_value(envelope.data).map_err(D::Error::custom)?;
                ServerEvent::ConnectionStatus {
                    status: d.status,
                    message: d.message,
                }
            }
            "volume_update" => {
                let d: VolumeData =
                    serde_json::from_value(envelope.data).map_err(D::Error::custom)?;
                ServerEvent::VolumeUpdate { level: d.level }
            }
            "command_response" => {
                let d: ResponseData =
                    serde_json::from_value(envelope.data).map_err(D::Error::custom)?;
                ServerEvent::CommandResponse {
                    status: d.status,
                    command: d.command,
                }
            }
            _ => ServerEvent::Unknown,
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mouse_move_carries_deltas_and_sensitivity() {
        let cmd = Command::mouse_move(5.0, -3.0);
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"event": "mouse_move", "data": {"dx": 5.0, "dy": -3.0, "sensitivity": 1.5}})
        );
    }

    #[test]
    fn payload_free_commands_still_carry_an_empty_data_object() {
        assert_eq!(
            serde_json::to_value(Command::MediaPlayPause {}).unwrap(),
            json!({"event": "media_play_pause", "data": {}})
        );
        assert_eq!(
            serde_json::to_value(Command::SystemShutdown {}).unwrap(),
            json!({"event": "system_shutdown", "data": {}})
        );
    }

    #[test]
    fn click_buttons_serialize_lowercase() {
        let cmd = Command::MouseClick {
            button: MouseButton::Double,
        };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"event": "mouse_click", "data": {"button": "double"}})
        );
    }

    #[test]
    fn volume_set_clamps_to_percent_range() {
        assert_eq!(Command::volume_set(180), Command::VolumeSet { level: 100 });
        assert_eq!(Command::volume_set(40), Command::VolumeSet { level: 40 });
    }

    #[test]
    fn server_events_decode_from_the_envelope() {
        let ev: ServerEvent =
            serde_json::from_str(r#"{"event":"volume_update","data":{"level":62}}"#).unwrap();
        assert_eq!(ev, ServerEvent::VolumeUpdate { level: 62 });

        let ev: ServerEvent = serde_json::from_str(
            r#"{"event":"connection_status","data":{"status":"connected","message":"Successfully connected to PC"}}"#,
        )
        .unwrap();
        assert_eq!(
            ev,
            ServerEvent::ConnectionStatus {
                status: "connected".into(),
                message: Some("Successfully connected to PC".into()),
            }
        );
    }

    #[test]
    fn command_response_ignores_extra_fields() {
        let ev: ServerEvent = serde_json::from_str(
            r#"{"event":"command_response","data":{"status":"executed","command":"search","query":"rust"}}"#,
        )
        .unwrap();
        assert_eq!(
            ev,
            ServerEvent::CommandResponse {
                status: "executed".into(),
                command: "search".into(),
            }
        );
    }

    #[test]
    fn unknown_server_events_are_tolerated() {
        // A payload map must not break the fallback; this is what the agent
        // always sends.
        let ev: ServerEvent =
            serde_json::from_str(r#"{"event":"clipboard_update","data":{"text":"hi"}}"#).unwrap();
        assert_eq!(ev, ServerEvent::Unknown);

        let ev: ServerEvent =
            serde_json::from_str(r#"{"event":"heartbeat","data":{}}"#).unwrap();
        assert_eq!(ev, ServerEvent::Unknown);

        // ...and neither must a frame with no data at all.
        let ev: ServerEvent = serde_json::from_str(r#"{"event":"heartbeat"}"#).unwrap();
        assert_eq!(ev, ServerEvent::Unknown);
    }

    #[test]
    fn known_event_with_malformed_payload_is_an_error_not_unknown() {
        let res: Result<ServerEvent, _> =
            serde_json::from_str(r#"{"event":"volume_update","data":{"level":"loud"}}"#);
        assert!(res.is_err());
    }
}
