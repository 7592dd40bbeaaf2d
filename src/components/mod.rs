pub mod app;
pub mod connect_modal;
pub mod media_controls;
pub mod search_panel;
pub mod system_controls;
pub mod toast;
pub mod touch_pad;
pub mod virtual_keyboard;
