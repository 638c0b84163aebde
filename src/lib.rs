pub mod config;
pub mod i18n;
pub mod notification;
pub mod platform;
pub mod server;
pub mod session;
pub mod translation;
pub mod widget;
