//! Portfolio Assist — chatbot and contact-form backend for a personal
//! portfolio site.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod store;
