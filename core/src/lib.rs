//! Core of `boom`: run a command, mirror its output, keep the tail of each
//! stream, and report failures to a notification channel.

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod report;
pub mod runner;
pub mod tail;
