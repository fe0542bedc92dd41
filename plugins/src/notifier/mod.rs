pub mod slack;

pub use slack::{SlackNotifier, SLACK_API_BASE};
