mod dispatch;
mod r#trait;

pub use dispatch::{dispatch, DispatchOutcome, SkipReason};
pub use r#trait::{ConfigProvider, CredentialProvider, Notifier};
