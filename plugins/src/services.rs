//! The collaborators a run needs to report a failure.
use boom_core::api::{ConfigProvider, CredentialProvider, Notifier};

pub struct Services {
    pub notifier: Box<dyn Notifier>,
    pub credentials: Box<dyn CredentialProvider>,
    pub config: Box<dyn ConfigProvider>,
}
