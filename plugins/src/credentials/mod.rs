mod env;

pub use env::EnvCredentials;
