pub mod client;
pub mod documents;
pub mod settings;
