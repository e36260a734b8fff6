pub mod document;
pub mod extraction;
pub mod settings;
