pub mod catalog;
pub mod chat;
pub mod normalizer;
pub mod profile;
pub mod source;
