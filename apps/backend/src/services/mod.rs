pub mod sessions;
pub mod words;
