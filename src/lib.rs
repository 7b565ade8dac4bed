pub mod authors;
pub mod cast;
pub mod config;
pub mod content;
pub mod dialogue;
pub mod issue;
pub mod masthead;
pub mod prose;
pub mod weather;
