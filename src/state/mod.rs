pub mod prompt;
pub mod storage;

pub use prompt::{Prompt, PromptResult};
pub use storage::session_store;
