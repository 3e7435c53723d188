pub mod fixtures;
pub mod models;

pub use fixtures::{find_conversation, list_conversations, seed_messages};
pub use models::{Conversation, Message, ProfileImage};
