//! Toolkit-free screen state. The `ui` module renders these.

pub mod chat_details;
pub mod chat_list;
pub mod composer;

pub use chat_details::{BubbleSide, ChatDetails, MessageBubble, SendMode};
pub use chat_list::{ChatList, ConversationRow};
