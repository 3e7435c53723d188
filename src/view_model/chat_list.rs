use crate::data::{self, Conversation};

pub const TITLE: &str = "FinraLink Chat";

/// Display-ready projection of one conversation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRow {
    pub conversation: Conversation,
}

impl From<Conversation> for ConversationRow {
    fn from(conversation: Conversation) -> Self {
        Self { conversation }
    }
}

impl ConversationRow {
    pub fn contact_name(&self) -> &str {
        &self.conversation.contact_name
    }

    /// `"{sender}: {last message}"`, ellipsized to one line by the view.
    pub fn preview(&self) -> String {
        format!("{}: {}", self.conversation.sender, self.conversation.last_message)
    }

    pub fn time(&self) -> &str {
        &self.conversation.time
    }

    /// Literal unread count, uncapped. `None` hides the badge.
    pub fn unread_badge(&self) -> Option<String> {
        match self.conversation.unread_count {
            0 => None,
            n => Some(n.to_string()),
        }
    }

    pub fn shows_presence(&self) -> bool {
        self.conversation.is_online
    }

    pub fn shows_seen(&self) -> bool {
        self.conversation.is_seen
    }

    pub fn avatar_icon(&self) -> &'static str {
        self.conversation.profile_image.icon_name()
    }
}

/// Contents of the conversation list screen, read once when built.
#[derive(Debug, Clone)]
pub struct ChatList {
    rows: Vec<ConversationRow>,
}

impl ChatList {
    pub fn load() -> Self {
        Self::from_conversations(data::list_conversations())
    }

    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        Self { rows: conversations.into_iter().map(ConversationRow::from).collect() }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn rows(&self) -> &[ConversationRow] {
        &self.rows
    }

    /// Conversation behind the row at `index`, as reported by the list widget.
    pub fn conversation_at(&self, index: i32) -> Option<&Conversation> {
        let index = usize::try_from(index).ok()?;
        self.rows.get(index).map(|row| &row.conversation)
    }
}
