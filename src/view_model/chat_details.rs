use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use crate::data::{self, Message};
use crate::session::SessionContext;
use crate::view_model::composer::Composer;

/// What happens to a composed message once the send hook fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendMode {
    /// The hook has no handler: the message list stays as it was.
    #[default]
    Discard,
    /// Append to the in-memory list as an own message. Nothing is transmitted.
    AppendLocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleSide {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBubble {
    pub text: String,
    pub own: bool,
}

impl MessageBubble {
    pub fn side(&self) -> BubbleSide {
        if self.own { BubbleSide::End } else { BubbleSide::Start }
    }

    pub fn css_class(&self) -> &'static str {
        if self.own { "bubble-own" } else { "bubble-other" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsHeader {
    pub contact_name: String,
    pub is_online: bool,
}

impl DetailsHeader {
    pub fn presence_label(&self) -> &'static str {
        if self.is_online { "Online" } else { "Offline" }
    }
}

/// State of one open conversation screen.
#[derive(Debug)]
pub struct ChatDetails {
    contact_name: String,
    session: SessionContext,
    send_mode: SendMode,
    messages: Vec<Message>,
    composer: Composer,
    local_seq: u32,
}

impl ChatDetails {
    pub fn open(contact_name: impl Into<String>, session: SessionContext, send_mode: SendMode) -> Self {
        let contact_name = contact_name.into();
        if data::find_conversation(&contact_name).is_none() {
            log::debug!("opening details for unlisted contact {contact_name:?}");
        }
        let messages = data::seed_messages(&session);
        Self {
            contact_name,
            session,
            send_mode,
            messages,
            composer: Composer::default(),
            local_seq: 0,
        }
    }

    pub fn header(&self) -> DetailsHeader {
        // Presence is not tracked per contact; the header always reads online.
        DetailsHeader { contact_name: self.contact_name.clone(), is_online: true }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn bubble(&self, message: &Message) -> MessageBubble {
        MessageBubble {
            text: message.text.clone(),
            own: self.session.is_own(&message.sender_id),
        }
    }

    /// Bubbles top to bottom, newest last.
    pub fn bubbles(&self) -> Vec<MessageBubble> {
        self.messages().iter().map(|m| self.bubble(m)).collect()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_text(text);
    }

    /// Sends the current draft. Returns the bubble to render when the send
    /// mode added one to the list.
    pub fn send(&mut self) -> Option<MessageBubble> {
        let mode = self.send_mode;
        let sent = self.composer.submit(|text| {
            log::debug!("send hook fired ({} chars, {mode:?})", text.chars().count());
        })?;
        match mode {
            SendMode::Discard => None,
            SendMode::AppendLocal => {
                self.local_seq += 1;
                let message = Message::new(
                    format!("local-{}", self.local_seq),
                    self.session.current_user_id.clone(),
                    sent,
                    now_millis(),
                );
                let bubble = self.bubble(&message);
                self.messages.push(message);
                Some(bubble)
            }
        }
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::CONTACT_ID;

    fn open(mode: SendMode) -> ChatDetails {
        ChatDetails::open("Anna", SessionContext::default(), mode)
    }

    #[test]
    fn own_messages_follow_session_identity() {
        let details = open(SendMode::Discard);
        let own = details.bubble(&Message::new("x", "user_123", "hi", 0));
        let other = details.bubble(&Message::new("y", CONTACT_ID, "hey", 0));
        assert!(own.own);
        assert_eq!(own.side(), BubbleSide::End);
        assert!(!other.own);
        assert_eq!(other.side(), BubbleSide::Start);
        assert_eq!(other.css_class(), "bubble-other");
    }

    #[test]
    fn another_session_sees_fixture_as_its_own() {
        let details = ChatDetails::open("Anna", SessionContext::new("someone"), SendMode::Discard);
        let own: Vec<bool> = details.bubbles().iter().map(|b| b.own).collect();
        assert_eq!(own, vec![false, true, false, true, false]);
    }

    #[test]
    fn newest_message_renders_last() {
        let details = open(SendMode::Discard);
        let bubbles = details.bubbles();
        assert_eq!(bubbles.first().map(|b| b.text.as_str()), Some("Hey, are you there?"));
        assert_eq!(bubbles.last().map(|b| b.text.as_str()), Some("Thanks!"));
    }

    #[test]
    fn header_reads_online_for_any_contact() {
        let header = ChatDetails::open("", SessionContext::default(), SendMode::Discard).header();
        assert_eq!(header.contact_name, "");
        assert_eq!(header.presence_label(), "Online");
        let offline = DetailsHeader { contact_name: "Alex".into(), is_online: false };
        assert_eq!(offline.presence_label(), "Offline");
    }

    #[test]
    fn discard_mode_clears_draft_without_touching_list() {
        let mut details = open(SendMode::Discard);
        details.set_draft("Sure, give me a sec.");
        assert_eq!(details.send(), None);
        assert_eq!(details.composer().text(), "");
        assert_eq!(details.messages().len(), 5);
    }

    #[test]
    fn blank_draft_is_kept() {
        let mut details = open(SendMode::AppendLocal);
        details.set_draft("   ");
        assert_eq!(details.send(), None);
        assert_eq!(details.composer().text(), "   ");
        assert_eq!(details.messages().len(), 5);
    }

    #[test]
    fn append_mode_adds_own_message() {
        let mut details = open(SendMode::AppendLocal);
        details.set_draft("On my way");
        let bubble = details.send().unwrap();
        assert!(bubble.own);
        assert_eq!(bubble.text, "On my way");
        assert_eq!(details.messages().len(), 6);
        let last = details.messages().last().unwrap();
        assert_eq!(last.id, "local-1");
        assert_eq!(last.sender_id, "user_123");
        assert_eq!(details.composer().text(), "");
    }

    #[test]
    fn send_mode_parses_from_settings_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: SendMode,
        }
        let w: Wrapper = toml::from_str("mode = \"append_local\"").unwrap();
        assert_eq!(w.mode, SendMode::AppendLocal);
        let w: Wrapper = toml::from_str("mode = \"discard\"").unwrap();
        assert_eq!(w.mode, SendMode::Discard);
    }
}
