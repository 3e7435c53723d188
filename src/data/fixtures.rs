use once_cell::sync::Lazy;

use crate::data::models::{Conversation, Message, ProfileImage};
use crate::session::SessionContext;

/// Author id of every incoming message in the details fixture.
pub const CONTACT_ID: &str = "contact_456";

static CONVERSATIONS: Lazy<Vec<Conversation>> = Lazy::new(|| {
    let rows: [(u32, &str, &str, &str, &str, u32, bool, bool); 5] = [
        (1, "Photographers", "@Philippe", "Hmm, are you sure?", "10:16 PM", 80, true, true),
        (2, "Anna", "@Anna", "Let’s meet tomorrow morning", "09:45 PM", 2, false, false),
        (3, "Team Chat", "@David", "The meeting is rescheduled", "08:30 PM", 0, true, true),
        (4, "Mom", "@Mom", "Dinner is ready!", "07:00 PM", 5, false, true),
        (5, "Alex", "@Alex", "Alright, see you later.", "06:10 PM", 0, true, false),
    ];
    rows.into_iter()
        .map(|(id, contact_name, sender, last_message, time, unread_count, is_seen, is_online)| Conversation {
            id,
            contact_name: contact_name.to_string(),
            sender: sender.to_string(),
            last_message: last_message.to_string(),
            time: time.to_string(),
            unread_count,
            is_seen,
            is_online,
            profile_image: ProfileImage::DEFAULT,
        })
        .collect()
});

/// The conversation list, in display order. Same five records on every call.
pub fn list_conversations() -> Vec<Conversation> {
    CONVERSATIONS.clone()
}

pub fn find_conversation(contact_name: &str) -> Option<Conversation> {
    CONVERSATIONS.iter().find(|c| c.contact_name == contact_name).cloned()
}

/// Message history shown on every details screen, oldest first.
///
/// Not keyed by conversation: whichever contact was opened, this is what is shown.
pub fn seed_messages(session: &SessionContext) -> Vec<Message> {
    let me = session.current_user_id.as_str();
    vec![
        Message::new("1", CONTACT_ID, "Hey, are you there?", 0),
        Message::new("2", me, "Yes! What's up?", 0),
        Message::new("3", CONTACT_ID, "Can you send me the file?", 0),
        Message::new("4", me, "Sure, give me a sec.", 0),
        Message::new("5", CONTACT_ID, "Thanks!", 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_five_conversations_with_sequential_ids() {
        let convs = list_conversations();
        assert_eq!(convs.len(), 5);
        let ids: Vec<u32> = convs.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn listing_is_deterministic() {
        assert_eq!(list_conversations(), list_conversations());
    }

    #[test]
    fn seen_and_unread_are_independent() {
        let photographers = find_conversation("Photographers").unwrap();
        assert!(photographers.is_seen);
        assert_eq!(photographers.unread_count, 80);
    }

    #[test]
    fn find_conversation_misses_unknown_names() {
        assert_eq!(find_conversation("Anna").map(|c| c.id), Some(2));
        assert!(find_conversation("Larry").is_none());
        assert!(find_conversation("").is_none());
    }

    #[test]
    fn seed_messages_use_session_identity() {
        let session = SessionContext::new("me");
        let messages = seed_messages(&session);
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[1].sender_id, "me");
        assert_eq!(messages[3].text, "Sure, give me a sec.");
        assert!(messages.iter().filter(|m| m.sender_id == CONTACT_ID).count() == 3);
    }
}
