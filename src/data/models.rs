/// Local avatar asset, resolved by name through the icon theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileImage(pub &'static str);

impl ProfileImage {
    pub const DEFAULT: ProfileImage = ProfileImage("avatar-default-symbolic");

    pub fn icon_name(&self) -> &'static str {
        self.0
    }
}

/// Summary of one chat thread as shown in the conversation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub contact_name: String,
    pub sender: String,
    pub last_message: String,
    /// Already formatted for display, e.g. `"10:16 PM"`.
    pub time: String,
    pub unread_count: u32,
    pub is_seen: bool,
    pub is_online: bool,
    pub profile_image: ProfileImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: i64,
}

impl Message {
    pub fn new(id: impl Into<String>, sender_id: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            text: text.into(),
            timestamp,
        }
    }
}
