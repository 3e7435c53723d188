/// Single-line text buffer behind the message input row.
#[derive(Debug, Default, Clone)]
pub struct Composer {
    text: String,
}

impl Composer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn can_send(&self) -> bool {
        !self.text().trim().is_empty()
    }

    /// Hands the composed text to `on_send` and clears the buffer.
    ///
    /// Blank or whitespace-only text is not sent and stays in the buffer.
    pub fn submit<F>(&mut self, on_send: F) -> Option<String>
    where
        F: FnOnce(&str),
    {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.text);
        on_send(&text);
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let composer = Composer::default();
        assert_eq!(composer.text(), "");
        assert!(!composer.can_send());
    }

    #[test]
    fn blank_text_is_not_sent() {
        for blank in ["", "   ", "\t \n"] {
            let mut composer = Composer::default();
            composer.set_text(blank);
            let mut calls = 0;
            assert_eq!(composer.submit(|_| calls += 1), None);
            assert_eq!(calls, 0);
            assert_eq!(composer.text(), blank);
        }
    }

    #[test]
    fn send_fires_hook_once_and_resets() {
        let mut composer = Composer::default();
        composer.set_text("Sure, give me a sec.");
        let mut sent = Vec::new();
        let out = composer.submit(|text| sent.push(text.to_string()));
        assert_eq!(out.as_deref(), Some("Sure, give me a sec."));
        assert_eq!(sent, vec!["Sure, give me a sec.".to_string()]);
        assert_eq!(composer.text(), "");
    }

    #[test]
    fn surrounding_whitespace_is_kept_in_sent_text() {
        let mut composer = Composer::default();
        composer.set_text("  hi ");
        assert_eq!(composer.submit(|_| {}).as_deref(), Some("  hi "));
    }
}
