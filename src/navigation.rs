use std::fmt;

use url::form_urlencoded;

use crate::data::Conversation;
use crate::error::NavigationError;

pub const CHAT_LIST: &str = "chat_list";
pub const CHAT_DETAILS: &str = "chat_details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ChatList,
    ChatDetails { contact_name: String },
}

impl Route {
    pub fn details(contact_name: impl Into<String>) -> Self {
        Route::ChatDetails { contact_name: contact_name.into() }
    }

    /// Stack page name for this route.
    pub fn name(&self) -> &'static str {
        match self {
            Route::ChatList => CHAT_LIST,
            Route::ChatDetails { .. } => CHAT_DETAILS,
        }
    }

    /// String form of the route. The contact name is form-encoded so that
    /// `/`, `&`, spaces and other reserved characters survive a round trip.
    pub fn to_path(&self) -> String {
        match self {
            Route::ChatList => CHAT_LIST.to_string(),
            Route::ChatDetails { contact_name } => {
                let encoded: String = form_urlencoded::byte_serialize(contact_name.as_bytes()).collect();
                format!("{CHAT_DETAILS}/{encoded}")
            }
        }
    }

    /// Parses a route path. A details route without an argument opens with an
    /// empty contact name rather than failing.
    pub fn parse(path: &str) -> Result<Self, NavigationError> {
        let trimmed = path.trim().trim_start_matches('/');
        let (name, arg) = match trimmed.split_once('/') {
            Some((name, arg)) => (name, Some(arg)),
            None => (trimmed, None),
        };
        match name {
            CHAT_LIST if arg.is_none_or(str::is_empty) => Ok(Route::ChatList),
            CHAT_DETAILS => Ok(Route::ChatDetails {
                contact_name: arg.map(decode_segment).unwrap_or_default(),
            }),
            _ => Err(NavigationError::UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode_segment(segment: &str) -> String {
    // Hand-written paths may carry raw pair separators; keep them literal.
    let escaped = segment.replace('&', "%26").replace('=', "%3D");
    form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

/// Back stack over the two screens. Always holds at least the list route.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { stack: vec![Route::ChatList] }
    }

    pub fn current(&self) -> &Route {
        // The root entry is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Opens the details screen for a conversation picked from the list.
    pub fn select(&mut self, conversation: &Conversation) -> Result<&Route, NavigationError> {
        let from = self.current();
        if *from != Route::ChatList {
            return Err(NavigationError::InvalidTransition { from: from.name() });
        }
        let route = Route::details(conversation.contact_name.clone());
        log::info!("navigating to {route}");
        Ok(self.push(route))
    }

    /// Navigates to a route given in string form.
    pub fn navigate(&mut self, path: &str) -> Result<&Route, NavigationError> {
        let route = Route::parse(path)?;
        log::info!("navigating to {route}");
        if route == Route::ChatList {
            self.stack.truncate(1);
            return Ok(self.current());
        }
        if matches!(self.current(), Route::ChatDetails { .. }) {
            self.stack.pop();
        }
        Ok(self.push(route))
    }

    /// Pops the details screen. Returns `false` when already at the list.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        log::info!("back to {}", self.current());
        true
    }

    fn push(&mut self, route: Route) -> &Route {
        self.stack.push(route);
        self.current()
    }
}
