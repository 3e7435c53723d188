use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::data::Conversation;
use crate::view_model::{ChatList, ConversationRow};

pub struct ChatListPage {
    root: gtk::Box,
}

impl ChatListPage {
    pub fn new<F>(model: ChatList, on_select: F) -> Self
    where
        F: Fn(&Conversation) + 'static,
    {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);

        let title = gtk::Label::new(Some(model.title()));
        title.add_css_class("heading");
        title.set_margin_top(8);
        title.set_margin_bottom(8);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("navigation-sidebar");
        for row in model.rows() {
            list.append(&conversation_row(row));
        }

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&list)
            .build();
        root.append(&scroller);

        let model = Rc::new(model);
        list.connect_row_activated(move |_, row| {
            if let Some(conv) = model.conversation_at(row.index()) {
                on_select(conv);
            }
        });

        Self { root }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }
}

fn conversation_row(row: &ConversationRow) -> gtk::ListBoxRow {
    let line = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    line.set_margin_top(12);
    line.set_margin_bottom(12);
    line.set_margin_start(12);
    line.set_margin_end(12);

    line.append(&avatar(row.contact_name(), row.avatar_icon(), row.shows_presence()));

    let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
    text.set_hexpand(true);
    let name = gtk::Label::new(Some(row.contact_name()));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    name.set_ellipsize(gtk::pango::EllipsizeMode::End);
    let preview = gtk::Label::new(Some(&row.preview()));
    preview.add_css_class("dim-label");
    preview.set_halign(gtk::Align::Start);
    preview.set_single_line_mode(true);
    preview.set_ellipsize(gtk::pango::EllipsizeMode::End);
    text.append(&name);
    text.append(&preview);
    line.append(&text);

    let meta = gtk::Box::new(gtk::Orientation::Vertical, 4);
    meta.set_halign(gtk::Align::End);
    let stamp = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    stamp.set_halign(gtk::Align::End);
    if row.shows_seen() {
        let check = gtk::Image::from_icon_name("object-select-symbolic");
        check.add_css_class("seen-check");
        check.set_tooltip_text(Some("Seen"));
        stamp.append(&check);
    }
    let time = gtk::Label::new(Some(row.time()));
    time.add_css_class("dim-label");
    time.add_css_class("caption");
    stamp.append(&time);
    meta.append(&stamp);
    if let Some(count) = row.unread_badge() {
        let badge = gtk::Label::new(Some(&count));
        badge.add_css_class("unread-badge");
        badge.set_halign(gtk::Align::End);
        meta.append(&badge);
    }
    line.append(&meta);

    let list_row = gtk::ListBoxRow::new();
    list_row.set_activatable(true);
    list_row.set_child(Some(&line));
    list_row
}

/// Round avatar with an optional presence dot in the bottom-right corner.
pub fn avatar(name: &str, icon: &str, online: bool) -> gtk::Widget {
    let avatar = adw::Avatar::new(48, Some(name), false);
    avatar.set_icon_name(Some(icon));
    let overlay = gtk::Overlay::new();
    overlay.set_valign(gtk::Align::Center);
    overlay.set_child(Some(&avatar));
    if online {
        let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        dot.add_css_class("presence-dot");
        dot.set_halign(gtk::Align::End);
        dot.set_valign(gtk::Align::End);
        dot.set_tooltip_text(Some("Online"));
        overlay.add_overlay(&dot);
    }
    overlay.upcast()
}
