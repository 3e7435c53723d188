use gtk4::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

use crate::data::ProfileImage;
use crate::view_model::{BubbleSide, ChatDetails, MessageBubble};

pub struct ChatDetailsPage {
    root: gtk::Box,
}

impl ChatDetailsPage {
    pub fn new<B, C>(model: ChatDetails, on_back: B, on_call: C) -> Self
    where
        B: Fn() + 'static,
        C: Fn() + 'static,
    {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        let header = model.header();

        // Header
        let bar = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        bar.set_margin_top(12);
        bar.set_margin_bottom(12);
        bar.set_margin_start(12);
        bar.set_margin_end(12);
        let back_btn = gtk::Button::from_icon_name("go-previous-symbolic");
        back_btn.add_css_class("flat");
        back_btn.set_tooltip_text(Some("Back"));
        back_btn.set_valign(gtk::Align::Center);
        bar.append(&back_btn);
        bar.append(&super::chat_list::avatar(
            &header.contact_name,
            ProfileImage::DEFAULT.icon_name(),
            header.is_online,
        ));
        let titles = gtk::Box::new(gtk::Orientation::Vertical, 2);
        titles.set_hexpand(true);
        titles.set_valign(gtk::Align::Center);
        let name = gtk::Label::new(Some(&header.contact_name));
        name.add_css_class("heading");
        name.set_halign(gtk::Align::Start);
        let presence = gtk::Label::new(Some(header.presence_label()));
        presence.add_css_class("dim-label");
        presence.set_halign(gtk::Align::Start);
        titles.append(&name);
        titles.append(&presence);
        bar.append(&titles);
        let call_btn = gtk::Button::from_icon_name("call-start-symbolic");
        call_btn.add_css_class("circular");
        call_btn.set_tooltip_text(Some("Call"));
        call_btn.set_valign(gtk::Align::Center);
        bar.append(&call_btn);
        root.append(&bar);

        // Messages
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let messages_box = gtk::Box::new(gtk::Orientation::Vertical, 8);
        messages_box.set_valign(gtk::Align::End);
        messages_box.set_margin_start(8);
        messages_box.set_margin_end(8);
        messages_box.set_margin_bottom(8);
        for bubble in model.bubbles() {
            messages_box.append(&bubble_widget(&bubble));
        }
        scroller.set_child(Some(&messages_box));
        root.append(&scroller);

        // Input row
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        input_row.set_margin_top(8);
        input_row.set_margin_bottom(8);
        input_row.set_margin_start(8);
        input_row.set_margin_end(8);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message..."));
        let send_btn = gtk::Button::from_icon_name("document-send-symbolic");
        send_btn.set_tooltip_text(Some("Send"));
        input_row.append(&entry);
        input_row.append(&send_btn);
        root.append(&input_row);

        back_btn.connect_clicked(move |_| on_back());
        call_btn.connect_clicked(move |_| on_call());

        let model = Rc::new(RefCell::new(model));
        {
            let model = model.clone();
            entry.connect_changed(move |e| model.borrow_mut().set_draft(e.text()));
        }

        let send: Rc<dyn Fn()> = {
            let entry = entry.clone();
            let messages_box = messages_box.clone();
            let scroller = scroller.clone();
            Rc::new(move || {
                if !model.borrow().composer().can_send() {
                    return;
                }
                let appended = model.borrow_mut().send();
                entry.set_text("");
                if let Some(bubble) = appended {
                    messages_box.append(&bubble_widget(&bubble));
                    let adj = scroller.vadjustment();
                    adj.set_value(adj.upper());
                }
            })
        };
        {
            let send = send.clone();
            send_btn.connect_clicked(move |_| (send)());
        }
        entry.connect_activate(move |_| (send)());

        Self { root }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }
}

fn bubble_widget(bubble: &MessageBubble) -> gtk::Widget {
    let label = gtk::Label::new(Some(&bubble.text));
    label.set_wrap(true);
    label.set_xalign(0.0);
    label.set_max_width_chars(32);
    label.set_selectable(true);
    label.add_css_class("bubble");
    label.add_css_class(bubble.css_class());
    label.set_halign(match bubble.side() {
        BubbleSide::Start => gtk::Align::Start,
        BubbleSide::End => gtk::Align::End,
    });
    label.upcast()
}
