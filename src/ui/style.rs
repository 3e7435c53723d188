use gtk4 as gtk;

const CSS: &str = r#"
.presence-dot {
    min-width: 12px;
    min-height: 12px;
    border-radius: 6px;
    background-color: #2ec27e;
    border: 2px solid white;
}
.unread-badge {
    min-width: 24px;
    padding: 2px 6px;
    border-radius: 12px;
    background-color: #e01b24;
    color: white;
    font-weight: bold;
    font-size: smaller;
}
.seen-check {
    color: #6d4aff;
}
.bubble {
    padding: 12px;
    border-radius: 16px;
    color: black;
}
.bubble-own {
    background-color: #d0f0c0;
}
.bubble-other {
    background-color: #e0e0e0;
}
"#;

pub fn install() {
    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("no display; skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
