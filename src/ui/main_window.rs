use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::AppSettings;
use crate::data::Conversation;
use crate::error::NavigationError;
use crate::navigation::{Navigator, Route, CHAT_DETAILS, CHAT_LIST};
use crate::session::SessionContext;
use crate::ui::chat_details::ChatDetailsPage;
use crate::ui::chat_list::ChatListPage;
use crate::view_model::{ChatDetails, ChatList, SendMode};

/// Owns the page stack and keeps it in step with the navigator.
struct Shell {
    stack: gtk::Stack,
    toasts: adw::ToastOverlay,
    navigator: RefCell<Navigator>,
    session: SessionContext,
    send_mode: SendMode,
}

impl Shell {
    fn select(self: &Rc<Self>, conversation: &Conversation) {
        let result = self.navigator.borrow_mut().select(conversation).cloned();
        self.apply(result);
    }

    fn open(self: &Rc<Self>, path: &str) {
        let result = self.navigator.borrow_mut().navigate(path).cloned();
        self.apply(result);
    }

    fn back(self: &Rc<Self>) {
        let moved = self.navigator.borrow_mut().back();
        if moved {
            let route = self.navigator.borrow().current().clone();
            self.render(&route);
        }
    }

    fn apply(self: &Rc<Self>, result: Result<Route, NavigationError>) {
        match result {
            Ok(route) => self.render(&route),
            Err(err) => {
                log::warn!("{err}");
                self.toast(&err.to_string());
            }
        }
    }

    fn render(self: &Rc<Self>, route: &Route) {
        log::debug!("showing {route} (stack depth {})", self.navigator.borrow().depth());
        match route {
            Route::ChatList => self.stack.set_visible_child_name(CHAT_LIST),
            Route::ChatDetails { contact_name } => {
                if let Some(old) = self.stack.child_by_name(CHAT_DETAILS) {
                    self.stack.remove(&old);
                }
                let model = ChatDetails::open(contact_name.clone(), self.session.clone(), self.send_mode);
                let page = ChatDetailsPage::new(
                    model,
                    on_shell(Rc::downgrade(self), |shell| shell.back()),
                    on_shell(Rc::downgrade(self), |shell| {
                        shell.toast("Calls are not available in this build")
                    }),
                );
                self.stack.add_named(&page.widget(), Some(CHAT_DETAILS));
                self.stack.set_visible_child_name(CHAT_DETAILS);
            }
        }
    }

    fn toast(&self, text: &str) {
        self.toasts.add_toast(adw::Toast::new(text));
    }
}

fn on_shell<F>(shell: Weak<Shell>, f: F) -> impl Fn() + 'static
where
    F: Fn(&Rc<Shell>) + 'static,
{
    move || {
        if let Some(shell) = shell.upgrade() {
            f(&shell);
        }
    }
}

pub fn show_main_window(app: &Application, settings: &AppSettings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("FinraLink")
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let stack = gtk::Stack::builder()
        .transition_type(gtk::StackTransitionType::SlideLeftRight)
        .vexpand(true)
        .build();
    let toasts = adw::ToastOverlay::new();
    toasts.set_child(Some(&stack));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    container.append(&adw::HeaderBar::new());
    container.append(&toasts);
    window.set_content(Some(&container));

    let shell = Rc::new(Shell {
        stack,
        toasts,
        navigator: RefCell::new(Navigator::new()),
        session: settings.session(),
        send_mode: settings.send_mode,
    });

    let list = {
        let weak = Rc::downgrade(&shell);
        ChatListPage::new(ChatList::load(), move |conv| {
            if let Some(shell) = weak.upgrade() {
                shell.select(conv);
            }
        })
    };
    shell.stack.add_named(&list.widget(), Some(CHAT_LIST));
    shell.stack.set_visible_child_name(CHAT_LIST);

    if settings.start_route != CHAT_LIST {
        shell.open(&settings.start_route);
    }

    // The window keeps the shell alive for as long as it is open.
    let keep = RefCell::new(Some(shell));
    window.connect_close_request(move |_| {
        keep.borrow_mut().take();
        gtk::glib::Propagation::Proceed
    });
    window.present();
}
