pub mod chat_details;
pub mod chat_list;
pub mod main_window;
pub mod style;
