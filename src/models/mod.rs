pub mod chat_message;
pub mod profile;
pub mod raw_row;
pub mod volunteer_event;
