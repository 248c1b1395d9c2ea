pub mod draft_field;
pub mod form_dialog;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;
