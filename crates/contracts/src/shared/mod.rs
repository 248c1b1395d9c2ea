pub mod aggregates;
pub mod config;
pub mod form;
pub mod list_query;
pub mod selection;
pub mod submission;
