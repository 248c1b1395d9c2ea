pub mod a001_user;
pub mod a002_business;
pub mod a003_perk;
pub mod a004_feed;
pub mod a005_announcement;
pub mod a006_poll;
pub mod a007_invite_code;
