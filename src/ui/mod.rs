pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;
pub mod sidebar;
