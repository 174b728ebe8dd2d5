//! Data models for Bookwarden entities

pub mod book;
pub mod borrow;
pub mod user;
