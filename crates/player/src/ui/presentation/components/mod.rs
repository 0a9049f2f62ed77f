//! Reusable UI components

pub mod auth;
pub mod character;
pub mod common;
