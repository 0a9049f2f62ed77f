//! Value objects
//!
//! Small rule-carrying types shared by the forms and the request builders.

pub mod description;
