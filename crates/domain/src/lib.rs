//! Domain types for the Dunder fan site.
//!
//! Nothing in this crate performs I/O. The player crate owns transport,
//! storage and presentation; this crate owns the shapes and the rules.

pub mod character;
pub mod credentials;
pub mod error;
pub mod ids;
pub mod season;
pub mod value_objects;

pub use character::{Character, CharacterFields, CharacterPayload, ImageUpload};
pub use credentials::{LoginRequest, LoginResponse, RegisterUserRequest};
pub use error::ValidationError;
pub use ids::CharacterId;
pub use season::{season, Season, SEASONS};
pub use value_objects::description::{remaining_chars, validate_description, MAX_DESCRIPTION_CHARS};
