//! Page views rendered by the routes

pub mod bio;
pub mod cadastro;
pub mod contato;
pub mod home;
pub mod login;
pub mod personagens;
pub mod temporadas;
