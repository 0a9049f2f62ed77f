//! Plain view state driven by the components
//!
//! Components keep these in signals and feed them service results. Nothing
//! here touches Dioxus, so the workflows are tested without a renderer.

pub mod character_form;
pub mod character_list;
pub mod edit_modal;
pub mod login;
pub mod modal;
pub mod refresh;
pub mod register;

pub use character_form::{CharacterForm, FormEdit, FormMode};
pub use character_list::CharacterListState;
pub use edit_modal::EditModal;
pub use login::LoginForm;
pub use modal::ClickOrigin;
pub use refresh::RefreshToggle;
pub use register::RegisterForm;
