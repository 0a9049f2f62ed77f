//! Character management components

mod character_card;
pub use character_card::CharacterCard;

mod character_table;
pub use character_table::CharacterTable;

mod create_panel;
pub use create_panel::CreateCharacterPanel;

mod edit_modal;
pub use edit_modal::EditCharacterModal;

mod form_fields;
pub use form_fields::CharacterFormFields;
