//! Login page modals

mod forgot_password_modal;
pub use forgot_password_modal::ForgotPasswordModal;

mod register_modal;
pub use register_modal::RegisterModal;
