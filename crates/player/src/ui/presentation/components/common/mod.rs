//! Common reusable UI components.
//!
//! Site chrome and the overlay shell shared by every modal.

mod banner;
pub use banner::Banner;

mod footer;
pub use footer::Footer;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod nav_bar;
pub use nav_bar::NavBar;
