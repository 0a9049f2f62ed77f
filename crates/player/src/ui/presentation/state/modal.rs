//! Backdrop dismissal shared by every overlay
//!
//! Dioxus click events do not expose `currentTarget`, so the overlay records
//! where a click started: the content element marks it, the backdrop handler
//! runs afterwards for the same click and reads the mark.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOrigin {
    inside_content: bool,
}

impl ClickOrigin {
    /// Called from the content element's click handler.
    pub fn mark_content(&mut self) {
        self.inside_content = true;
    }

    /// Called from the backdrop's click handler. True when the backdrop
    /// itself was clicked, i.e. target equals currentTarget.
    pub fn take_is_backdrop(&mut self) -> bool {
        !std::mem::take(&mut self.inside_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_click_is_not_a_backdrop_click() {
        let mut origin = ClickOrigin::default();
        origin.mark_content();
        assert!(!origin.take_is_backdrop());
        // the mark only lives for one click
        assert!(origin.take_is_backdrop());
    }
}
