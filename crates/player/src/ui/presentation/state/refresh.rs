//! Refresh toggle shared between the character list and the forms
//!
//! Only the fact that it changed matters. The boolean is kept so the toggle
//! still reads like a flip, but consumers compare generations: flipping back
//! to a previous value is a new event too.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshToggle {
    value: bool,
    generation: u64,
}

impl RefreshToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the character collection changed on the server.
    pub fn flip(&mut self) {
        self.value = !self.value;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_back_is_still_a_change() {
        let mut toggle = RefreshToggle::new();
        let start = toggle;

        toggle.flip();
        toggle.flip();

        assert_eq!(toggle.value(), start.value());
        assert_ne!(toggle.generation(), start.generation());
        assert_eq!(toggle.generation(), 2);
    }
}
