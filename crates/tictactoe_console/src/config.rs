//! Presentation settings for a console session.

use derive_getters::Getters;
use derive_setters::Setters;

/// How a [`crate::Session`] presents itself.
///
/// Gameplay is not configurable; these only affect what is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Clear the terminal before redrawing the board.
    clear_screen: bool,
    /// Print the numbered position guide at the start of each round.
    show_instructions: bool,
}

impl SessionConfig {
    /// Plain line-by-line output: no screen clearing, no position guide.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            show_instructions: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_instructions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_chain() {
        let config = SessionConfig::default().with_clear_screen(false);
        assert!(!*config.clear_screen());
        assert!(*config.show_instructions());
        assert_eq!(
            SessionConfig::plain().with_show_instructions(true),
            SessionConfig::default().with_clear_screen(false)
        );
    }
}
