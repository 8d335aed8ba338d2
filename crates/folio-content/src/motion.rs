//! Entrance Transition Metadata
//!
//! Declarative hints for the stylesheet's entrance animation. A hint only
//! parameterizes CSS custom properties; nothing downstream waits on an
//! animation, so rendering is correct whether or not the transition runs.

/// Fade-and-rise entrance hint for a section or heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// How far below its final position the element starts
    pub rise_px: u32,
}

impl Entrance {
    pub const fn new(duration_ms: u32, delay_ms: u32, rise_px: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
            rise_px,
        }
    }

    /// Inline style feeding the `rise-in` keyframes via custom properties.
    pub fn style(&self) -> String {
        format!(
            "--rise-duration: {}ms; --rise-delay: {}ms; --rise-distance: {}px;",
            self.duration_ms, self.delay_ms, self.rise_px
        )
    }
}

/// Hero headline entrance: fade in while rising 20px over 800ms.
pub static HERO_ENTRANCE: Entrance = Entrance::new(800, 0, 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_emits_all_three_custom_properties() {
        let style = Entrance::new(800, 100, 20).style();
        assert!(style.contains("--rise-duration: 800ms"));
        assert!(style.contains("--rise-delay: 100ms"));
        assert!(style.contains("--rise-distance: 20px"));
    }
}
