//! Icon Tags
//!
//! Closed set of icon kinds referenced by content descriptors. The UI
//! resolves each tag to an inline Lucide SVG through a lookup at render
//! time, so the data never embeds markup.

/// Icon tag carried by project and skill descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Source code / programming language
    Code,
    /// Backend, infrastructure, databases
    Server,
    /// Games and interactive work
    Gamepad,
    /// Frontend frameworks and layout work
    LayoutGrid,
    /// Outbound link affordance
    Link,
}

impl IconKind {
    /// Stable name for this icon, used for accessibility labels.
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Code => "code",
            IconKind::Server => "server",
            IconKind::Gamepad => "gamepad",
            IconKind::LayoutGrid => "layout-grid",
            IconKind::Link => "link",
        }
    }
}
