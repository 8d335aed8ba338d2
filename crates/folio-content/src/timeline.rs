//! Experience Timeline Descriptors
//!
//! Slice order is display order. The data is authored most recent first;
//! nothing enforces that ordering.

/// One entry on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Human-readable period, e.g. "Summer 2024"
    pub period: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

/// Work and leadership history, in display order.
pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "Summer 2024",
        role: "Software Engineering Intern - Bloomberg LP",
        description: "Created website for 100+ managers that allowed for more \
                      efficient access to client data. Implemented user \
                      authentication and test suite to increase coverage by 60%.",
    },
    TimelineEntry {
        period: "Summer 2024",
        role: "Product Manager for Develop For Good",
        description: "Worked with non-profit Change Arts to make website \
                      improvements and improve stakeholder satisfaction by 35%.",
    },
    TimelineEntry {
        period: "2023-Present",
        role: "Dream Team Engineering Team Lead for Caudal Block Team",
        description: "Worked with Shands hospital to create a 3-D Surgery \
                      Simulator for the Caudal Block Procedure, decreasing live \
                      errors by 47%.",
    },
];
