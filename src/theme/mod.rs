//! Visual theme for the portfolio page.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
