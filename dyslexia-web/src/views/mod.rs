//! HTML views

pub mod chart;
pub mod page;

pub use chart::importance_chart;
pub use page::{render, PageView, ResultView};
