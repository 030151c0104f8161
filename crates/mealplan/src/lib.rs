mod calendar;
mod plan;

pub use calendar::*;
pub use plan::*;
