mod ingredient;
mod recipe;

pub use ingredient::*;
pub use recipe::*;
