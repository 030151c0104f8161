mod quota;
mod subscription;

pub use quota::*;
pub use subscription::*;
