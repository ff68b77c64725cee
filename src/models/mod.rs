pub mod notification;
pub mod response;

pub use notification::*;
pub use response::*;
