pub mod app_user;
pub mod post;
#[cfg(test)]
pub mod session;
pub mod user;

pub use app_user::*;
pub use post::*;
#[cfg(test)]
pub use session::*;
pub use user::*;
