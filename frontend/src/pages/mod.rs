pub mod admin;
pub mod destination_detail;
pub mod destinations;
pub mod favorites;
pub mod home;
pub mod login;
pub mod signup;

pub use admin::*;
pub use destination_detail::*;
pub use destinations::*;
pub use favorites::*;
pub use home::*;
pub use login::*;
pub use signup::*;
