pub mod favorite_button;
pub mod guard;
pub mod layout;
