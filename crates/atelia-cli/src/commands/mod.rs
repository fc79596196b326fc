pub mod carousel;
pub mod config;
pub mod mailto;
pub mod navbar;
pub mod scroll;
pub mod share;
