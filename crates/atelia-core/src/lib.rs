pub mod compose;
pub mod config;
pub mod error;
pub mod media;

pub use config::{AppConfig, CarouselConfig, EasingType, NavbarConfig, ScrollConfig, ScrollProfile};
pub use error::{Error, Result};
pub use media::{FsImageDecoder, ImageCache, ImageDecoder, Readiness, ReadySignal};
