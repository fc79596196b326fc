//! Image preloading and decode readiness
//!
//! Decoding happens off the caller's path; callers only hold a cloneable
//! readiness signal that settles once the decode succeeded or failed.

pub mod cache;
pub mod decoder;

pub use cache::{settle_all, ImageCache, Readiness, ReadySignal};
pub use decoder::{DecodedImage, FsImageDecoder, ImageDecoder};
