//! Text and URL composition for the site's outbound actions

pub mod mailto;
pub mod pricing;
pub mod share;

pub use mailto::{Enquiry, compose_mailto};
pub use pricing::highlight_amounts;
pub use share::{share_action, ShareAction, SharePlatform};
