pub mod carousel;
pub mod input;
pub mod navbar;
pub mod navigation;
pub mod scroll;
pub mod site;
pub mod surface;
pub mod widgets;

pub use carousel::{CarouselPhase, CarouselPipeline, CarouselWindow};
pub use navbar::{NavbarController, Visibility};
pub use navigation::{ClickOutcome, LinkNavigator};
pub use scroll::{CompletionState, ScrollAnimator, ScrollCompletion};
pub use site::{FrameReport, LinkKind, Site, SiteAnchors};
