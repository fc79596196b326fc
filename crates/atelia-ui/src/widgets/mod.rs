pub mod back_to_top;
pub mod category;
pub mod contact;
pub mod lightbox;
pub mod menu;
pub mod slider;
pub mod tabs;

pub use back_to_top::BackToTop;
pub use category::CategorySwitcher;
pub use contact::ContactBubble;
pub use lightbox::Lightbox;
pub use menu::MobileMenu;
pub use slider::{ButtonLayout, ImageSlider};
pub use tabs::{DisclosureToggle, PlanTabs};
