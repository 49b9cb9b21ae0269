// Client site sections

mod blog;
mod careers;
mod contact;
mod faq;
mod footer;
mod home;
mod nav;
mod search;
mod team;
mod testimonials;

pub use blog::BlogRoll;
pub use careers::CareersSection;
pub use contact::ContactPanel;
pub use faq::{FaqListing, FaqPreview};
pub use footer::Footer;
pub use home::{Hero, HomeCta, Intro, LocationPolicies};
pub use nav::Nav;
pub use search::{SearchBar, SearchResults};
pub use team::TeamGrid;
pub use testimonials::Testimonials;
