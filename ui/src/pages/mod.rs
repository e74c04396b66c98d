pub mod blog;
pub mod home;
pub mod not_found;
pub mod pricing;

pub use blog::BlogPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
