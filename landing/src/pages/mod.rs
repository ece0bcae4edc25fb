// Landing page routes
// Developed by XplnHUB (c)2025

mod features;
mod home;
mod implementation;
mod not_found;
mod roadmap;

pub use features::FeaturesPage;
pub use home::HomePage;
pub use implementation::ImplementationPage;
pub use not_found::NotFoundPage;
pub use roadmap::RoadmapPage;
