/// Server services
pub mod store;
pub mod tracker;

pub use store::connect_store;
pub use tracker::TrackerService;
