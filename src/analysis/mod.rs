pub mod bundle;
pub mod daily;
pub mod error;
pub mod hourly;
pub mod stats;
pub mod window;
