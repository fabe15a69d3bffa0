mod analysis;
mod error;
mod lookup;
mod table;
mod types;

pub use error::MeteoviewError;

pub use analysis::bundle::*;
pub use analysis::daily::*;
pub use analysis::error::AnalysisError;
pub use analysis::hourly::*;
pub use analysis::stats::*;
pub use analysis::window::*;

pub use lookup::{LatLon, PlaceLookup};

pub use table::daily::*;
pub use table::error::TableError;
pub use table::hourly::*;
pub use table::{Observation, RecordTable, COL_TIME};

pub use types::payload::*;
