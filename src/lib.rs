pub mod batch;
pub mod config;
pub mod logging;
pub mod normalize;
pub mod scan;

pub use batch::{fill_blank_cells, BatchOutcome};
pub use config::Config;
