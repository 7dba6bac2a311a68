pub mod errors;
pub mod facts;
pub mod ids;
pub mod params;
pub mod plan;
pub mod settings;

pub use errors::*;
pub use facts::*;
pub use ids::*;
pub use params::*;
pub use plan::*;
pub use settings::*;
