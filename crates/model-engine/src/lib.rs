pub mod mock_engine;
pub mod native;
pub mod traits;
pub mod types;
pub mod value;

pub use mock_engine::{MockEngine, MockEngineConfig};
pub use native::*;
pub use traits::*;
pub use types::*;
pub use value::{Value, ValueElement};
