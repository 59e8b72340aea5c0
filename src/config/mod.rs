pub mod traits;
pub mod evaluation;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evaluation::EvaluationConfig;
pub use traits::ConfigSection;
