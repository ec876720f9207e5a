pub mod config;
pub mod graph;
pub mod model;
pub mod stats;

pub use config::{Config, ConfigError, Secrets, Settings, SettingsError, load_dotenv};
pub use graph::{KnowledgeGraph, Node, Relationship};
pub use model::{GeminiModel, ModelParseError};
pub use stats::GraphStats;
