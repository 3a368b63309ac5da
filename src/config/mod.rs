mod loader;
mod model;
mod validation;

pub use loader::ConfigLoader;
pub use model::{
    ConfigFile, FnMetadata, FnType, IncludeRef, RawConfig, RawFn, RawRule, Rule, Scope,
    SeverityLevel,
};
pub use validation::validate_config;
