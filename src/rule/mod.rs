mod plugin;
mod plugin_cache;
mod predicate;
mod script;

pub use plugin::PluginRule;
pub use plugin_cache::PluginCache;
pub use predicate::{MatchTarget, Predicate, RuleCompiler};
pub use script::ScriptRule;
