mod manager;

pub use manager::{
    AssistantConfig, ConfigFile, ConfigManager, ProviderConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
