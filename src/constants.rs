//! Configuration constants for eggbeater.

/// Cookbook metadata file names, tried in this order.
pub mod metadata {
    /// Preferred metadata format.
    pub const RUBY_FILE: &str = "metadata.rb";

    /// Fallback when no `metadata.rb` exists anywhere on the search path.
    pub const JSON_FILE: &str = "metadata.json";
}

/// Role discovery configuration.
pub mod roles {
    /// Extension of role files in the roles directory.
    pub const FILE_EXTENSION: &str = "json";
}

/// Output formatting configuration.
pub mod output {
    /// Default output format when not specified.
    pub const DEFAULT_FORMAT: &str = "tree";

    /// Default comma-separated cookbook search path.
    pub const DEFAULT_COOKBOOK_PATH: &str = "./cookbooks";
}

/// Progress bar configuration.
pub mod progress {
    use std::time::Duration;

    /// Duration between progress bar updates.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}
