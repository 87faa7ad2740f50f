//! Common constants used throughout scaff.

/// Name of the configuration file searched for in the working directory and its parents
pub const CONFIG_FILE: &str = "scaff.json";

/// Operating-system indicator for which rebuilt search paths carry no leading separator
pub const WINDOWS_OS: &str = "windows";
