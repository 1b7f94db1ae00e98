//! Configuration and settings for ccglance.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    login_shell,
    DEFAULT_REFRESH_INTERVAL,
    DISPLAY_TIMEZONE,
    USAGE_COMMAND,
};
