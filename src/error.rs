//! Host startup and serving errors.

use sitenav_client::menu::MenuError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// The menu file named by `SITENAV_MENU_PATH` could not be read.
    #[error("failed to read menu file {path}: {source}")]
    MenuRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The menu file was read but is not a valid menu.
    #[error("invalid menu file {path}: {source}")]
    MenuInvalid {
        path: String,
        #[source]
        source: MenuError,
    },

    /// The site configuration could not be encoded for the page shell.
    #[error("failed to encode site configuration: {0}")]
    ConfigEncode(#[source] MenuError),

    /// Leptos options could not be resolved from the environment.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the HTTP listener failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
