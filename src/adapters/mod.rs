// Adapters layer: concrete implementations of the domain ports (filesystem, http, process).

pub mod http;
pub mod local;
pub mod process;

pub use http::HttpTextSource;
pub use local::LocalTextSource;
pub use process::ShellCommandRunner;
