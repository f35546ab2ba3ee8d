pub mod protocol;

pub use protocol::{ClientError, QueryClient, QueryResult, Value};

/// Host a Sequent server is expected at when none is given.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port Sequent servers listen on by default.
pub const DEFAULT_PORT: u16 = 9087;
