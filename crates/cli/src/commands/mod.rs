pub mod actions;
pub mod init;
pub mod resolve;
pub mod scopes;

pub use actions::actions_command;
pub use init::init_command;
pub use resolve::{ResolveArgs, resolve_command};
pub use scopes::scopes_command;
