pub mod model;
pub mod validator;

pub use model::{LockedDependency, LockedPlugin, Lockfile, LOCKFILE_VERSION};
pub use validator::LockfileValidator;
