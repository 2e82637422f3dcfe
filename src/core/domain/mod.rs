//! Domain types.

mod configuration;
mod parameters;
mod paths;
mod permissions;
mod server;
mod zone;

pub use configuration::Configuration;
pub use parameters::{to_rname, Parameters};
pub use paths::Paths;
pub use permissions::{Mode, Profile, SecuredPermissions};
pub use server::Server;
pub use zone::{Grant, Zone};
