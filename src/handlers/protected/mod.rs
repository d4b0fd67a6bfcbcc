// Protected handlers: bearer-token authentication required.
//
// Every route in this tier sits behind the JWT middleware, which injects
// the authenticated AuthUser into request extensions. Handlers never see
// a request without a verified identity.
pub mod notes;

pub use notes::*;
