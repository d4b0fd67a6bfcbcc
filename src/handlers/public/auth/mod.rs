// Public authentication handlers
pub mod login; // POST /auth/login - authenticate and get a token
pub mod register; // POST /auth/register - create a new account
pub mod utils;

pub use login::login_post;
pub use register::register_post;
