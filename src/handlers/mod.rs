// Two security tiers: public token acquisition, then JWT-protected notes.
pub mod protected; // /api/notes/* (bearer token required)
pub mod public; // /auth/* (no authentication)
