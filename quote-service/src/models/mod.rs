pub mod invite_key;
pub mod quote;
pub mod session;

pub use invite_key::InviteKey;
pub use quote::Quote;
pub use session::AdminSession;
