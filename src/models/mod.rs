mod reset_token;
mod user;

pub use reset_token::ResetTokenRecord;
pub use user::User;
