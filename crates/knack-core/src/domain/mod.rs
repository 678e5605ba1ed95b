pub mod coins;
pub mod phone;

pub use coins::CoinSet;
pub use phone::{LeadingDigit, NanpCode, PhoneFormat, PhoneNumber};
