pub mod change;
pub mod validation;

pub use change::find_fewest_coins;
pub use validation::validate_phone_digits;
