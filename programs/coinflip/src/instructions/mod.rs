pub mod add_funds;
pub mod flip_coin;
pub mod get_balance;
pub mod initialize_treasury;
pub mod withdraw;

pub use add_funds::*;
pub use flip_coin::*;
pub use get_balance::*;
pub use initialize_treasury::*;
pub use withdraw::*;
