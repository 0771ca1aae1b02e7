pub mod cip30;

pub use self::cip30::Cip30Wallet;
