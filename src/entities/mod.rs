// Entity Models
//
// One entity: Account. Identity is the store-assigned numeric id,
// values are name/document/phone.

pub mod account;

pub use account::Account;
