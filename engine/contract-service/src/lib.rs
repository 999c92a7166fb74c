//! Contract Service
//!
//! Credit balance and the book of owned article contracts. Purchases quote
//! through the pricing engine, debit the balance, and record the contract;
//! renewals extend the end date at the tier's flat renewal cost. Value
//! changes against the purchase price are derived on demand, never stored.

pub mod balance;
pub mod book;
pub mod contract;
pub mod error;

pub use balance::CreditBalance;
pub use book::ContractBook;
pub use contract::OwnedContract;
pub use error::ContractError;

pub type Result<T> = std::result::Result<T, ContractError>;
