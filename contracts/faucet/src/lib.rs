#![no_std]

mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod utilities;

pub use crate::contract::{FaucetContract, FaucetContractClient};
pub use crate::errors::FaucetError;
pub use crate::storage::{AddressLedgerEntry, FaucetConfig, FaucetStats};
