use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FaucetError {
    AlreadyInitialized = 1,
    Uninitialized = 2,
    Paused = 3,
    CooldownActive = 4,
    DailyLimitExceeded = 5,
    InsufficientBalance = 6,
    InvalidAmount = 7,
    InvalidAddress = 8,
    TransferFailed = 9,
    ReentrantCall = 10,
}
