pub mod contacts;
pub mod meetings;
pub mod minutes;
pub mod session;
pub mod shared;
pub mod storage;
