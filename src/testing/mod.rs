//! In-memory stand-ins for the file-backed country source and leaderboard
//! store, used to drive the controller from scripted input.

pub mod source;
pub mod store;

pub use source::MemoryCountrySource;
pub use store::MemoryLeaderboardStore;
