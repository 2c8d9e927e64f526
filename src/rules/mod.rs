//! Pure rule functions.
//!
//! Nothing here touches a session. The aggregate in `session` gathers
//! facts, calls into these functions, and applies the answer:
//! - `roles`: role multiset per table size and its shuffle
//! - `powers`: executive power unlocked per fascist-policy count
//! - `win`: ordered win-condition evaluation

pub mod powers;
pub mod roles;
pub mod win;

pub use powers::{unlocked_power, ExecutivePower, PowerToken};
pub use roles::{assign_roles, fascist_count, role_distribution};
pub use win::{evaluate, Victory, WinCheck, WinReason};
