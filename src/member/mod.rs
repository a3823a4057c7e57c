//! Member profile data structures and batch loading

mod data;
pub mod loader;

pub use data::{FarInput, MemberProfile, MONTHLY_REMUNERATION_SLOTS};
pub use loader::{load_members, load_members_from_reader};
