pub mod cosmetics;
pub mod fallback;
pub mod health;
pub mod riot;

pub use cosmetics::{skins, weapon_skins, weapons};
pub use fallback::not_found;
pub use health::health_check;
pub use riot::{content, leaderboard, status};
