pub mod hud;
pub mod leaderboard;
pub mod menu;
