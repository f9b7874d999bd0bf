pub mod fixture;
pub mod player;
pub mod team;
