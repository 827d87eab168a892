use crate::config::EnemyConfig;

pub const ENEMY_CHAR: char = 'x';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub xp_reward: i32,
}

impl MonsterTemplate {
    /// The single stationary enemy kind guarding every floor.
    pub fn warden(stats: &EnemyConfig) -> Self {
        Self::new("Warden", stats.hp, stats.attack, stats.xp_reward)
    }

    fn new(name: &'static str, hp: i32, attack: i32, xp_reward: i32) -> Self {
        Self {
            name,
            hp,
            attack,
            xp_reward,
        }
    }
}
