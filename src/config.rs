use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DescentError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub hp: i32,
    pub attack: i32,
    pub level: i32,
    pub xp: i32,
    pub next_level_xp: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hp: 10,
            attack: 1,
            level: 1,
            xp: 0,
            next_level_xp: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub hp: i32,
    pub attack: i32,
    pub xp_reward: i32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            hp: 20,
            attack: 1,
            xp_reward: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.player.hp, "player.hp"),
            (self.player.attack, "player.attack"),
            (self.player.next_level_xp, "player.next_level_xp"),
            (self.enemy.hp, "enemy.hp"),
            (self.enemy.attack, "enemy.attack"),
        ];
        for (value, field) in checks {
            if value <= 0 {
                return Err(DescentError::InvalidConfig(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.player.hp, 10);
        assert_eq!(config.enemy.attack, 1);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config =
            Config::from_json_str(r#"{ "enemy": { "hp": 2, "attack": 3 }, "log_file": "run.log" }"#)
                .unwrap();
        assert_eq!(config.enemy.hp, 2);
        assert_eq!(config.enemy.attack, 3);
        assert_eq!(config.enemy.xp_reward, 5);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn rejects_non_positive_stats() {
        let err = Config::from_json_str(r#"{ "player": { "attack": 0 } }"#).unwrap_err();
        assert!(matches!(err, DescentError::InvalidConfig(ref msg) if msg.contains("player.attack")));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json_str("{ player: ").unwrap_err();
        assert!(matches!(err, DescentError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/definitely/not/here/descent.json").unwrap_err();
        assert!(matches!(err, DescentError::Io(_)));
    }
}
