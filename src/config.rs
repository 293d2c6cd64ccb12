use std::path::PathBuf;
use std::str::FromStr;

use crate::category::Category;
use crate::constants::{
    BOT_USERNAME, DEFAULT_CATEGORIES, DISCORD_API_BASE, GIANTBOMB_API_BASE, HISTORY_FILE,
    HUGGINGFACE_API_URL, LAST_MESSAGE_FILE, ROTATION_FILE,
};
use crate::rotation::Rotation;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("'{0}' not set")]
    Missing(&'static str),

    #[error("invalid value for '{var}': {value}")]
    Invalid { var: &'static str, value: String },
}

/// How votes on the previous challenge are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyMode {
    /// Reactions on replies to the challenge, credited to each reply's author.
    Replies,
    /// Reactions on the challenge itself, credited to each reacting user.
    Reactions,
}

impl FromStr for TallyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replies" => Ok(TallyMode::Replies),
            "reactions" => Ok(TallyMode::Reactions),
            _ => Err(()),
        }
    }
}

/// Channel access for pinning and reading votes. Both halves are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotAccess {
    pub token: String,
    pub channel_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub test_webhook_url: Option<String>,
    pub bot: Option<BotAccess>,
    pub giantbomb_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    pub discord_api_base: String,
    pub giantbomb_api_base: String,
    pub huggingface_api_url: String,
    pub rotation: Rotation,
    pub state_dir: PathBuf,
    pub corpus_dir: Option<PathBuf>,
    pub recency_filter: bool,
    pub tally_mode: TallyMode,
    pub username: String,
}

impl Config {
    /// Builds the config from any variable source. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let webhook_url = get("WEBHOOK_URL").ok_or(ConfigError::Missing("WEBHOOK_URL"))?;

        let bot = match (get("DISCORD_BOT_TOKEN"), get("DISCORD_CHANNEL_ID")) {
            (Some(token), Some(channel_id)) => Some(BotAccess { token, channel_id }),
            _ => None,
        };

        let categories = get("CHALLENGE_CATEGORIES").unwrap_or_else(|| DEFAULT_CATEGORIES.into());
        let rotation = parse_rotation(&categories)?;

        let recency_filter = match get("RECENCY_FILTER") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "RECENCY_FILTER",
                value,
            })?,
            None => true,
        };

        let tally_mode = match get("TALLY_MODE") {
            Some(value) => value.parse::<TallyMode>().map_err(|_| ConfigError::Invalid {
                var: "TALLY_MODE",
                value,
            })?,
            None => TallyMode::Replies,
        };

        Ok(Self {
            webhook_url,
            test_webhook_url: get("TEST_WEBHOOK_URL"),
            bot,
            giantbomb_api_key: get("GIANTBOMB_API_KEY"),
            huggingface_api_key: get("HUGGINGFACE_API_KEY"),
            discord_api_base: get("DISCORD_API_BASE").unwrap_or_else(|| DISCORD_API_BASE.into()),
            giantbomb_api_base: get("GIANTBOMB_API_BASE")
                .unwrap_or_else(|| GIANTBOMB_API_BASE.into()),
            huggingface_api_url: get("HUGGINGFACE_API_URL")
                .unwrap_or_else(|| HUGGINGFACE_API_URL.into()),
            rotation,
            state_dir: get("STATE_DIR").map(PathBuf::from).unwrap_or_else(|| ".".into()),
            corpus_dir: get("CORPUS_DIR").map(PathBuf::from),
            recency_filter,
            tally_mode,
            username: get("BOT_USERNAME").unwrap_or_else(|| BOT_USERNAME.into()),
        })
    }

    pub fn rotation_path(&self) -> PathBuf {
        self.state_dir.join(ROTATION_FILE)
    }

    pub fn last_message_path(&self) -> PathBuf {
        self.state_dir.join(LAST_MESSAGE_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.state_dir.join(HISTORY_FILE)
    }
}

fn parse_rotation(value: &str) -> Result<Rotation, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var: "CHALLENGE_CATEGORIES",
        value: value.to_string(),
    };

    let categories = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Category>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    Rotation::new(categories).ok_or_else(invalid)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn webhook_url_is_required() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::Missing("WEBHOOK_URL"));
        assert_eq!(
            config(&[("WEBHOOK_URL", "   ")]).unwrap_err(),
            ConfigError::Missing("WEBHOOK_URL")
        );
    }

    #[test]
    fn defaults() {
        let config = config(&[("WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc")]).unwrap();

        assert_eq!(config.test_webhook_url, None);
        assert_eq!(config.bot, None);
        assert_eq!(config.discord_api_base, DISCORD_API_BASE);
        assert_eq!(config.rotation.categories(), Category::ALL);
        assert!(config.recency_filter);
        assert_eq!(config.tally_mode, TallyMode::Replies);
        assert_eq!(config.username, BOT_USERNAME);
        assert_eq!(config.rotation_path(), PathBuf::from(".").join(ROTATION_FILE));
    }

    #[test]
    fn bot_access_needs_token_and_channel() {
        let only_token = config(&[("WEBHOOK_URL", "x"), ("DISCORD_BOT_TOKEN", "t")]).unwrap();
        assert_eq!(only_token.bot, None);

        let both = config(&[
            ("WEBHOOK_URL", "x"),
            ("DISCORD_BOT_TOKEN", "t"),
            ("DISCORD_CHANNEL_ID", "42"),
        ])
        .unwrap();
        assert_eq!(
            both.bot,
            Some(BotAccess {
                token: "t".into(),
                channel_id: "42".into()
            })
        );
    }

    #[test]
    fn category_list_is_parsed_in_order() {
        let config = config(&[
            ("WEBHOOK_URL", "x"),
            ("CHALLENGE_CATEGORIES", "character, midnight_character,car"),
        ])
        .unwrap();

        assert_eq!(
            config.rotation.categories(),
            [Category::Character, Category::Character, Category::Car]
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config(&[("WEBHOOK_URL", "x"), ("CHALLENGE_CATEGORIES", "car,boat")]),
            Err(ConfigError::Invalid { var: "CHALLENGE_CATEGORIES", .. })
        ));
        assert!(matches!(
            config(&[("WEBHOOK_URL", "x"), ("CHALLENGE_CATEGORIES", " , ")]),
            Err(ConfigError::Invalid { var: "CHALLENGE_CATEGORIES", .. })
        ));
        assert!(matches!(
            config(&[("WEBHOOK_URL", "x"), ("RECENCY_FILTER", "maybe")]),
            Err(ConfigError::Invalid { var: "RECENCY_FILTER", .. })
        ));
        assert!(matches!(
            config(&[("WEBHOOK_URL", "x"), ("TALLY_MODE", "votes")]),
            Err(ConfigError::Invalid { var: "TALLY_MODE", .. })
        ));
    }

    #[test]
    fn recency_filter_can_be_disabled() {
        let config = config(&[("WEBHOOK_URL", "x"), ("RECENCY_FILTER", "off")]).unwrap();
        assert!(!config.recency_filter);
    }
}
