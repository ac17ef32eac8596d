use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use yidian_config::Config;

/// Load the default config shipped in the repo, or built-in defaults when
/// running outside a checkout.
fn load_repo_default_config() -> anyhow::Result<Config> {
    match File::open("config.json") {
        Ok(file) => {
            let reader = BufReader::new(file);
            let config = serde_json::from_reader(reader)?;
            Ok(config)
        }
        Err(_) => {
            tracing::warn!("config.json not found, using built-in defaults");
            Ok(Config::new())
        }
    }
}

fn config_root() -> PathBuf {
    if let Ok(dir) = env::var("YIDIAN_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yidian")
}

fn profiles_dir() -> PathBuf {
    config_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and the main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let default_config = load_repo_default_config()?;
        let profile = Profile {
            name: "main".into(),
            value: default_config,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("created main profile");
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("profile {name} not found, falling back to main profile or defaults");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            load_repo_default_config()
        }
    }
}

/// Persist a profile, creating or replacing it
pub fn save_user_profile(name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir())?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profiles_dir().join(format!("{name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("saved profile: {name}");
    Ok(file)
}
