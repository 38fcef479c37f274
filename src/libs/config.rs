//! User configuration for taskdeck.
//!
//! The configuration is a small JSON document (`config.json`) stored in the
//! same data directory as the task snapshot. Every section is optional; a
//! missing file or section falls back to built-in defaults.
//!
//! ## Sections
//!
//! - **defaults**: category and priority applied by `add` when none is given
//! - **view**: sort order and status filter applied by `list`
//! - **confirm_destructive**: whether deletions ask first (default `true`)
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! let config = Config::read()?;
//! let category = config.defaults().category;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::query::{SortOrder, StatusFilter};
use super::task::{Category, Priority};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Values applied to new tasks when the user leaves them out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DefaultsConfig {
    pub category: Category,
    pub priority: Priority,
}

/// Initial state of the list view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ViewConfig {
    pub sort: SortOrder,
    pub status: StatusFilter,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,

    /// `None` means "ask".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_destructive: Option<bool>,
}

struct ConfigModule {
    key: &'static str,
    name: Message,
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(data_storage: &DataStorage) -> Result<Config> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, data_storage: &DataStorage) -> Result<()> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn view(&self) -> ViewConfig {
        self.view.clone().unwrap_or_default()
    }

    pub fn confirm_destructive(&self) -> bool {
        self.confirm_destructive.unwrap_or(true)
    }

    /// Interactive setup wizard. Starts from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "defaults",
                name: Message::ConfigModuleDefaults,
            },
            ConfigModule {
                key: "view",
                name: Message::ConfigModuleView,
            },
            ConfigModule {
                key: "safety",
                name: Message::ConfigModuleSafety,
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| module.name.to_string()).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key {
                "defaults" => {
                    let default = config.defaults();
                    msg_print!(Message::ConfigModuleDefaults);
                    let category: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultCategory.to_string())
                        .default(default.category.to_string())
                        .interact_text()?;
                    let priorities: Vec<String> = Priority::BUILTIN.iter().map(Priority::label).collect();
                    let priority = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPriority.to_string())
                        .items(&priorities)
                        .default(Priority::BUILTIN.iter().position(|p| *p == default.priority).unwrap_or(1))
                        .interact()?;
                    config.defaults = Some(DefaultsConfig {
                        category: category.parse()?,
                        priority: Priority::BUILTIN[priority].clone(),
                    });
                }
                "view" => {
                    let default = config.view();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        sort: select_value(Message::PromptDefaultSort, default.sort)?,
                        status: select_value(Message::PromptDefaultStatus, default.status)?,
                    });
                }
                "safety" => {
                    config.confirm_destructive = Some(
                        Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConfirmDestructive.to_string())
                            .default(config.confirm_destructive())
                            .interact()?,
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Lets the user pick one variant of a `ValueEnum`, preselecting `current`.
fn select_value<T: ValueEnum + PartialEq + Clone>(prompt: Message, current: T) -> Result<T> {
    let variants = T::value_variants();
    let names: Vec<String> = variants
        .iter()
        .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_string()))
        .collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&names)
        .default(variants.iter().position(|v| *v == current).unwrap_or(0))
        .interact()?;
    Ok(variants[index].clone())
}
