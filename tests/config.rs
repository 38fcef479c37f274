#[cfg(test)]
mod tests {
    use taskdeck::libs::config::{Config, DefaultsConfig, ViewConfig, CONFIG_FILE_NAME};
    use taskdeck::libs::data_storage::DataStorage;
    use taskdeck::libs::query::{SortOrder, StatusFilter};
    use taskdeck::libs::task::{Category, Priority};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives every test its own data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn data_storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path())
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.defaults.is_none());
        assert!(config.view.is_none());
        assert!(config.confirm_destructive());
        assert_eq!(config.defaults().category, Category::Work);
        assert_eq!(config.defaults().priority, Priority::Medium);
        assert_eq!(config.view().sort, SortOrder::Newest);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.data_storage()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            defaults: Some(DefaultsConfig {
                category: Category::Personal,
                priority: Priority::High,
            }),
            view: Some(ViewConfig {
                sort: SortOrder::DueDate,
                status: StatusFilter::Pending,
            }),
            confirm_destructive: Some(false),
        };
        config.save_to(&ctx.data_storage()).unwrap();

        let read = Config::read_from(&ctx.data_storage()).unwrap();
        assert_eq!(read, config);
        assert!(!read.confirm_destructive());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.data_storage().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "view": { "sort": "priority", "status": "today" } }"#).unwrap();

        let config = Config::read_from(&ctx.data_storage()).unwrap();
        assert!(config.defaults.is_none());
        assert_eq!(config.view().sort, SortOrder::Priority);
        assert_eq!(config.view().status, StatusFilter::Today);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.data_storage().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.data_storage()).is_err());
    }
}
