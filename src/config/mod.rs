pub mod cli;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_required_field, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "yelp-csv")]
    #[command(about = "Convert a Yelp academic dataset JSON file to CSV")]
    pub struct CliConfig {
        /// Dataset file; its name must contain "review", "user" or "business"
        pub filename: Option<String>,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            self.filename.as_deref().unwrap_or_default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            let filename = validate_required_field(&self.filename)?;
            validate_path("filename", filename)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::error::EtlError;

        #[test]
        fn test_parse_positional_filename() {
            let config = CliConfig::parse_from(["yelp-csv", "yelp_academic_dataset_user.json"]);
            assert_eq!(config.input_path(), "yelp_academic_dataset_user.json");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_missing_filename_fails_validation() {
            let config = CliConfig::parse_from(["yelp-csv"]);
            assert!(matches!(config.validate(), Err(EtlError::MissingArgument)));
        }

        #[test]
        fn test_extra_arguments_are_rejected() {
            assert!(CliConfig::try_parse_from(["yelp-csv", "a_review.json", "b.json"]).is_err());
        }
    }
}
