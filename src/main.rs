use clap::Parser;
use yelp_csv::utils::error::EtlError;
use yelp_csv::utils::{logger, validation::Validate};
use yelp_csv::{CliConfig, Converter, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        if matches!(e, EtlError::MissingArgument) {
            eprintln!("usage: yelp-csv <filename>");
        } else {
            eprintln!("❌ {}", e.user_friendly_message());
        }
        std::process::exit(e.exit_code());
    }

    // 輸出 CSV 寫入目前工作目錄
    let storage = LocalStorage::new(".");

    let result = Converter::from_config(storage, &config).and_then(|converter| {
        println!(
            "Converting {} to {} ...",
            converter.input_path(),
            converter.kind().output_file_name()
        );
        converter.run()
    });

    match result {
        Ok(summary) => {
            println!(
                "✅ Wrote {} rows to {}",
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
