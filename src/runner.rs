use crate::config::cli::LocalStorage;
use crate::config::CliConfig;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::ScopPipeline;
use crate::utils::error::ScopError;
use crate::utils::validation::Validate;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;

/// 執行一次轉換並回傳程序退出碼
///
/// 缺少任一輸入檔時不輸出任何內容並回傳 0。
pub fn run_cli<W: Write>(cli: &CliConfig, storage: LocalStorage, out: W) -> i32 {
    let config = match cli.resolve().and_then(|config| {
        if let Some(config) = &config {
            config.validate()?;
        }
        Ok(config)
    }) {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("Class and description files are both required; nothing to do");
            return EXIT_SUCCESS;
        }
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            report(&e);
            return e.exit_code();
        }
    };

    let pipeline = ScopPipeline::new(storage, config, out);
    let mut engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Conversion finished in {:.2?} ({} descriptions, {} classification lines, {} terms)",
                summary.elapsed,
                summary.descriptions,
                summary.class_lines,
                summary.emitted.family_domains
                    + summary.emitted.superfamily_domains
                    + summary.emitted.classification_terms
            );
            if let Err(e) = engine.into_pipeline().into_output().flush() {
                let e = ScopError::from(e);
                tracing::error!("❌ Failed to flush output: {}", e);
                report(&e);
                return e.exit_code();
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());
            report(&e);
            e.exit_code()
        }
    }
}

fn report(e: &ScopError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run(dir: &TempDir, args: &[&str]) -> (i32, String) {
        let cli = CliConfig::parse_from(std::iter::once("scop-rdf").chain(args.iter().copied()));
        let mut out = Vec::new();
        let code = run_cli(&cli, LocalStorage::new(dir.path()), &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_successful_run_exits_zero() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cla.txt"),
            "8001234 1abc A:1-100 P12345 1-100 8001234 1abc A:1-100 P12345 1-100 TP=1,CL=46456\n",
        )
        .unwrap();
        fs::write(dir.path().join("des.txt"), "46456 Hypothetical protein\n").unwrap();

        let (code, out) = run(&dir, &["-c", "cla.txt", "-d", "des.txt"]);
        assert_eq!(code, 0);
        assert!(out.contains("scop:46456 rdfs:subClassOf scop:1 .\n"));
    }

    #[test]
    fn test_unknown_format_exits_one() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cla.txt"), "not a valid line\n").unwrap();
        fs::write(dir.path().join("des.txt"), "46456 Hypothetical protein\n").unwrap();

        let (code, out) = run(&dir, &["-c", "cla.txt", "-d", "des.txt", "-p"]);
        assert_eq!(code, 1);
        assert!(!out.contains("not a valid line"));
    }

    #[test]
    fn test_missing_description_flag_exits_zero_without_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cla.txt"), "not even read\n").unwrap();

        let (code, out) = run(&dir, &["-c", "cla.txt", "-p"]);
        assert_eq!(code, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_configuration_error_exits_two() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("scop.toml");
        fs::write(&config_path, "[input\nclass_file = ").unwrap();

        let (code, out) = run(&dir, &["--config", config_path.to_str().unwrap()]);
        assert_eq!(code, 2);
        assert!(out.is_empty());

        let (code, _) = run(&dir, &["-c", "", "-d", "des.txt"]);
        assert_eq!(code, 2);
    }
}
