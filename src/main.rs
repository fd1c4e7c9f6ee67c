use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use recycle_me::{analyzer, cli, config, error, scanner};
use recycle_me_common::UploadState;
use analyzer::{AnalysisRecord, CacheFile, CachingAnalyzer, GeminiClient};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { paths, model, json, use_cache, cache_dir } => {
            println!("♻️  recycle-me - 画像解析\n");

            // 1. 画像収集
            let images = scanner::collect_images(&paths)?;
            if images.is_empty() {
                let joined = paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(error::RecycleMeError::NoImagesFound(joined));
            }
            println!("✔ {}枚の画像を検出\n", images.len());

            // 2. クライアント生成
            let api_key = config.get_api_key()?;
            let model = model.unwrap_or_else(|| config.model.clone());
            let client = GeminiClient::new(
                api_key,
                model.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?;
            tracing::debug!(model = client.model(), "gemini client ready");

            // 3. 解析
            let total = images.len();
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));

            let on_start = |i: usize, image: &scanner::LocalImage| {
                spinner.set_message(format!("[{}/{}] {} を解析中...", i + 1, total, image.file.name));
            };
            let on_done = |_: usize, record: &AnalysisRecord| {
                spinner.suspend(|| print_record(record));
            };

            let records = if use_cache {
                let cache_dir = cache_dir.unwrap_or_else(|| PathBuf::from("."));
                let caching = CachingAnalyzer::new(client, model.as_str(), CacheFile::load(&cache_dir));
                let records = analyzer::analyze_images(&images, &caching, on_start, on_done).await;
                spinner.suspend(|| println!("キャッシュヒット: {}件", caching.hits()));
                caching.into_cache().save(&cache_dir)?;
                records
            } else {
                analyzer::analyze_images(&images, &client, on_start, on_done).await
            };
            spinner.finish_and_clear();

            // 4. 結果保存
            if let Some(json_path) = json {
                let content = serde_json::to_string_pretty(&records)?;
                std::fs::write(&json_path, content)?;
                println!("✔ 結果を保存: {}", json_path.display());
            }

            let succeeded = records.iter().filter(|r| r.is_success()).count();
            println!("\n✅ 解析完了: 成功 {}件 / 失敗 {}件", succeeded, records.len() - succeeded);
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key);
                config.save()?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model);
                config.save()?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = CacheFile::cache_path(&target);

            if info || !clear {
                // デフォルトまたは--info: 情報表示
                if cache_path.exists() {
                    let cache = CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match CacheFile::clear(&target) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 応答テキストは加工せずにそのまま出力する
fn print_record(record: &AnalysisRecord) {
    println!("📷 {}", record.file_name);
    match &record.state {
        UploadState::Succeeded(text) => println!("{}\n", text),
        UploadState::Failed(message) => println!("✖ {}\n", message),
        UploadState::Idle | UploadState::Loading => {}
    }
}
