use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recycle-me")]
#[command(about = "画像から資源ごみを判定するAI解析ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析して結果を表示
    Analyze {
        /// 画像ファイルまたはフォルダ（複数指定可）
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 使用するGeminiモデル（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,

        /// 結果をJSONファイルにも保存
        #[arg(long)]
        json: Option<PathBuf>,

        /// キャッシュを使用（同じ画像の再送信をスキップ）
        #[arg(long)]
        use_cache: bool,

        /// キャッシュファイルの置き場所（省略時はカレント）
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}
