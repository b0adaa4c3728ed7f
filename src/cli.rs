use clap::{Parser, Subcommand};
use college_showcase_common::DepartmentFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "college")]
#[command(about = "カレッジ紹介: 教員名簿・学科一覧・食堂メニュー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定ファイル、なければ組み込みサンプル）
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 教員名簿を検索・絞り込み
    Faculty {
        /// 検索文字列（名前・学科に部分一致）
        #[arg(short, long)]
        query: Option<String>,

        /// 学科 (all/cs/phy/math/chem/eng/bba または学科名)
        #[arg(short, long)]
        department: Option<DepartmentFilter>,

        /// 対話モードで検索
        #[arg(short, long)]
        interactive: bool,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 学科と開講クラスを表示
    Departments {
        /// 学科名またはID（省略時は一覧）
        name: Option<String>,

        /// 一覧の検索文字列（学科名に部分一致）
        #[arg(short, long)]
        query: Option<String>,

        /// セメスターで絞り込み
        #[arg(short, long)]
        semester: Option<u8>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 大学の統計を表示
    Stats {
        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 食堂メニューと注文金額
    Menu {
        /// メニューID（省略時は一覧）
        item: Option<u32>,

        /// 注文数
        #[arg(short = 'n', long, default_value = "1")]
        quantity: u32,

        /// 一覧の検索文字列（品名・区分に部分一致）
        #[arg(short, long)]
        query: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 設定を表示/編集
    Config {
        /// 名簿の初期学科を設定
        #[arg(long)]
        set_default_department: Option<DepartmentFilter>,

        /// カタログJSONのパスを設定
        #[arg(long)]
        set_data_path: Option<PathBuf>,

        /// 通貨表記を設定（例: Rs., PKR）
        #[arg(long)]
        set_currency: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 設定ファイルを読む必要があるか
    pub fn uses_config(&self) -> bool {
        !matches!(self, Commands::Stats { .. })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_faculty_command() {
        let cli = Cli::try_parse_from(["college", "faculty", "-q", "comp", "-d", "cs"]).unwrap();
        match cli.command {
            Commands::Faculty { query, department, interactive, format } => {
                assert_eq!(query.as_deref(), Some("comp"));
                assert_eq!(department, Some(DepartmentFilter::ComputerScience));
                assert!(!interactive);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("faculty expected"),
        }
    }

    #[test]
    fn test_unknown_department_rejected() {
        assert!(Cli::try_parse_from(["college", "faculty", "-d", "astrology"]).is_err());
    }

    #[test]
    fn test_global_data_option() {
        let cli = Cli::try_parse_from(["college", "stats", "--data", "catalog.json", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("catalog.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_departments_query() {
        let cli = Cli::try_parse_from(["college", "departments", "--query", "sci"]).unwrap();
        match cli.command {
            Commands::Departments { name, query, .. } => {
                assert!(name.is_none());
                assert_eq!(query.as_deref(), Some("sci"));
            }
            _ => panic!("departments expected"),
        }
    }

    #[test]
    fn test_stats_does_not_use_config() {
        let stats = Cli::try_parse_from(["college", "stats"]).unwrap();
        assert!(!stats.command.uses_config());

        for args in [
            vec!["college", "faculty"],
            vec!["college", "departments"],
            vec!["college", "menu"],
            vec!["college", "config", "--show"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.command.uses_config());
        }
    }

    #[test]
    fn test_menu_defaults() {
        let cli = Cli::try_parse_from(["college", "menu", "2"]).unwrap();
        match cli.command {
            Commands::Menu { item, quantity, .. } => {
                assert_eq!(item, Some(2));
                assert_eq!(quantity, 1);
            }
            _ => panic!("menu expected"),
        }
    }
}
