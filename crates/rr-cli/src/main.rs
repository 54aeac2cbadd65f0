//! スクリーニングエンジンの CLI ホスト。
//!
//! ファイルからプレーンテキストを読み、エンジン境界を呼び出して
//! 構造化結果を JSON で標準出力に書く。文書フォーマットの解読
//! （PDF など）はこのホストより外側の仕事。

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use rr_common::engine::{ScreeningEngine, DEFAULT_TOP_K};
use rr_common::extraction::split_job_descriptions;
use rr_common::logging;
use rr_common::matching::MatchError;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode result as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Match(#[from] MatchError),
}

#[derive(Debug, Parser)]
#[command(name = "rr-cli", about = "Resume screening engine CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 履歴書を解析して構造化プロファイルを出力する
    Analyze {
        /// 履歴書のテキストファイル
        #[arg(long, env = "RR_RESUME_FILE")]
        resume: PathBuf,
    },
    /// 求人票から要件を抽出する
    Requirements {
        /// 求人票のテキストファイル
        #[arg(long, env = "RR_JD_FILE")]
        jd: PathBuf,
    },
    /// 求人票群を履歴書との近さでランキングする
    Match {
        #[arg(long, env = "RR_RESUME_FILE")]
        resume: PathBuf,
        /// 空行区切りで複数求人票をまとめたファイル
        #[arg(long, env = "RR_JOBS_FILE")]
        jobs: PathBuf,
        /// 返す件数
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        k: usize,
    },
    /// フル解析（スコア内訳・タグ・学習提案・判定・要約）
    Screen {
        #[arg(long, env = "RR_RESUME_FILE")]
        resume: PathBuf,
        #[arg(long, env = "RR_JOBS_FILE")]
        jobs: PathBuf,
    },
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 学習提案の表示形。該当なしは "None"。
fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "None".to_string()
    } else {
        suggestions.join(", ")
    }
}

fn run() -> Result<(), CliError> {
    dotenv().ok();
    logging::init_tracing_subscriber("rr-cli");
    logging::install_tracing_panic_hook("rr-cli");

    let cli = Cli::parse();
    let engine = ScreeningEngine::default();

    match cli.command {
        Command::Analyze { resume } => {
            let profile = engine.analyze_resume(&read_text(&resume)?);
            print_json(&profile)?;
        }
        Command::Requirements { jd } => {
            let requirement = engine.analyze_job_description(&read_text(&jd)?);
            print_json(&requirement)?;
        }
        Command::Match { resume, jobs, k } => {
            let resume_text = read_text(&resume)?;
            let job_texts = split_job_descriptions(&read_text(&jobs)?);
            let matches = engine.find_top_matches(&resume_text, &job_texts, k)?;
            print_json(&matches)?;
        }
        Command::Screen { resume, jobs } => {
            let resume_text = read_text(&resume)?;
            let job_texts = split_job_descriptions(&read_text(&jobs)?);
            let report = engine.screen(&resume_text, &job_texts)?;
            info!(
                verdict = %report.recommendation.final_verdict,
                suggestions = %render_suggestions(&report.recommendation.suggestions),
                "screening finished"
            );
            print_json(&report)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "rr-cli failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_suggestions_render_as_none() {
        assert_eq!(render_suggestions(&[]), "None");
    }

    #[test]
    fn suggestions_are_comma_joined() {
        let suggestions = vec![
            "AWS Essentials (LinkedIn Learning)".to_string(),
            "Kubernetes for Developers (Udemy)".to_string(),
        ];
        assert_eq!(
            render_suggestions(&suggestions),
            "AWS Essentials (LinkedIn Learning), Kubernetes for Developers (Udemy)"
        );
    }

    #[test]
    fn missing_file_maps_to_read_error() {
        let err = read_text(Path::new("/no/such/resume.txt")).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }
}
