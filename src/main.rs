// ==========================================
// 考勤违规日报生成器 - 命令行入口
// ==========================================
// 选择考勤表 → 生成报表 → 输出单日树与汇总树
// ==========================================

use anyhow::{Context, Result};
use attendance_report::config::ConfigManager;
use attendance_report::i18n::{self, t, SUPPORTED_LOCALES};
use attendance_report::render::render_text;
use attendance_report::{ReportApi, ReportSession};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// 考勤违规日报生成器
#[derive(Parser, Debug)]
#[command(name = "attendance-report", version, about)]
struct Cli {
    /// 考勤表文件（.xlsx / .xls / .csv）
    file: PathBuf,

    /// 配置文件路径（默认 ~/.daily_report_config/user_config.json）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 报表语言
    #[arg(short, long, default_value = "zh-CN", value_parser = SUPPORTED_LOCALES)]
    locale: String,

    /// 处理日期，纯时刻值绑定到该日期（默认当天，格式 YYYY-MM-DD）
    #[arg(long)]
    date: Option<NaiveDate>,

    /// 以 JSON 输出完整报表
    #[arg(long)]
    json: bool,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        attendance_report::logging::init_json();
    } else {
        attendance_report::logging::init();
    }
    i18n::set_locale(&cli.locale);

    tracing::info!(
        "{} v{}",
        attendance_report::APP_NAME,
        attendance_report::VERSION
    );

    let config_manager = match cli.config {
        Some(path) => ConfigManager::load(path),
        None => ConfigManager::load_default().context("无法定位配置目录")?,
    };
    tracing::info!("使用配置: {}", config_manager.config_path().display());

    let report_api = match cli.date {
        Some(date) => ReportApi::with_processing_date(date),
        None => ReportApi::new(),
    };
    let mut session = ReportSession::new(config_manager, report_api);

    let result = session.select_file(&cli.file).map(|_| ());
    if let Some(status) = session.status_message() {
        eprintln!("{}", status);
    }
    result?;

    if cli.json {
        let report = session.last_report().context("报表为空")?;
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let daily = session.daily_trees();
    if daily.is_empty() {
        println!("{}", t("report.empty"));
        return Ok(());
    }

    println!("== {} ==", t("report.daily_title"));
    print!("{}", render_text(&daily));

    if let Some(range) = session.range_tree() {
        println!();
        println!("== {} ==", t("report.range_title"));
        print!("{}", render_text(&[range]));
    }

    Ok(())
}
