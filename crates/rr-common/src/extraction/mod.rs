//! 履歴書・求人票テキストからの構造化シグナル抽出。
//!
//! 正規表現と固定語彙だけで動く純粋関数の集まりで、抽出できなかった
//! 項目は空値として返す（マッチしないこと自体はエラーではない）。

pub mod career;
pub mod sections;

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::vocab;
use crate::{DegreeLevel, GradeEntry, JobRequirement, ResumeProfile};

pub use career::{
    career_path_alignment, count_categories, estimate_skill_depth, extract_career_progression,
    CategoryCounts,
};
pub use sections::{
    extract_certifications, group_education_lines, split_sections, Section,
};

/// これを超える年数表現はノイズとみなす
const MAX_PLAUSIBLE_EXPERIENCE_YEARS: u32 = 50;

/// 学歴行として採用する最小文字数
const MIN_EDUCATION_LINE_LEN: usize = 9;

lazy_static! {
    // "5+ years experience" / "7 yrs of experience"
    static ref EXPERIENCE_RE: Regex =
        Regex::new(r"(\d+)\+?\s*(?:years|yrs)\s+(?:of\s+)?experience").unwrap();
    // "3rd year B.Tech" など在学中を示す表現。実務経験と混同しない
    static ref ACADEMIC_YEAR_RE: Regex =
        Regex::new(r"\d+(?:st|nd|rd|th)?\s+year\s+(?:student|b\.?tech|m\.?tech|undergraduate)")
            .unwrap();
    // 求人票側の必要年数: "3+ years of experience"
    static ref JD_EXPERIENCE_RE: Regex = Regex::new(r"(\d+)\+?\s+years? of experience").unwrap();
    // 成績行の検出とラベル・値の取り出し
    static ref GRADE_LABEL_RE: Regex = Regex::new(r"(?i)\b(CGPA|GPA|Percentage|Grade)\b").unwrap();
    static ref GRADE_VALUE_RE: Regex = Regex::new(
        r"(?i)(CGPA|GPA|Percentage|Grade)\s*[:;/\\\-]?\s*([0-9]{1,2}(?:\.[0-9]{1,2})?%?)"
    )
    .unwrap();
    // 求人タイトル: "We are hiring for ..." / "Position: ..."（行内で完結させる）
    static ref JD_TITLE_RE: Regex =
        Regex::new(r"(?i)(we are hiring for|looking for|position:|role:)\s+([\w \t\-/]+)").unwrap();
}

/// 履歴書テキストから ResumeProfile を構築する。
pub fn build_resume_profile(text: &str) -> ResumeProfile {
    let sections = split_sections(text);
    let skills = extract_skills(text);

    let education_lines = sections.get(&Section::Education).cloned().unwrap_or_default();
    let cleaned: Vec<String> = dedup_first_seen(
        education_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| line.len() >= MIN_EDUCATION_LINE_LEN)
            .filter(|line| !line.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string),
    );
    let education = group_education_lines(&cleaned);

    let years_experience = extract_years_of_experience(text);
    let career_progression = extract_career_progression(text);
    let certifications = extract_certifications(text);
    let grades = extract_grades(text);

    let signals = ResumeSignals {
        years_experience,
        education: education.clone(),
    };
    let red_flags = evaluate_red_flags(&signals);
    let recommendations = generate_recommendations(&skills);
    let confidence_score = confidence_score(skills.len());

    ResumeProfile {
        skills,
        education,
        grades,
        years_experience,
        career_progression,
        certifications,
        red_flags,
        recommendations,
        confidence_score,
    }
}

/// 求人票テキストから JobRequirement を構築する。
pub fn extract_job_requirement(text: &str) -> JobRequirement {
    let lowered = text.to_lowercase();

    let required_skills = extract_skills_from(&lowered, vocab::JD_SKILLS);
    let min_experience = JD_EXPERIENCE_RE
        .captures(&lowered)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    let required_degree = if lowered.contains("bachelor") || lowered.contains("b.tech") {
        DegreeLevel::Bachelor
    } else if lowered.contains("master") || lowered.contains("m.tech") {
        DegreeLevel::Master
    } else {
        DegreeLevel::None
    };

    JobRequirement {
        required_skills,
        min_experience,
        required_degree,
        title: extract_job_title(text),
    }
}

/// 固定語彙との部分一致でスキル集合を抽出する（大文字小文字は無視）。
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    extract_skills_from(&text.to_lowercase(), vocab::RESUME_SKILLS)
}

fn extract_skills_from(lowered: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|skill| lowered.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// 実務経験年数の推定。
///
/// 数値つき経験表現の最大値を採用し、50年超は誤検出として棄却する。
/// 学年表現（"3rd year B.Tech" 等）が本文にあれば在学中とみなし、
/// 他のマッチに関係なく 0 を返す。
pub fn extract_years_of_experience(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    if ACADEMIC_YEAR_RE.is_match(&lowered) {
        return 0;
    }

    EXPERIENCE_RE
        .captures_iter(&lowered)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .filter(|years| *years <= MAX_PLAUSIBLE_EXPERIENCE_YEARS)
        .max()
        .unwrap_or(0)
}

/// 成績エントリの抽出。
///
/// セクションに関係なく全行を走査する。成績はラベル付きセクションの
/// 外に書かれることが多いため、意図的に全文スキャンとしている。
pub fn extract_grades(text: &str) -> Vec<GradeEntry> {
    let mut seen = BTreeSet::new();
    let mut grades = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if !GRADE_LABEL_RE.is_match(line) {
            continue;
        }
        if let Some(caps) = GRADE_VALUE_RE.captures(line) {
            let entry = GradeEntry {
                label: caps[1].to_string(),
                value: caps[2].to_string(),
            };
            if seen.insert(entry.to_string()) {
                grades.push(entry);
            }
        }
    }

    grades
}

/// 求人タイトルの抽出。定型句にマッチしなければ先頭行（100文字まで）。
pub fn extract_job_title(text: &str) -> String {
    if let Some(caps) = JD_TITLE_RE.captures(text) {
        return caps[2].trim().to_string();
    }

    text.trim()
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(100)
        .collect()
}

/// 複数求人票をまとめたテキストを空行で分割する。
pub fn split_job_descriptions(blob: &str) -> Vec<String> {
    blob.split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect()
}

/// 赤旗ルールが参照する抽出済みシグナル
#[derive(Debug, Clone, Default)]
pub struct ResumeSignals {
    pub years_experience: u32,
    pub education: Vec<String>,
}

/// ルール評価が個別に失敗したときのエラー
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("signal unavailable: {0}")]
    SignalUnavailable(&'static str),
}

/// 赤旗ルール。判定は Result を返し、Err は記録してスキップする。
pub struct RedFlagRule {
    pub name: &'static str,
    pub message: &'static str,
    pub check: fn(&ResumeSignals) -> Result<bool, RuleError>,
}

fn rule_low_experience(signals: &ResumeSignals) -> Result<bool, RuleError> {
    Ok(signals.years_experience < 1)
}

fn rule_missing_education(signals: &ResumeSignals) -> Result<bool, RuleError> {
    Ok(signals.education.is_empty()
        || signals
            .education
            .iter()
            .all(|record| matches!(record.to_lowercase().as_str(), "n/a" | "not detected" | "")))
}

fn rule_diploma_only(signals: &ResumeSignals) -> Result<bool, RuleError> {
    Ok(!signals.education.is_empty()
        && signals
            .education
            .iter()
            .all(|record| record.to_lowercase().contains("diploma")))
}

fn rule_junior_experience(signals: &ResumeSignals) -> Result<bool, RuleError> {
    Ok((1..3).contains(&signals.years_experience))
}

/// 評価順は固定。順序を変えると red_flags の並びが変わる。
pub const RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        name: "low_experience",
        message: "Very low or no work experience",
        check: rule_low_experience,
    },
    RedFlagRule {
        name: "missing_education",
        message: "Education details missing or unclear",
        check: rule_missing_education,
    },
    RedFlagRule {
        name: "diploma_only",
        message: "Only diploma-level education detected",
        check: rule_diploma_only,
    },
    RedFlagRule {
        name: "junior_experience",
        message: "Junior-level experience",
        check: rule_junior_experience,
    },
];

/// 既定ルール表で赤旗を評価する。
pub fn evaluate_red_flags(signals: &ResumeSignals) -> Vec<String> {
    evaluate_red_flag_rules(RED_FLAG_RULES, signals)
}

/// ルール表を順に評価する。1件の失敗は warn を出して読み飛ばし、
/// 残りのルールは必ず実行する。
pub fn evaluate_red_flag_rules(rules: &[RedFlagRule], signals: &ResumeSignals) -> Vec<String> {
    let mut flags = Vec::new();

    for rule in rules {
        match (rule.check)(signals) {
            Ok(true) => flags.push(rule.message.to_string()),
            Ok(false) => {}
            Err(err) => {
                warn!(rule = rule.name, error = %err, "red flag rule failed; skipping");
            }
        }
    }

    flags
}

/// スキル補強提案の生成。
///
/// カテゴリの語がスキル集合に1つも無いときだけメッセージを出し、
/// ルール順にセミコロンで連結する。全カテゴリ充足なら定型文1件。
pub fn generate_recommendations(skills: &BTreeSet<String>) -> String {
    let skills_text = skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let messages: Vec<&str> = vocab::SKILL_RECOMMENDATIONS
        .iter()
        .filter(|rule| !rule.keywords.iter().any(|kw| skills_text.contains(kw)))
        .map(|rule| rule.message)
        .collect();

    if messages.is_empty() {
        vocab::WELL_ROUNDED_MESSAGE.to_string()
    } else {
        messages.join("; ")
    }
}

/// スキル数ベースの確信度: min(0.5 + 0.05 * n, 1.0)
pub fn confidence_score(skill_count: usize) -> f64 {
    (0.5 + 0.05 * skill_count as f64).min(1.0)
}

fn dedup_first_seen<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = BTreeSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}
