//! カテゴリ別サブスコアと総合スクリーニングスコアの計算。
//!
//! どの関数も退化入力（空のスキル集合、経験ゼロ）で必ず数値を返す。
//! 比率計算は分母に最低値 1 を置くか、固定の 0.0 を返す。

use std::collections::BTreeSet;

use serde::Serialize;

use super::clamp01;
use super::weights::{EXPERIENCE_WEIGHTS, SCREENING_WEIGHTS};
use crate::vocab;
use crate::JobRequirement;

/// カテゴリ別サブスコアと総合値。クランプ済みで全て [0, 1]。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreBreakdown {
    pub experience_relevance: f64,
    pub culture_fit: f64,
    pub academic_score: f64,
    pub overall: f64,
}

/// 経験年数の充足度。
///
/// required=0 のときは actual=0 でも最初の分岐に入り 1.0 を返す。
/// この境界は正規化しない（要件なしは常に充足とみなす）。
pub fn experience_score(actual: u32, required: u32) -> f64 {
    if actual >= required {
        1.0
    } else if actual + 1 >= required {
        0.7
    } else if actual > 0 {
        0.4
    } else {
        0.2
    }
}

/// 求人の必須スキルのうち履歴書本文に現れる割合。要件なしは 0.0。
pub fn relevant_experience_score(resume_text: &str, required_skills: &BTreeSet<String>) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let lowered = resume_text.to_lowercase();
    let matched = required_skills
        .iter()
        .filter(|skill| lowered.contains(skill.to_lowercase().as_str()))
        .count();
    (matched as f64 / required_skills.len() as f64).min(1.0)
}

/// 求人タイトルが履歴書本文にそのまま現れるか（大文字小文字は無視）。
pub fn title_match_score(resume_text: &str, job_title: &str) -> f64 {
    let title = job_title.trim().to_lowercase();
    if title.is_empty() {
        return 0.0;
    }
    if resume_text.to_lowercase().contains(&title) {
        1.0
    } else {
        0.0
    }
}

/// リーダーシップ語彙の出現割合。
pub fn leadership_score(resume_text: &str) -> f64 {
    let lowered = resume_text.to_lowercase();
    let mentions = vocab::LEADERSHIP_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .count();
    (mentions as f64 / vocab::LEADERSHIP_TERMS.len() as f64).min(1.0)
}

/// 経験関連度（サブスコアの重み付き和）。
pub fn experience_relevance(
    resume_text: &str,
    resume_years: u32,
    requirement: &JobRequirement,
) -> f64 {
    let weights = EXPERIENCE_WEIGHTS;
    weights.base_experience * experience_score(resume_years, requirement.min_experience)
        + weights.relevant_experience
            * relevant_experience_score(resume_text, &requirement.required_skills)
        + weights.title_match * title_match_score(resume_text, &requirement.title)
        + weights.leadership * leadership_score(resume_text)
}

/// ソフトスキル語彙の出現割合によるカルチャーフィット。
pub fn culture_fit_score(resume_text: &str) -> f64 {
    let lowered = resume_text.to_lowercase();
    let overlap = vocab::SOFT_SKILLS
        .iter()
        .filter(|skill| lowered.contains(*skill))
        .count();
    (overlap as f64 / vocab::SOFT_SKILLS.len() as f64).min(1.0)
}

/// 成績エントリ数 → 学業点のルール表（7件以上はしきい値、以下は一致）。
///
/// 4件が 0 に落ちる欠番を含め、段差をならさずそのまま保持する。
/// 補間式に置き換えないこと。
const ACADEMIC_TOP_THRESHOLD: (usize, u32) = (7, 100);
const ACADEMIC_POINT_RULES: &[(usize, u32)] = &[(6, 80), (5, 60), (3, 40), (2, 20), (1, 10)];

/// 成績エントリ数を学業点（0〜100）に写像する。
pub fn academic_points(grade_count: usize) -> u32 {
    if grade_count >= ACADEMIC_TOP_THRESHOLD.0 {
        return ACADEMIC_TOP_THRESHOLD.1;
    }
    ACADEMIC_POINT_RULES
        .iter()
        .find(|(count, _)| *count == grade_count)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// 学業スコア（学業点を 0〜1 に正規化）。
pub fn academic_score(grade_count: usize) -> f64 {
    academic_points(grade_count) as f64 / 100.0
}

/// スクリーニング総合スコアの内訳を計算する。
pub fn score_breakdown(
    resume_text: &str,
    resume_years: u32,
    grade_count: usize,
    requirement: &JobRequirement,
) -> ScoreBreakdown {
    let experience = clamp01(experience_relevance(resume_text, resume_years, requirement));
    let culture = clamp01(culture_fit_score(resume_text));
    let academic = clamp01(academic_score(grade_count));

    let weights = SCREENING_WEIGHTS;
    let overall = clamp01(
        weights.experience_relevance * experience
            + weights.culture_fit * culture
            + weights.academic * academic,
    );

    ScoreBreakdown {
        experience_relevance: experience,
        culture_fit: culture,
        academic_score: academic,
        overall,
    }
}

/// スキル確信度: 一致数 / max(必須数, 1)、小数第2位で丸め。
pub fn skill_confidence_score(matched: usize, required: usize) -> f64 {
    let ratio = matched as f64 / required.max(1) as f64;
    (ratio * 100.0).round() / 100.0
}
