//! スコアと不足スキルからタグ・学習提案・ナラティブを組み立てる。
//!
//! しきい値から出力への対応は全て決定論的で、確信度バンドと最終判定は
//! 独立した2つのゲート（前者はスキル一致率、後者は意味類似度）。

use std::collections::BTreeSet;

use serde::Serialize;
use strum::Display;

use crate::extraction::{count_categories, CategoryCounts};
use crate::matching::{clamp01, JobMatch};
use crate::vocab;
use crate::{JobRequirement, ResumeProfile};

use lazy_static::lazy_static;
use regex::Regex;

/// 確信度バンドの境界
const INTERVIEW_READY_THRESHOLD: f64 = 0.85;
const UPSKILL_THRESHOLD: f64 = 0.6;
/// 最終判定（意味類似度）の境界。0.75 ちょうどは不合格
const RECOMMEND_THRESHOLD: f64 = 0.75;
/// tech_fit タグに必要なハードスキル一致数
const TECH_FIT_MIN_HARD_SKILLS: usize = 5;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// マッチ評価タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchTag {
    InterviewReady,
    UpskillNeeded,
    RoleMismatch,
    CloudGap,
    CultureFit,
    TechFit,
}

/// 最終判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Recommended,
    NotRecommended,
}

/// 互換性ステータスのバンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    #[strum(serialize = "Strong Match")]
    Strong,
    #[strum(serialize = "Moderate Match")]
    Moderate,
    #[strum(serialize = "Low Match")]
    Low,
}

/// 推薦の組み立て結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Recommendation {
    pub tags: Vec<MatchTag>,
    pub suggestions: Vec<String>,
    pub final_verdict: Verdict,
    pub confidence_score: f64,
    pub semantic_score: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

/// プロファイルと要件からタグ・提案・判定を決める。
///
/// `semantic_score` は履歴書と求人票の意味類似度（埋め込み由来）で、
/// 確信度バンドとは独立に最終判定だけを左右する。
pub fn compose_recommendation(
    profile: &ResumeProfile,
    requirement: &JobRequirement,
    semantic_score: f64,
) -> Recommendation {
    let matched_skills: BTreeSet<String> = requirement
        .required_skills
        .intersection(&profile.skills)
        .cloned()
        .collect();
    let missing_skills: BTreeSet<String> = requirement
        .required_skills
        .difference(&profile.skills)
        .cloned()
        .collect();

    let confidence_score = crate::matching::scoring::skill_confidence_score(
        matched_skills.len(),
        requirement.required_skills.len(),
    );

    let mut tags = Vec::new();
    tags.push(if confidence_score >= INTERVIEW_READY_THRESHOLD {
        MatchTag::InterviewReady
    } else if confidence_score >= UPSKILL_THRESHOLD {
        MatchTag::UpskillNeeded
    } else {
        MatchTag::RoleMismatch
    });

    let (cloud_a, cloud_b) = vocab::CLOUD_KEYWORD_PAIR;
    if missing_skills.contains(cloud_a) && missing_skills.contains(cloud_b) {
        tags.push(MatchTag::CloudGap);
    }

    let matched_soft = profile
        .skills
        .iter()
        .any(|skill| vocab::CORE_SOFT_SKILLS.contains(&skill.as_str()));
    if matched_soft {
        tags.push(MatchTag::CultureFit);
    }

    let matched_hard = profile
        .skills
        .iter()
        .filter(|skill| vocab::HARD_SKILLS.contains(&skill.as_str()))
        .count();
    if matched_hard >= TECH_FIT_MIN_HARD_SKILLS {
        tags.push(MatchTag::TechFit);
    }

    let final_verdict = if semantic_score > RECOMMEND_THRESHOLD {
        Verdict::Recommended
    } else {
        Verdict::NotRecommended
    };

    Recommendation {
        tags,
        suggestions: learning_suggestions(&missing_skills),
        final_verdict,
        confidence_score,
        semantic_score,
        matched_skills,
        missing_skills,
    }
}

/// 不足スキルのうちクリティカルなものに講座を対応付ける。
/// 講座表の順で返す。該当なしなら空（表示側が "None" にする）。
pub fn learning_suggestions(missing_skills: &BTreeSet<String>) -> Vec<String> {
    vocab::LEARNING_COURSES
        .iter()
        .filter(|(keyword, _)| {
            vocab::CRITICAL_KEYWORDS.contains(keyword) && missing_skills.contains(*keyword)
        })
        .map(|(_, course)| course.to_string())
        .collect()
}

/// マッチ集合全体の要約（スコアバンド、語彙重なり、カテゴリ集計）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchSummary {
    /// 最上位マッチの生スコア（クランプ前、百分率表示用）
    pub top_score_raw: f64,
    /// クランプ済みスコア（しきい値判定・グラフ用）
    pub top_score: f64,
    pub compatibility: CompatibilityBand,
    pub skill_overlap_pct: f64,
    pub category_counts: CategoryCounts,
    pub narrative: Vec<String>,
}

/// 上位マッチ結果からスクリーニング要約を組み立てる。
pub fn build_match_summary(
    resume_text: &str,
    job_texts: &[String],
    top_matches: &[JobMatch],
) -> MatchSummary {
    let top_score_raw = top_matches.first().map(|m| m.score).unwrap_or(0.0);
    let top_score = clamp01(top_score_raw);
    let counts = count_categories(resume_text);

    let mut narrative = Vec::with_capacity(3);
    narrative.push(alignment_sentence(top_score_raw).to_string());
    narrative.push(
        if counts.technical_skills >= 5 {
            "Strong technical competency reflected through consistent mentions of \
             industry-relevant tools, platforms, or languages, indicating a solid grasp \
             of the role's technical expectations."
        } else {
            "Limited demonstration of technical proficiency in the resume. Consider \
             emphasizing or expanding on key tools, technologies, or platforms relevant \
             to the desired role."
        }
        .to_string(),
    );
    narrative.push(
        if counts.projects + counts.achievements >= 3 {
            "Projects and achievements highlight practical experience and initiative, \
             demonstrating the candidate's ability to apply knowledge effectively in \
             real-world contexts."
        } else {
            "Resume presents limited project or achievement evidence. Including more \
             hands-on work, initiatives, or accomplishments could strengthen the \
             demonstration of applied skills and proactive engagement."
        }
        .to_string(),
    );

    MatchSummary {
        top_score_raw,
        top_score,
        compatibility: compatibility_band(top_score_raw),
        skill_overlap_pct: skill_overlap_pct(resume_text, job_texts),
        category_counts: counts,
        narrative,
    }
}

fn alignment_sentence(top_score_raw: f64) -> &'static str {
    if top_score_raw >= 0.75 {
        "The resume exhibits strong alignment with the core responsibilities and \
         expectations outlined in the job description, indicating the candidate is \
         likely well-prepared for the role with minimal additional training required."
    } else if top_score_raw >= 0.5 {
        "The resume demonstrates a reasonable alignment with several key \
         responsibilities outlined in the job description. While the candidate may \
         require some upskilling or onboarding, they possess a foundational background \
         suitable for the role."
    } else {
        "The resume shows limited alignment with the job requirements. Significant \
         gaps in core skills or experience suggest the candidate may not yet be fully \
         prepared for this role without substantial training or role adjustment."
    }
}

/// 互換性ステータス（生スコア基準、> 比較）
pub fn compatibility_band(top_score_raw: f64) -> CompatibilityBand {
    if top_score_raw > 0.7 {
        CompatibilityBand::Strong
    } else if top_score_raw > 0.4 {
        CompatibilityBand::Moderate
    } else {
        CompatibilityBand::Low
    }
}

/// 履歴書と求人票群の語彙重なり（4文字以上の共通語 / 求人票の総語彙数）。
pub fn skill_overlap_pct(resume_text: &str, job_texts: &[String]) -> f64 {
    let resume_words: BTreeSet<String> = WORD_RE
        .find_iter(&resume_text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect();
    let jd_words: BTreeSet<String> = WORD_RE
        .find_iter(&job_texts.join(" ").to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect();

    let common = resume_words
        .intersection(&jd_words)
        .filter(|word| word.len() > 3)
        .count();

    common as f64 / jd_words.len().max(1) as f64 * 100.0
}
