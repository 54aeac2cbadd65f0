//! スクリーニングエンジンの外部境界。
//!
//! 抽出 → 埋め込み → 集計 → 推薦を1回の呼び出しで同期的に流す。
//! 共有状態は読み取り専用の埋め込みモデルだけで、インデックスは
//! クエリごとに作り直す。

use std::collections::BTreeMap;

use serde::Serialize;

use crate::embedding::{self, TextEmbedder};
use crate::extraction;
use crate::matching::scoring::{self, ScoreBreakdown};
use crate::matching::{find_top_matches, JobMatch, MatchError, MatchIndex};
use crate::recommendation::{self, MatchSummary, Recommendation};
use crate::{JobRequirement, ResumeProfile};

/// findTopMatches の既定 k
pub const DEFAULT_TOP_K: usize = 3;

/// スコア内訳と、ナラティブ生成に必要な生シグナル
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScreeningReport {
    pub requirement: JobRequirement,
    pub resume_years_experience: u32,
    pub grade_count: usize,
    pub breakdown: ScoreBreakdown,
    pub experience_score: f64,
    pub relevant_experience_score: f64,
    pub title_match_score: f64,
    pub leadership_score: f64,
}

/// screen() がまとめて返す解析一式
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CandidateReport {
    pub profile: ResumeProfile,
    /// 領域別のスキル深度（証拠ゼロの領域は含まれない）
    pub skill_depth: BTreeMap<String, f64>,
    /// intern → ceo のはしごに対するキャリアパス整合度
    pub career_alignment: f64,
    pub screening: ScreeningReport,
    pub recommendation: Recommendation,
    pub summary: MatchSummary,
    pub top_matches: Vec<JobMatch>,
}

/// スクリーニングエンジン
///
/// 既定ではプロセス共有の埋め込みモデルを使う。テストでは
/// `with_embedder` でローカルな実装を差し込める。
pub struct ScreeningEngine<'a> {
    embedder: &'a dyn TextEmbedder,
}

impl Default for ScreeningEngine<'static> {
    fn default() -> Self {
        Self {
            embedder: embedding::global(),
        }
    }
}

impl<'a> ScreeningEngine<'a> {
    pub fn with_embedder(embedder: &'a dyn TextEmbedder) -> Self {
        Self { embedder }
    }

    /// 履歴書テキストを構造化プロファイルにする。
    pub fn analyze_resume(&self, text: &str) -> ResumeProfile {
        extraction::build_resume_profile(text)
    }

    /// 求人票テキストを要件にする。
    pub fn analyze_job_description(&self, text: &str) -> JobRequirement {
        extraction::extract_job_requirement(text)
    }

    /// 求人票群を履歴書との近さでランキングする。
    pub fn find_top_matches(
        &self,
        resume_text: &str,
        job_texts: &[String],
        k: usize,
    ) -> Result<Vec<JobMatch>, MatchError> {
        find_top_matches(self.embedder, resume_text, job_texts, k)
    }

    /// 履歴書と求人票の意味類似度（0.0〜1.0、小数第3位丸め）。
    pub fn semantic_similarity(&self, resume_text: &str, jd_text: &str) -> f64 {
        self.embedder.text_similarity(resume_text, jd_text)
    }

    /// 1対1のスクリーニングスコアを内訳つきで計算する。
    pub fn score_screening(&self, resume_text: &str, jd_text: &str) -> ScreeningReport {
        let requirement = extraction::extract_job_requirement(jd_text);
        let resume_years = extraction::extract_years_of_experience(resume_text);
        let grade_count = extraction::extract_grades(resume_text).len();

        let breakdown =
            scoring::score_breakdown(resume_text, resume_years, grade_count, &requirement);

        ScreeningReport {
            experience_score: scoring::experience_score(resume_years, requirement.min_experience),
            relevant_experience_score: scoring::relevant_experience_score(
                resume_text,
                &requirement.required_skills,
            ),
            title_match_score: scoring::title_match_score(resume_text, &requirement.title),
            leadership_score: scoring::leadership_score(resume_text),
            requirement,
            resume_years_experience: resume_years,
            grade_count,
            breakdown,
        }
    }

    /// プロファイル・要件・意味類似度から推薦を組み立てる。
    pub fn compose_recommendation(
        &self,
        profile: &ResumeProfile,
        requirement: &JobRequirement,
        semantic_score: f64,
    ) -> Recommendation {
        recommendation::compose_recommendation(profile, requirement, semantic_score)
    }

    /// 上位マッチの要約。求人票がなければ None（比較不能は正常系）。
    pub fn match_summary(&self, resume_text: &str, job_texts: &[String]) -> Option<MatchSummary> {
        if job_texts.is_empty() {
            return None;
        }
        let index = MatchIndex::build(self.embedder, job_texts).ok()?;
        let top_matches = index.search(resume_text, DEFAULT_TOP_K);
        Some(recommendation::build_match_summary(
            resume_text,
            job_texts,
            &top_matches,
        ))
    }

    /// フル解析: プロファイル、スコア内訳、推薦、要約を1回で返す。
    ///
    /// スコア内訳は先頭の求人票に対して、意味類似度と推薦は全求人票を
    /// 連結したテキストに対して計算する。
    pub fn screen(
        &self,
        resume_text: &str,
        job_texts: &[String],
    ) -> Result<CandidateReport, MatchError> {
        let first_jd = job_texts.first().ok_or(MatchError::EmptyInput)?;
        let combined_jd = job_texts.join(" ");

        let profile = self.analyze_resume(resume_text);
        let screening = self.score_screening(resume_text, first_jd);

        let semantic_score = self.semantic_similarity(resume_text, &combined_jd);
        let combined_requirement = self.analyze_job_description(&combined_jd);
        let recommendation =
            self.compose_recommendation(&profile, &combined_requirement, semantic_score);

        let index = MatchIndex::build(self.embedder, job_texts)?;
        let top_matches = index.search(resume_text, DEFAULT_TOP_K);
        let summary = recommendation::build_match_summary(resume_text, job_texts, &top_matches);

        Ok(CandidateReport {
            profile,
            skill_depth: extraction::estimate_skill_depth(resume_text),
            career_alignment: extraction::career_path_alignment(resume_text),
            screening,
            recommendation,
            summary,
            top_matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EmbedderConfig, HashEmbedder};
    use crate::recommendation::Verdict;

    fn engine_with(embedder: &HashEmbedder) -> ScreeningEngine<'_> {
        ScreeningEngine::with_embedder(embedder)
    }

    const RESUME: &str = "Jane Smith\n\
        Senior Software Engineer with 5+ years experience\n\
        Skills: Python, SQL, Docker, AWS, Git, Linux, communication, teamwork\n\
        Led team of four engineers, managed releases\n\
        Education\n\
        Example University, B.Tech 2012-2016\n\
        CGPA: 8.5\n\
        Percentage: 91%\n";

    const JD: &str = "Position: Software Engineer\n\
        We need someone with 3+ years of experience in python, sql, aws and docker.\n\
        Bachelor degree required.";

    #[test]
    fn screening_scores_experienced_candidate_highly() {
        let embedder = HashEmbedder::new(EmbedderConfig::default());
        let engine = engine_with(&embedder);

        let report = engine.score_screening(RESUME, JD);
        assert_eq!(report.resume_years_experience, 5);
        assert_eq!(report.requirement.min_experience, 3);
        assert_eq!(report.experience_score, 1.0);
        assert_eq!(report.title_match_score, 1.0);
        assert!(report.relevant_experience_score > 0.0);
        assert!(report.breakdown.overall > 0.0 && report.breakdown.overall <= 1.0);
    }

    #[test]
    fn empty_job_list_fails_with_empty_input() {
        let embedder = HashEmbedder::new(EmbedderConfig::default());
        let engine = engine_with(&embedder);
        assert_eq!(
            engine.find_top_matches("resume", &[], 3).unwrap_err(),
            MatchError::EmptyInput
        );
        assert!(engine.screen("resume", &[]).is_err());
        assert!(engine.match_summary("resume", &[]).is_none());
    }

    #[test]
    fn screen_produces_a_complete_report() {
        let embedder = HashEmbedder::new(EmbedderConfig::default());
        let engine = engine_with(&embedder);

        let jobs = vec![JD.to_string(), "Looking for data analyst with excel".to_string()];
        let report = engine.screen(RESUME, &jobs).unwrap();

        assert!(!report.profile.skills.is_empty());
        assert!((0.0..=1.0).contains(&report.career_alignment));
        assert_eq!(report.top_matches.len(), 2);
        assert_eq!(report.top_matches[0].rank, 1);
        assert!(!report.recommendation.tags.is_empty());
        assert_eq!(report.summary.category_counts,
            crate::extraction::count_categories(RESUME));
    }

    #[test]
    fn mismatched_candidate_gets_role_mismatch_and_no_recommendation() {
        let embedder = HashEmbedder::new(EmbedderConfig::default());
        let engine = engine_with(&embedder);

        let resume = "Literature graduate. Poetry editor for a small journal.";
        let jobs = vec![
            "Platform engineer: kubernetes, terraform, gcp, go. 5+ years of experience.".to_string(),
        ];
        let report = engine.screen(resume, &jobs).unwrap();

        // 一文字スキル（"r"/"c"）の部分一致が混ざるため厳密な 0 にはならない
        assert!(report.screening.relevant_experience_score <= 0.2);
        assert_eq!(
            report.recommendation.tags[0],
            crate::recommendation::MatchTag::RoleMismatch
        );
        assert_eq!(report.recommendation.final_verdict, Verdict::NotRecommended);
    }

    #[test]
    fn semantic_similarity_is_symmetric_for_identical_text() {
        let embedder = HashEmbedder::new(EmbedderConfig::default());
        let engine = engine_with(&embedder);
        let sim = engine.semantic_similarity("python engineer", "python engineer");
        assert!((sim - 1.0).abs() < 1e-9);
    }
}
