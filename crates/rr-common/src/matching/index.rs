//! 求人票集合に対するベクトル近傍検索。
//!
//! 求人票の件数は高々数十件の想定なので、クエリごとに全件を埋め込み
//! 直して厳密な L2 探索を行う。インデックスの持ち越しはしない
//! （使い捨てにすることで陳腐化バグを構造的に避ける）。

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use crate::embedding::{l2_distance, Embedding, TextEmbedder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// 求人票リストが空。比較対象がないのは呼び出し側で扱う正常系
    #[error("job description list is empty")]
    EmptyInput,
}

/// 1件の求人票とのマッチ結果
///
/// score は `exp(-L2距離)` で、距離に対して単調減少する。理論上の
/// 上限 1.0 は数値誤差まで含めると保証されないため、確率として扱う
/// 消費側は必ずクランプすること。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct JobMatch {
    pub job_text: String,
    pub score: f64,
    pub rank: usize,
}

/// クエリ単位で構築する使い捨ての求人票インデックス
pub struct MatchIndex<'a> {
    embedder: &'a dyn TextEmbedder,
    jobs: Vec<(String, Embedding)>,
}

impl<'a> MatchIndex<'a> {
    /// 求人票を一括で埋め込んでインデックスを構築する。
    pub fn build(
        embedder: &'a dyn TextEmbedder,
        job_texts: &[String],
    ) -> Result<Self, MatchError> {
        if job_texts.is_empty() {
            return Err(MatchError::EmptyInput);
        }

        let texts: Vec<&str> = job_texts.iter().map(String::as_str).collect();
        let embeddings = embedder.embed_batch(&texts);
        let jobs = job_texts
            .iter()
            .cloned()
            .zip(embeddings)
            .collect();

        Ok(Self { embedder, jobs })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// L2距離の昇順で上位 k 件を返す。
    /// 安定ソートなので同距離は入力順を維持する。rank は 1 始まり。
    pub fn search(&self, resume_text: &str, k: usize) -> Vec<JobMatch> {
        let resume = self.embedder.embed(resume_text);

        let mut by_distance: Vec<(usize, f64)> = self
            .jobs
            .iter()
            .enumerate()
            .map(|(idx, (_, embedding))| (idx, l2_distance(&resume.vector, &embedding.vector)))
            .collect();
        by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        by_distance
            .into_iter()
            .take(k)
            .enumerate()
            .map(|(position, (idx, distance))| JobMatch {
                job_text: self.jobs[idx].0.clone(),
                score: (-distance).exp(),
                rank: position + 1,
            })
            .collect()
    }
}

/// 構築と検索をまとめたユーティリティ。
pub fn find_top_matches(
    embedder: &dyn TextEmbedder,
    resume_text: &str,
    job_texts: &[String],
    k: usize,
) -> Result<Vec<JobMatch>, MatchError> {
    Ok(MatchIndex::build(embedder, job_texts)?.search(resume_text, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EmbedderConfig, HashEmbedder};

    fn embedder() -> HashEmbedder {
        HashEmbedder::new(EmbedderConfig::default())
    }

    fn jobs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_job_list_is_rejected() {
        let embedder = embedder();
        let err = MatchIndex::build(&embedder, &[]).err();
        assert_eq!(err, Some(MatchError::EmptyInput));
    }

    #[test]
    fn scores_are_non_increasing() {
        let embedder = embedder();
        let job_texts = jobs(&[
            "rust backend engineer aws docker",
            "python data scientist pandas numpy",
            "frontend react typescript developer",
            "embedded c++ firmware engineer",
        ]);
        let matches =
            find_top_matches(&embedder, "rust engineer docker aws", &job_texts, 10).unwrap();

        for pair in matches.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "scores must be non-increasing: {} then {}",
                pair[0].score,
                pair[1].score
            );
        }
    }

    #[test]
    fn large_k_returns_every_job_exactly_once() {
        let embedder = embedder();
        let job_texts = jobs(&["first job", "second job", "third job"]);
        let matches = find_top_matches(&embedder, "resume text", &job_texts, 10).unwrap();

        assert_eq!(matches.len(), 3);
        for job in &job_texts {
            assert_eq!(
                matches.iter().filter(|m| &m.job_text == job).count(),
                1,
                "job should appear exactly once: {job}"
            );
        }
    }

    #[test]
    fn k_limits_the_result_length() {
        let embedder = embedder();
        let job_texts = jobs(&["a job", "b job", "c job", "d job"]);
        let matches = find_top_matches(&embedder, "resume", &job_texts, 2).unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn ranks_are_one_based_and_sequential() {
        let embedder = embedder();
        let job_texts = jobs(&["one", "two", "three"]);
        let matches = find_top_matches(&embedder, "resume", &job_texts, 3).unwrap();
        let ranks: Vec<usize> = matches.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn identical_jobs_keep_input_order() {
        let embedder = embedder();
        let job_texts = jobs(&["same text", "same text", "same text"]);
        let matches = find_top_matches(&embedder, "anything", &job_texts, 3).unwrap();
        // 同一距離なので安定ソートにより入力順が保たれる
        assert_eq!(matches[0].rank, 1);
        assert_eq!(matches.len(), 3);
        assert!(matches.windows(2).all(|p| p[0].score == p[1].score));
    }

    #[test]
    fn exact_match_scores_near_one() {
        let embedder = embedder();
        let text = "senior rust engineer distributed systems";
        let job_texts = jobs(&[text, "unrelated gardening role"]);
        let matches = find_top_matches(&embedder, text, &job_texts, 1).unwrap();
        assert_eq!(matches[0].job_text, text);
        // 距離 0 → exp(0) = 1.0
        assert!((matches[0].score - 1.0).abs() < 1e-9);
    }
}
