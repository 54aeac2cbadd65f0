//! キャリア遷移・スキル深度・カテゴリ集計のヒューリスティクス。

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::vocab;

lazy_static! {
    static ref DEPTH_INDICATORS: Vec<Regex> = vocab::DEPTH_INDICATOR_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();
}

/// キャリア段階語彙のうちテキストに現れるものを語彙順で返す。
/// 各段階は高々1回しか現れない。
pub fn extract_career_progression(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocab::CAREER_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// intern → ceo のはしごに対する整合度（検出段階数 / 段階総数）
pub fn career_path_alignment(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let found = vocab::JOB_LEVELS
        .iter()
        .filter(|level| lowered.contains(*level))
        .count();
    (found as f64 / vocab::JOB_LEVELS.len() as f64).min(1.0)
}

/// カテゴリ別のキーワード出現数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryCounts {
    pub technical_skills: usize,
    pub soft_skills: usize,
    pub education: usize,
    pub projects: usize,
    pub achievements: usize,
    pub experience: usize,
}

pub fn count_categories(text: &str) -> CategoryCounts {
    let lowered = text.to_lowercase();
    CategoryCounts {
        technical_skills: count_hits(&lowered, vocab::TECHNICAL_CATEGORY),
        soft_skills: count_hits(&lowered, vocab::SOFT_CATEGORY),
        education: count_hits(&lowered, vocab::EDUCATION_CATEGORY),
        projects: count_hits(&lowered, vocab::PROJECT_CATEGORY),
        achievements: count_hits(&lowered, vocab::ACHIEVEMENT_CATEGORY),
        experience: count_hits(&lowered, vocab::EXPERIENCE_CATEGORY),
    }
}

fn count_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| lowered.contains(*kw)).count()
}

/// 領域別のスキル深度推定。
///
/// 領域のキーワードが本文にあり、かつ同じ行内で深度を示す言い回し
/// （"expert in" 等）がキーワードに先行している件数を数える。
/// 証拠ゼロの領域は結果に含めない。値は小数第2位で丸め。
pub fn estimate_skill_depth(text: &str) -> BTreeMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut scores = BTreeMap::new();

    for area in vocab::SKILL_DEPTH_AREAS {
        let mut evidence = 0usize;
        for keyword in area.keywords {
            if !lowered.contains(keyword) {
                continue;
            }
            evidence += DEPTH_INDICATORS
                .iter()
                .filter(|indicator| indicator_precedes(&lowered, indicator, keyword))
                .count();
        }

        if evidence > 0 {
            let normalized = (evidence as f64 / DEPTH_INDICATORS.len() as f64).min(1.0);
            scores.insert(area.area.to_string(), round2(normalized));
        }
    }

    scores
}

/// indicator のマッチ位置から行末までの間に keyword が現れるか
fn indicator_precedes(text: &str, indicator: &Regex, keyword: &str) -> bool {
    indicator.find_iter(text).any(|m| {
        let rest = &text[m.end()..];
        let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
        line.contains(keyword)
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_progression_preserves_vocabulary_order() {
        let text = "Started as manager, previously an intern and then developer.";
        let progression = extract_career_progression(text);
        assert_eq!(progression, vec!["intern", "developer", "manager"]);
    }

    #[test]
    fn career_progression_reports_each_stage_once() {
        let text = "developer developer developer";
        assert_eq!(extract_career_progression(text), vec!["developer"]);
    }

    #[test]
    fn alignment_counts_distinct_ladder_levels() {
        let text = "intern then developer then senior developer then cto";
        // intern, developer, senior, cto → 4 of 15
        let alignment = career_path_alignment(text);
        assert!((alignment - 4.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn category_counts_track_each_vocabulary() {
        let counts = count_categories("python project for university with teamwork");
        assert_eq!(counts.technical_skills, 1);
        assert_eq!(counts.projects, 1);
        assert_eq!(counts.education, 1);
        assert_eq!(counts.soft_skills, 1);
    }

    #[test]
    fn skill_depth_requires_indicator_on_the_same_line() {
        let text = "expert in python and pandas\nkubernetes mentioned alone";
        let depth = estimate_skill_depth(text);
        assert!(depth.contains_key("python"));
        assert!(!depth.contains_key("devops"));
    }

    #[test]
    fn skill_depth_omits_areas_without_evidence() {
        let depth = estimate_skill_depth("aws appears without any depth phrase");
        assert!(depth.is_empty());
    }

    #[test]
    fn skill_depth_scores_are_bounded() {
        let text = "expert in python, proficient in python, hands-on python, \
                    strong background in python, deep understanding of python, \
                    5+ years with python, experienced python, led projects in python, \
                    architected python systems";
        let depth = estimate_skill_depth(text);
        let score = depth["python"];
        assert!(score > 0.0 && score <= 1.0);
    }
}
