pub mod embedding;
pub mod engine;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod recommendation;
pub mod vocab;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// Commonly used data models for the screening functions.

/// 履歴書1通から抽出した構造化シグナル
///
/// 解析呼び出しごとに生成され、以降は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResumeProfile {
    /// 語彙マッチで検出したスキル（小文字・重複なし）
    pub skills: BTreeSet<String>,
    /// 学歴レコード（機関ごとにグルーピング済み、初出順）
    pub education: Vec<String>,
    /// 成績エントリ（初出順、重複なし）
    pub grades: Vec<GradeEntry>,
    /// 実務経験年数（数値表現の最大値、50年超は誤検出として棄却）
    pub years_experience: u32,
    /// 検出したキャリア段階（語彙順、各1回）
    pub career_progression: Vec<String>,
    /// 資格・受賞セクションの記載（順序不問）
    pub certifications: BTreeSet<String>,
    /// 懸念事項（ルール順）
    pub red_flags: Vec<String>,
    /// スキル補強の提案（セミコロン区切り、ルール順）
    pub recommendations: String,
    /// スキル数ベースの確信度（0.5〜1.0、単調増加）
    pub confidence_score: f64,
}

impl ResumeProfile {
    /// キャリア遷移を矢印区切りで表示する。検出なしなら定型文を返す。
    pub fn career_narrative(&self) -> String {
        if self.career_progression.is_empty() {
            vocab::CAREER_NOT_FOUND.to_string()
        } else {
            self.career_progression.join(" → ")
        }
    }
}

/// 求人票1件から抽出した要件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobRequirement {
    pub required_skills: BTreeSet<String>,
    pub min_experience: u32,
    pub required_degree: DegreeLevel,
    pub title: String,
}

/// 求人票が要求する学位レベル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    #[default]
    None,
    Bachelor,
    Master,
}

/// 成績行から拾ったラベルと値（例: CGPA / 8.9）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GradeEntry {
    pub label: String,
    pub value: String,
}

impl fmt::Display for GradeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
