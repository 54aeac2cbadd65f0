/// 経験関連度の内訳重み
///
/// 経験年数の充足を最重視し、必須スキルの実地経験・タイトル一致・
/// リーダーシップ言及を補助シグナルとして足す。
pub const EXPERIENCE_WEIGHTS: ExperienceWeights = ExperienceWeights {
    base_experience: 0.4,
    relevant_experience: 0.3,
    title_match: 0.2,
    leadership: 0.1,
};

/// スクリーニング総合スコアの重み
pub const SCREENING_WEIGHTS: ScreeningWeights = ScreeningWeights {
    experience_relevance: 0.4,
    culture_fit: 0.2,
    academic: 0.4,
};

#[derive(Debug, Clone, Copy)]
pub struct ExperienceWeights {
    pub base_experience: f64,
    pub relevant_experience: f64,
    pub title_match: f64,
    pub leadership: f64,
}

impl ExperienceWeights {
    pub fn sum(&self) -> f64 {
        self.base_experience + self.relevant_experience + self.title_match + self.leadership
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScreeningWeights {
    pub experience_relevance: f64,
    pub culture_fit: f64,
    pub academic: f64,
}

impl ScreeningWeights {
    pub fn sum(&self) -> f64 {
        self.experience_relevance + self.culture_fit + self.academic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((EXPERIENCE_WEIGHTS.sum() - 1.0).abs() < 1e-6);
        assert!((SCREENING_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
