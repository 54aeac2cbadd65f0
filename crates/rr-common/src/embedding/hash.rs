use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{Embedding, EmbedderConfig, TextEmbedder};

/// 固定 seed（決定論的 hash のため）
/// ⚠️ この値を変更すると全 embedding が変わる → version() を上げること
const HASH_SEED_K0: u64 = 0x6b8b_4567_327b_23c6;
const HASH_SEED_K1: u64 = 0x4353_9d1c_5577_f8e1;

/// 単語 n-gram にかける重み。バイグラムは語順情報の補助として弱めに足す。
const UNIGRAM_WEIGHT: f32 = 1.0;
const BIGRAM_WEIGHT: f32 = 0.5;

/// Feature Hashing による決定論的な文埋め込み
///
/// - 学習不要（固定ハッシュ関数）
/// - 高速（O(n) where n = token count）
/// - SipHash13 + 固定 seed で Rust バージョン間の安定性を保証
pub struct HashEmbedder {
    config: EmbedderConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbedderConfig) -> Self {
        let mut cfg = config;
        cfg.dimension = cfg.dimension.max(1);
        Self { config: cfg }
    }

    /// トークンをハッシュして次元インデックスに変換
    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn accumulate(&self, vector: &mut [f32], token: &str, weight: f32) {
        let idx = self.hash_token(token);
        // Sign hashing: 偶数ハッシュ → +weight, 奇数ハッシュ → -weight
        let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        vector[idx] += sign * weight;
    }
}

impl TextEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        // トークン設計やハッシュ関数が変わったらバージョンを上げる
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Embedding {
        let tokens = word_tokens(text);
        let mut vector = vec![0.0f32; self.config.dimension];

        for token in &tokens {
            self.accumulate(&mut vector, token, UNIGRAM_WEIGHT);
        }
        for pair in tokens.windows(2) {
            self.accumulate(&mut vector, &format!("{} {}", pair[0], pair[1]), BIGRAM_WEIGHT);
        }

        // L2正規化
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Embedding::new(vector)
    }
}

/// 小文字化した単語トークン列。"c++" や "c#" を壊さないよう
/// '+' と '#' は語の一部として扱い、1文字トークンはノイズとして捨てる。
fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|word| word.len() > 1)
        .map(str::to_string)
        .collect()
}
