//! テキスト埋め込みの抽象インターフェースと実装の選択。
//!
//! 実装:
//! - HashEmbedder: Feature Hashing（決定論的、学習不要、既定）
//! - MiniLmEmbedder: fastembed 経由の all-MiniLM-L6-v2（`fastembed` feature）
//!
//! モデルのロードは高コストなので、プロセスで1回だけ初期化して
//! 読み取り専用で共有する（`global()`）。

pub mod hash;
#[cfg(feature = "fastembed")]
pub mod minilm;
pub mod similarity;

use once_cell::sync::Lazy;
use tracing::{info, warn};

pub use hash::HashEmbedder;
pub use similarity::{cosine_similarity, l2_distance};

/// 埋め込みベクトル
#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Embedding {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// 文埋め込みモデルの抽象インターフェース
///
/// 同一入力・同一 version に対して決定論的であること。
pub trait TextEmbedder: Send + Sync {
    /// 実装名（"hash", "minilm"）
    fn name(&self) -> &'static str;

    /// モデル世代。トークン設計やモデル資産が変わったら上げる
    fn version(&self) -> &str;

    /// 埋め込み次元数
    fn dimension(&self) -> usize;

    /// テキストを埋め込みベクトルに変換
    fn embed(&self, text: &str) -> Embedding;

    /// 複数テキストの一括埋め込み（既定実装はループ）
    fn embed_batch(&self, texts: &[&str]) -> Vec<Embedding> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// 2つの埋め込みの類似度（0.0〜1.0）
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f64 {
        if a.dimension() != b.dimension() {
            warn!(
                a_dimension = a.dimension(),
                b_dimension = b.dimension(),
                "embedding dimension mismatch; returning zero similarity"
            );
            return 0.0;
        }
        cosine_similarity(&a.vector, &b.vector)
    }

    /// テキスト同士の意味類似度（小数第3位で丸め）
    fn text_similarity(&self, a: &str, b: &str) -> f64 {
        let sim = self.similarity(&self.embed(a), &self.embed(b));
        (sim * 1000.0).round() / 1000.0
    }
}

/// 埋め込み実装の設定
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// 埋め込み次元数（2のべき乗推奨）
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self { dimension: 384 }
    }
}

impl EmbedderConfig {
    /// 環境変数から設定を読み込む（RR_EMBED_DIMENSION）
    pub fn from_env() -> Self {
        Self {
            dimension: std::env::var("RR_EMBED_DIMENSION")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(384),
        }
    }
}

/// 実装名から埋め込み器を生成する。未知の名前は hash にフォールバック。
pub fn create_embedder(name: &str, config: EmbedderConfig) -> Box<dyn TextEmbedder> {
    match name {
        "hash" => Box::new(HashEmbedder::new(config)),
        #[cfg(feature = "fastembed")]
        "minilm" => match minilm::MiniLmEmbedder::new() {
            Ok(embedder) => Box::new(embedder),
            Err(err) => {
                warn!(error = %err, "failed to load MiniLM model; falling back to hash embedder");
                Box::new(HashEmbedder::new(config))
            }
        },
        #[cfg(not(feature = "fastembed"))]
        "minilm" => {
            warn!("minilm backend requested but the fastembed feature is disabled; using hash embedder");
            Box::new(HashEmbedder::new(config))
        }
        other => {
            warn!(requested = other, "unknown embedder name; using hash embedder");
            Box::new(HashEmbedder::new(config))
        }
    }
}

static GLOBAL_EMBEDDER: Lazy<Box<dyn TextEmbedder>> = Lazy::new(|| {
    let name = std::env::var("RR_EMBEDDER").unwrap_or_else(|_| "hash".to_string());
    let embedder = create_embedder(&name, EmbedderConfig::from_env());
    info!(
        embedder = embedder.name(),
        version = embedder.version(),
        dimension = embedder.dimension(),
        "embedding model initialized"
    );
    embedder
});

/// プロセス共有の埋め込みモデル。
///
/// 初回アクセス時に一度だけ構築され、以後は読み取り専用で共有される。
/// プロセス終了まで破棄されない。
pub fn global() -> &'static dyn TextEmbedder {
    GLOBAL_EMBEDDER.as_ref()
}
