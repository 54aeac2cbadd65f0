use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{info, warn};

use super::{Embedding, TextEmbedder};

/// all-MiniLM-L6-v2 の埋め込み次元
const MINILM_DIMENSION: usize = 384;

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// fastembed 経由の文埋め込み（ONNX 推論）
///
/// モデル資産の取得を伴うため生成は高コスト。`embedding::global()` の
/// シングルトン経由で使うこと。推論セッションが &mut を要求するため
/// Mutex で直列化する（埋め込み計算はモデル状態を変えない）。
pub struct MiniLmEmbedder {
    model: Mutex<TextEmbedding>,
}

impl MiniLmEmbedder {
    pub fn new() -> Result<Self, InitError> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )?;
        info!(model = "all-MiniLM-L6-v2", "sentence embedding model loaded");
        Ok(Self {
            model: Mutex::new(model),
        })
    }

    fn run_batch(&self, texts: Vec<&str>) -> Option<Vec<Vec<f32>>> {
        let mut model = match self.model.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match model.embed(texts, None) {
            Ok(vectors) => Some(vectors),
            Err(err) => {
                warn!(error = %err, "embedding inference failed; returning zero vectors");
                None
            }
        }
    }
}

impl TextEmbedder for MiniLmEmbedder {
    fn name(&self) -> &'static str {
        "minilm"
    }

    fn version(&self) -> &str {
        "all-MiniLM-L6-v2"
    }

    fn dimension(&self) -> usize {
        MINILM_DIMENSION
    }

    fn embed(&self, text: &str) -> Embedding {
        match self.run_batch(vec![text]) {
            Some(mut vectors) if !vectors.is_empty() => Embedding::new(vectors.remove(0)),
            _ => Embedding::new(vec![0.0; MINILM_DIMENSION]),
        }
    }

    fn embed_batch(&self, texts: &[&str]) -> Vec<Embedding> {
        match self.run_batch(texts.to_vec()) {
            Some(vectors) if vectors.len() == texts.len() => {
                vectors.into_iter().map(Embedding::new).collect()
            }
            _ => texts
                .iter()
                .map(|_| Embedding::new(vec![0.0; MINILM_DIMENSION]))
                .collect(),
        }
    }
}
