use tracing::warn;

/// コサイン類似度を 0.0〜1.0 に正規化して返す。
///
/// 次元不一致とゼロベクトルは 0.0。生のコサイン値は [-1, 1] なので
/// `(cos + 1) / 2` で正規化する。
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x * y) as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (x * x) as f64).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    ((dot / (norm_a * norm_b)) + 1.0) / 2.0
}

/// ユークリッド距離（L2）
pub fn l2_distance(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning infinite distance"
        );
        return f64::INFINITY;
    }

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = (x - y) as f64;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![0.6, 0.8, 0.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_vectors_have_similarity_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_yields_zero_similarity() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn mismatched_dimensions_yield_zero_similarity() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn l2_distance_of_identical_vectors_is_zero() {
        let v = vec![0.3, 0.4];
        assert_eq!(l2_distance(&v, &v), 0.0);
    }

    #[test]
    fn l2_distance_matches_euclidean_formula() {
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert!((l2_distance(&a, &b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_dimensions_yield_infinite_distance() {
        assert!(l2_distance(&[1.0], &[1.0, 2.0]).is_infinite());
    }
}
