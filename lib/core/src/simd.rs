// Dot product and norm kernels for feature vectors.
// Scalar path uses two accumulators; AVX2/FMA is used on x86_64 for long vectors.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

// Below this length the scalar loop wins (feature tables are usually 7 wide)
#[cfg(target_arch = "x86_64")]
const MIN_DIM_SIZE_AVX: usize = 16;

/// Dot product of two equally sized slices.
///
/// Returns 0.0 if the lengths differ.
#[inline]
pub fn dot_product_simd(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2")
            && is_x86_feature_detected!("fma")
            && a.len() >= MIN_DIM_SIZE_AVX
        {
            return unsafe { dot_product_avx2(a, b) };
        }
    }

    dot_product_scalar(a, b)
}

/// AVX2 dot product, 8 doubles per iteration across two registers
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
#[inline]
unsafe fn dot_product_avx2(a: &[f64], b: &[f64]) -> f64 {
    let dim = a.len();
    let mut i = 0;

    let mut sum1 = _mm256_setzero_pd();
    let mut sum2 = _mm256_setzero_pd();

    while i + 7 < dim {
        let vx1 = _mm256_loadu_pd(a.as_ptr().add(i));
        let vy1 = _mm256_loadu_pd(b.as_ptr().add(i));
        let vx2 = _mm256_loadu_pd(a.as_ptr().add(i + 4));
        let vy2 = _mm256_loadu_pd(b.as_ptr().add(i + 4));

        sum1 = _mm256_fmadd_pd(vx1, vy1, sum1);
        sum2 = _mm256_fmadd_pd(vx2, vy2, sum2);

        i += 8;
    }

    let combined = _mm256_add_pd(sum1, sum2);

    // Horizontal sum of the 4 lanes
    let high = _mm256_extractf128_pd(combined, 1);
    let low = _mm256_castpd256_pd128(combined);
    let pair = _mm_add_pd(high, low);
    let upper = _mm_unpackhi_pd(pair, pair);
    let mut dot = _mm_cvtsd_f64(_mm_add_sd(pair, upper));

    while i < dim {
        dot += a[i] * b[i];
        i += 1;
    }

    dot
}

#[inline]
fn dot_product_scalar(a: &[f64], b: &[f64]) -> f64 {
    let mut dot0 = 0.0f64;
    let mut dot1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        dot0 += a_chunk[0] * b_chunk[0] + a_chunk[1] * b_chunk[1];
        dot1 += a_chunk[2] * b_chunk[2] + a_chunk[3] * b_chunk[3];
    }

    for i in (a.len() - remainder.len())..a.len() {
        dot0 += a[i] * b[i];
    }

    dot0 + dot1
}

/// Squared Euclidean norm
#[inline]
pub fn norm_squared_simd(v: &[f64]) -> f64 {
    dot_product_simd(v, v)
}

/// Euclidean norm
#[inline]
pub fn norm_simd(v: &[f64]) -> f64 {
    norm_squared_simd(v).sqrt()
}
