//! Global threshold selection.

use shapeprint_core::LumaMap;

/// Compute the Otsu threshold of a luma map.
///
/// Builds a 256-bin histogram of rounded, saturating-clamped intensities and
/// maximizes the between-class variance `wB·wF·(meanB − meanF)²` over all
/// candidate cut points. The first candidate reaching the maximum wins
/// (strict `>` comparison). Returns 128 when the histogram never splits into
/// two non-empty classes.
///
/// Pixels strictly below the returned threshold count as foreground ("ink").
pub fn otsu_threshold(luma: &LumaMap) -> u8 {
    let mut hist = [0u32; 256];
    for &v in &luma.data {
        hist[v.round().clamp(0.0, 255.0) as usize] += 1;
    }

    let total = luma.data.len() as f64;
    let mut sum_total = 0f64;
    for (i, &h) in hist.iter().enumerate() {
        sum_total += (i as f64) * f64::from(h);
    }

    let mut sum_b = 0f64;
    let mut w_b = 0f64;
    let mut best_var = 0f64;
    let mut best_t = 128u8;

    for (t, &h) in hist.iter().enumerate() {
        w_b += f64::from(h);
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }

        sum_b += (t as f64) * f64::from(h);
        let m_b = sum_b / w_b;
        let m_f = (sum_total - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    best_t
}
