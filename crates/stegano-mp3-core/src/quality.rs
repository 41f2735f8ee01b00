//! Byte level fidelity of a stego carrier compared to its original.

/// Mean squared error over the common prefix of both buffers.
pub fn mean_squared_error(original: &[u8], modified: &[u8]) -> f64 {
    let len = original.len().min(modified.len());
    if len == 0 {
        return 0.0;
    }

    let sum: f64 = original
        .iter()
        .zip(modified)
        .map(|(&a, &b)| {
            let d = a as f64 - b as f64;
            d * d
        })
        .sum();

    sum / len as f64
}

/// Peak signal to noise ratio in dB, `10 * log10(255² / MSE)`.
///
/// Identical buffers, empty ones included, yield `f64::INFINITY`.
pub fn psnr(original: &[u8], modified: &[u8]) -> f64 {
    let mse = mean_squared_error(original, modified);
    if mse == 0.0 {
        return f64::INFINITY;
    }

    10.0 * (255.0 * 255.0 / mse).log10()
}
