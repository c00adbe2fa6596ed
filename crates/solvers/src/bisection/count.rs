/// Returns the number of halvings the fixed-count policy performs up front on
/// `bracket` for the target width `eps`.
///
/// This is the smallest `n` with `(b - a) / 2^n < eps` under exact halving. On
/// dyadic brackets it equals the number of iterations the tolerance loop runs;
/// elsewhere rounded midpoints can make the loop need one more, which the
/// fixed-count policy then performs. It is zero when the
/// bracket is already narrower than `eps`. When `(b - a) / eps` is exactly
/// `2^k` the count is `k + 1`, not `k`: after `k` halvings the width equals
/// `eps`, and the tolerance loop still splits a bracket of width `eps`.
///
/// Returns zero for a non-finite or non-positive `eps`.
#[must_use]
pub fn fixed_iteration_count(bracket: [f64; 2], eps: f64) -> usize {
    let [a, b] = bracket;
    let width = b - a;

    // Overflowing width: the first split brings it back into range.
    if width.is_infinite() && a.is_finite() && b.is_finite() {
        return 1 + count_for_width(b / 2.0 - a / 2.0, eps);
    }

    count_for_width(width, eps)
}

fn count_for_width(width: f64, eps: f64) -> usize {
    if !eps.is_finite() || eps <= 0.0 || !width.is_finite() || width < eps {
        return 0;
    }

    // log2 is inexact, so treat this as a first guess and settle it below.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut n = (width.log2() - eps.log2()).ceil().max(0.0) as usize;

    while halved(width, n) >= eps {
        n += 1;
    }
    while n > 0 && halved(width, n - 1) < eps {
        n -= 1;
    }

    n
}

/// Halves `width` `times` times.
fn halved(width: f64, times: usize) -> f64 {
    (0..times).fold(width, |w, _| w / 2.0)
}
