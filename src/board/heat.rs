//! Heat-map colors for square scores.

/// Largest score the color scale distinguishes.
pub const MAX_SCORE: f64 = 34.0;

const SATURATION: f64 = 0.55;
const LIGHTNESS: f64 = 0.35;

/// Clamps a score into `[0, MAX_SCORE]`. NaN becomes 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}

/// Maps a score to an RGB color, blue for unlikely through red for likely.
pub fn heat_color(score: f64) -> (u8, u8, u8) {
    let ratio = clamp_score(score) / MAX_SCORE;
    let hue = 240.0 - 240.0 * ratio;
    hsl_to_rgb(hue, SATURATION, LIGHTNESS)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |value: f64| ((value + m) * 255.0).round() as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_are_blue_and_red() {
        assert_eq!(heat_color(0.0), (40, 40, 138));
        assert_eq!(heat_color(MAX_SCORE), (138, 40, 40));
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        assert_eq!(heat_color(-12.0), heat_color(0.0));
        assert_eq!(heat_color(500.0), heat_color(MAX_SCORE));
        assert_eq!(heat_color(f64::NAN), heat_color(0.0));
    }

    #[test]
    fn test_midpoint_is_green() {
        let (r, g, b) = heat_color(MAX_SCORE / 2.0);
        assert!(g > r && g > b);
    }
}
