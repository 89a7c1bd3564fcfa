/// Weight of sentiment strength in the relevance score.
const STRENGTH_WEIGHT: f64 = 0.7;
/// Weight of the hashtag bonus in the relevance score.
const TAG_WEIGHT: f64 = 0.3;
/// Hashtag count at which the tag bonus saturates.
const TAG_SATURATION: usize = 5;

/// Relevance in [0, 1]: `0.7 * |fused_score| + 0.3 * min(tags / 5, 1)`, rounded to 3 decimals.
pub fn relevance_score(fused_score: f64, tag_count: usize) -> f64 {
    let strength = fused_score.abs().min(1.0);
    let tag_bonus = (tag_count as f64 / TAG_SATURATION as f64).min(1.0);
    let relevance = strength * STRENGTH_WEIGHT + tag_bonus * TAG_WEIGHT;
    (relevance * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sentiment_no_tags() {
        assert_eq!(relevance_score(0.0, 0), 0.0);
    }

    #[test]
    fn test_sign_does_not_matter() {
        assert_eq!(relevance_score(0.5, 2), relevance_score(-0.5, 2));
    }

    #[test]
    fn test_tag_bonus_saturates_at_five() {
        let five = relevance_score(0.4, 5);
        assert_eq!(relevance_score(0.4, 6), five);
        assert_eq!(relevance_score(0.4, 50), five);
        assert!(relevance_score(0.4, 4) < five);
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        // 0.7 * 0.12345 + 0.3 * 0.2 = 0.146415
        assert_eq!(relevance_score(0.12345, 1), 0.146);
    }

    #[test]
    fn test_bounded() {
        for score in [-1.0, -0.73, -0.05, 0.0, 0.05, 0.42, 1.0] {
            for tags in 0..8 {
                let r = relevance_score(score, tags);
                assert!((0.0..=1.0).contains(&r), "{} out of range", r);
            }
        }
        assert_eq!(relevance_score(1.0, 5), 1.0);
    }
}
