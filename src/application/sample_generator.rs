//! Demo post generator
//!
//! Produces template-based posts with a known tone so the analytics views
//! have something to show. Not used by the pipeline itself.

use crate::domain::record::PostSubmission;
use rand::Rng;
use rand::seq::IndexedRandom;

const TOPICS: &[&str] = &[
    "#AI",
    "#MachineLearning",
    "#DataScience",
    "#Python",
    "#Technology",
    "#Innovation",
    "#BigData",
    "#CloudComputing",
    "#CyberSecurity",
    "#IoT",
];

const POSITIVE_TEMPLATES: &[&str] = &[
    "Amazing progress in {topic}! The future is bright",
    "Absolutely love the new developments in {topic}",
    "{topic} is revolutionizing the industry! Incredible work",
    "Just deployed my first {topic} project. So excited!",
    "The community around {topic} is fantastic and supportive",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
    "Disappointed with the current state of {topic}",
    "{topic} has too many issues that need addressing",
    "Struggling to understand {topic}. Documentation is lacking",
    "Not impressed with recent {topic} updates",
    "The hype around {topic} is overblown and misleading",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Exploring {topic} for our next project",
    "Attended a conference on {topic} today",
    "Reading about {topic} developments",
    "Working on understanding {topic} better",
    "Considering {topic} for our tech stack",
];

const AUTHOR_COUNT: u32 = 20;
const MAX_EXTRA_TAGS: usize = 2;

pub struct SampleGenerator<R: Rng> {
    rng: R,
}

impl SampleGenerator<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SampleGenerator<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SampleGenerator<R> {
    /// Generator over a caller-provided RNG (seed it for reproducible output).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, count: usize) -> Vec<PostSubmission> {
        (0..count).map(|_| self.next_post()).collect()
    }

    fn next_post(&mut self) -> PostSubmission {
        let templates = match self.rng.random_range(0..3) {
            0 => POSITIVE_TEMPLATES,
            1 => NEGATIVE_TEMPLATES,
            _ => NEUTRAL_TEMPLATES,
        };
        let template = templates.choose(&mut self.rng).copied().unwrap_or_default();
        let topic = TOPICS.choose(&mut self.rng).copied().unwrap_or("#AI");

        let mut text = template.replace("{topic}", topic);

        let others: Vec<&str> = TOPICS.iter().copied().filter(|t| *t != topic).collect();
        let extra_count = self.rng.random_range(0..=MAX_EXTRA_TAGS);
        let extras: Vec<&str> = others
            .choose_multiple(&mut self.rng, extra_count)
            .copied()
            .collect();
        if !extras.is_empty() {
            text.push(' ');
            text.push_str(&extras.join(" "));
        }

        let author = format!("user{}", self.rng.random_range(1..=AUTHOR_COUNT));
        PostSubmission::new(text, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hashtags::extract_hashtags;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generates_requested_count() {
        let mut generator = SampleGenerator::new();
        assert_eq!(generator.generate(25).len(), 25);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_posts_are_well_formed() {
        let mut generator = SampleGenerator::with_rng(StdRng::seed_from_u64(7));

        for post in generator.generate(200) {
            assert!(!post.text.contains("{topic}"));
            assert!(post.hashtags.is_none());

            let tags = extract_hashtags(&post.text);
            assert!((1..=3).contains(&tags.len()), "{}", post.text);
            let mut unique = tags.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), tags.len(), "duplicate tag in {}", post.text);

            let n: u32 = post.author.trim_start_matches("user").parse().unwrap();
            assert!((1..=20).contains(&n));
        }
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let a = SampleGenerator::with_rng(StdRng::seed_from_u64(42)).generate(10);
        let b = SampleGenerator::with_rng(StdRng::seed_from_u64(42)).generate(10);
        assert_eq!(a, b);
    }
}
