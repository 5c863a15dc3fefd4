//! Emoji selection for the front-matter marker.

use rand::Rng;

const EMOJIS: &[&str] = &[
    "🤖", "📘", "🛠️", "🧭", "🚀", "🧪", "💡", "🔍", "⚙️", "📝",
];

/// Pick a random emoji for the front-matter marker.
pub fn random_emoji() -> &'static str {
    let mut rng = rand::thread_rng();
    EMOJIS[rng.gen_range(0..EMOJIS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_a_known_emoji() {
        let emoji = random_emoji();
        assert!(EMOJIS.contains(&emoji));
    }
}
