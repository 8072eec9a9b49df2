//! Writing prompts shown above an empty draft.

use rand::seq::SliceRandom;

const WRITING_PROMPTS: &[&str] = &[
    "What's on your mind?",
    "Begin with what you notice...",
    "Write freely, without judgment...",
    "Let the words find their way...",
];

pub fn writing_prompts() -> &'static [&'static str] {
    WRITING_PROMPTS
}

/// Picks one prompt at random.
pub fn random_prompt() -> &'static str {
    WRITING_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(WRITING_PROMPTS[0])
}

/// Deterministic pick; `index` wraps around the prompt list.
pub fn prompt_at(index: usize) -> &'static str {
    WRITING_PROMPTS[index % WRITING_PROMPTS.len()]
}
