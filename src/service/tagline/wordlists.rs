//! Static word tables for tagline filtering and scoring
//!
//! Loaded once at process start as read-only tables; matching is always done
//! against lowercase alphanumeric word forms.

/// Words that disqualify a candidate phrase outright
pub const BUZZWORDS: &[&str] = &[
    "innovative",
    "innovation",
    "seamless",
    "seamlessly",
    "synergy",
    "synergies",
    "leverage",
    "disrupt",
    "disruptive",
    "revolutionary",
    "groundbreaking",
    "gamechanger",
    "gamechanging",
    "cuttingedge",
    "nextgen",
    "worldclass",
    "bestinclass",
    "frictionless",
    "turnkey",
    "paradigm",
    "holistic",
    "robust",
    "scalable",
    "streamline",
    "streamlined",
    "optimize",
    "optimized",
    "solutions",
    "empower",
    "empowering",
];

/// Emotionally resonant words that up-rank a candidate phrase
pub const EMOTION_WORDS: &[&str] = &[
    "love",
    "trust",
    "dream",
    "grow",
    "win",
    "free",
    "bold",
    "brave",
    "joy",
    "hope",
    "thrive",
    "fearless",
    "proud",
    "confident",
    "calm",
    "safe",
    "strong",
    "delight",
    "inspire",
    "rise",
    "spark",
    "heart",
    "believe",
    "courage",
    "wonder",
    "alive",
];

/// Synthesized phrases used when too few real candidates survive filtering
///
/// Three entries so the three-segment output contract holds even for empty
/// input.
pub const FALLBACK_TAGLINES: &[&str] = &[
    "grow your value",
    "achieve your goals",
    "own your story",
];
