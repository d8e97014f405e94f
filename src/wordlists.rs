//! Static category word lists for sentence construction.
//!
//! These are the raw, hand-curated lists. Some entries ("a", "the", "this")
//! are ordinary English glue words that are not BIP39 vocabulary; the catalog
//! filters every list against the official wordlist at build time, so only
//! the BIP39-valid subset is ever offered for a slot.

pub const ARTICLES: &[&str] = &["a", "an", "the", "this", "that", "these", "those", "any", "all"];

pub const ADJECTIVES: &[&str] = &[
    "ancient", "basic", "big", "black", "blue", "bright", "broad", "brown", "clean",
    "clear", "close", "cold", "dark", "deep", "empty", "entire", "extra", "fair",
    "fast", "fine", "firm", "flat", "fresh", "full", "gentle", "good", "great",
    "green", "grey", "hard", "heavy", "high", "hollow", "hot", "huge", "large",
    "left", "light", "little", "long", "loud", "low", "main", "narrow", "new",
    "nice", "normal", "old", "open", "outer", "pink", "plain", "quick", "quiet",
    "rare", "raw", "red", "rich", "right", "rough", "round", "sharp", "short",
    "silent", "simple", "small", "smooth", "soft", "solid", "spare", "square",
    "steady", "steep", "still", "straight", "strange", "strong", "sweet", "swift",
    "tall", "thick", "thin", "tight", "tiny", "tired", "tough", "true", "weak",
    "wet", "white", "whole", "wide", "wild", "yellow", "young",
];

pub const PEOPLE: &[&str] = &[
    "actor", "adult", "agent", "artist", "athlete", "aunt", "author", "baby",
    "boy", "brother", "captain", "chef", "child", "citizen", "daughter", "doctor",
    "enemy", "expert", "father", "friend", "genius", "girl", "guard", "guide",
    "hero", "human", "husband", "judge", "king", "lady", "leader", "master",
    "mother", "nurse", "parent", "people", "person", "pilot", "pioneer", "police",
    "prince", "princess", "queen", "rebel", "sister", "soldier", "spirit", "student",
    "teacher", "uncle", "warrior", "wife", "woman", "worker", "writer", "youth",
];

pub const ACTIONS: &[&str] = &[
    "abandon", "advance", "arrive", "bounce", "climb", "crawl", "dance", "dive",
    "drift", "drive", "drop", "emerge", "enter", "escape", "fade", "fall", "flee",
    "float", "fly", "follow", "gather", "glide", "hover", "jump", "launch", "leave",
    "march", "move", "pass", "pull", "push", "race", "return", "ride", "rise",
    "run", "rush", "scatter", "seek", "shift", "slide", "slip", "swim", "swing",
    "throw", "travel", "trip", "walk", "wander",
];

pub const DIRECTIONS: &[&str] = &[
    "above", "across", "ahead", "around", "behind", "below", "beneath", "between",
    "beyond", "down", "east", "far", "forth", "forward", "here", "high", "in",
    "inside", "into", "near", "north", "out", "outside", "over", "south", "through",
    "toward", "under", "up", "west", "within",
];

pub const PLACES: &[&str] = &[
    "airport", "arena", "beach", "bridge", "building", "castle", "cave", "church",
    "city", "clinic", "coast", "country", "court", "desert", "earth", "factory",
    "field", "forest", "garden", "gate", "harbor", "heaven", "hill", "home",
    "hospital", "hotel", "house", "island", "jungle", "lake", "land", "library",
    "market", "meadow", "mountain", "museum", "ocean", "office", "palace", "park",
    "planet", "pond", "port", "river", "road", "school", "sea", "shop", "shore",
    "space", "stadium", "station", "street", "temple", "theater", "tower", "town",
    "valley", "village",
];

pub const TIME_WORDS: &[&str] = &[
    "april", "august", "december", "february", "march", "october", "dawn",
    "morning", "night", "midnight", "today", "tomorrow", "tonight", "early",
    "soon", "later", "often", "never", "now", "always", "forever",
];

pub const CONJUNCTIONS: &[&str] = &[
    "after", "before", "between", "since", "until", "when", "while", "with",
];
