//! Random song names and ids

const PREFIX: &[&str] = &[
    "Cucumber", "Marshmallow", "Penguin's", "Gummy Worm", "Synchronized", "Lullaby",
    "Bouncy", "Electric", "Tea Time", "Meadow", "Sunshine", "Cloud", "Polite", "Willow",
    "Turtle", "Dandelion", "Rainy", "Sweet Little", "Friendly", "Crisp", "Kitten",
    "Firefly", "Delicate", "Sincere", "Nostalgic", "Falling Leaves", "Sunflower",
    "Garden Stroll", "Starlit", "Uplifting", "Melancholy", "Bittersweet", "Serene",
    "Heartfelt", "Enchanted", "Soothing", "Mysterious", "Tender", "Graceful", "I'm a",
    "Feeling",
];

const POSTFIX: &[&str] = &[
    "Diddle", "in Space", "Evening", "Parade", "Jamboree", "Ballet", "Tootles", "Jive",
    "Nonsense", "Serenade", "Derby", "Mambo", "Twirl", "Party", "Shuffle", "Waltz",
    "Harmony", "Delight", "Attic", "at Sunset", "Reflections", "Summer", "on Quiet Lakes",
    "Over the Horizon", "Breeze", "in a Pond", "over Puddles", "Calm", "Garden Stroll",
];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Two random words, e.g. "Turtle Waltz"
pub fn random_name(rng: &mut fastrand::Rng) -> String {
    let prefix = PREFIX[rng.usize(..PREFIX.len())];
    let postfix = POSTFIX[rng.usize(..POSTFIX.len())];
    format!("{} {}", prefix, postfix)
}

/// Short base-36 identifier
pub fn random_id(rng: &mut fastrand::Rng) -> String {
    (0..6)
        .map(|_| ID_ALPHABET[rng.usize(..ID_ALPHABET.len())] as char)
        .collect()
}
