//! Built-in message lists.

/// Messages rotated on the timer every time the mode changes.
pub const TIMER_MESSAGES: &[&str] = &[
    "You're going to crush this. چای بعد از مطالعه؟",
    "One more chapter and you're a legend.",
    "Your brain is literally getting bigger rn. No cap.",
    "Study now, chai and cuddles later. Worth it.",
    "DDLJ was 3 hours. You can do 25 minutes.",
    "Rumi said keep going. I'm saying it too.",
    "Future you is already proud. Prove them right.",
    "Pyaar mein tum strong, studies mein bhi strong.",
    "Khana khaya? Now focus. You've got this.",
    "Tum hi ho meri study motivation.",
    "Afghan mountains don't quit. Neither do you.",
    "Short break = chai time. You've earned it.",
    "Inshallah you're gonna ace this.",
    "Bollywood hero energy: dramatic but successful.",
    "دل به دل راه داره — so does your brain to that degree.",
    "Take a breath. Then one more page.",
    "This is your main character moment.",
];

/// Messages shown on the motivation board, in order.
pub const CARD_MESSAGES: &[&str] = &[
    "You're going to crush this. چای بعد از مطالعه؟",
    "One more chapter and you're a legend.",
    "Study now, chai and cuddles later.",
    "DDLJ was 3 hours. You can do 25 minutes.",
    "Pyaar mein tum strong, studies mein bhi strong.",
    "Afghan mountains don't quit. Neither do you.",
    "Inshallah you're gonna ace this.",
    "This is your main character moment.",
];

/// Owned copy of a built-in list.
#[must_use]
pub fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
