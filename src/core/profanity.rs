// Profanity filter for names shown on the display

/// Replacement for every censored word
pub const CENSOR_MASK: &str = "****";

/// Censored words, lowercase
const WORDLIST: &[&str] = &[
    "arse",
    "arsehole",
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bullshit",
    "cock",
    "crap",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "douche",
    "fag",
    "fuck",
    "fucker",
    "fucking",
    "motherfucker",
    "piss",
    "prick",
    "pussy",
    "shit",
    "shitty",
    "slut",
    "twat",
    "wank",
    "wanker",
    "whore",
];

/// Map common leetspeak characters back to letters
fn normalize_char(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '3' => 'e',
        '4' | '@' => 'a',
        '5' | '$' => 's',
        '7' => 't',
        _ => c.to_ascii_lowercase(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '$' | '\'')
}

fn is_profane(word: &str) -> bool {
    let normalized: String = word
        .chars()
        .filter(|c| *c != '\'')
        .map(normalize_char)
        .collect();
    WORDLIST.contains(&normalized.as_str())
}

fn flush_word(word: &mut String, out: &mut String) {
    if word.is_empty() {
        return;
    }
    if is_profane(word) {
        out.push_str(CENSOR_MASK);
    } else {
        out.push_str(word);
    }
    word.clear();
}

/// Replace every listed word in `text` with `****`
///
/// Whitespace and punctuation between words are preserved.
pub fn censor(text: &str) -> String {
    let mut censored = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            word.push(c);
        } else {
            flush_word(&mut word, &mut censored);
            censored.push(c);
        }
    }
    flush_word(&mut word, &mut censored);

    censored
}
