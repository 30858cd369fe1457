//! Rule-based compound polarity in the VADER style.
//!
//! Algorithm, per token with a lexicon valence:
//! 1. ALL-CAPS emphasis when the text mixes case.
//! 2. Boosters/dampeners in the 3 preceding tokens, decayed by distance.
//! 3. Negation in the 3 preceding tokens flips and dampens the valence,
//!    except after "never so" / "never this", which intensify instead.
//! 4. At distance 3, idioms ("the bomb", "kiss of death") replace the
//!    valence and two-word dampeners ("kind of", "sort of") reduce it.
//! 5. "least" directly before the token flips it unless it reads "at least".
//!
//! "kind" followed by "of" and booster words carry no valence of their own.
//! Then "but" contrast weighting, `!`/`?` emphasis, and
//! normalization to [-1, 1] via `s / sqrt(s² + 15)`.

use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::SentimentScorer;

const BOOST_INCR: f64 = 0.293;
const BOOST_DECR: f64 = -0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;
const LOOKBACK: usize = 3;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];

const INCREMENTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
    "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully",
    "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly", "hugely",
    "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
    "unusually", "utter", "utterly", "very",
];

/// Single words, plus the two-word phrases matched against token pairs.
const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
    "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
    "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
    "sort-of",
];

const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("yeah right", -2.0),
    ("cut the mustard", 2.0),
    ("kiss of death", -1.5),
    ("hand to mouth", -2.0),
];

/// Lexicon-backed scorer. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl VaderScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn in_lexicon(&self, token: &Token) -> bool {
        self.lexicon.valence(&token.lower).is_some()
    }

    fn token_valence(&self, tokens: &[Token], i: usize, caps_differ: bool) -> f64 {
        let token = &tokens[i];
        let Some(mut valence) = self.lexicon.valence(&token.lower) else {
            return 0.0;
        };

        if caps_differ && token.is_upper() {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=LOOKBACK.min(i) {
            let prev = &tokens[i - distance];
            if self.in_lexicon(prev) {
                continue;
            }
            let decay = match distance {
                1 => 1.0,
                2 => 0.95,
                _ => 0.9,
            };
            valence += booster_scalar(prev, valence, caps_differ) * decay;
            valence = negation_check(valence, tokens, distance, i);
            if distance == 3 {
                valence = idiom_check(valence, tokens, i);
            }
        }

        self.least_check(valence, tokens, i)
    }

    fn least_check(&self, valence: f64, tokens: &[Token], i: usize) -> f64 {
        if i == 0 || tokens[i - 1].lower != "least" || self.in_lexicon(&tokens[i - 1]) {
            return valence;
        }
        match i.checked_sub(2).map(|j| tokens[j].lower.as_str()) {
            Some("at" | "very") => valence,
            _ => valence * NEGATION_SCALAR,
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let any_upper = tokens.iter().any(Token::is_upper);
        let all_upper = tokens.iter().all(Token::is_upper);
        let caps_differ = any_upper && !all_upper;

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| {
                let kind_of = tokens[i].lower == "kind"
                    && tokens.get(i + 1).is_some_and(|next| next.lower == "of");
                if kind_of || booster_weight(&tokens[i].lower).is_some() {
                    0.0
                } else {
                    self.token_valence(&tokens, i, caps_differ)
                }
            })
            .collect();

        if let Some(but_at) = tokens.iter().position(|t| t.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but_at {
                    *v *= 0.5;
                } else if i > but_at {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        sum += emphasis.copysign(sum);

        round4(normalize(sum))
    }
}

#[derive(Debug)]
struct Token {
    raw: String,
    lower: String,
}

impl Token {
    fn is_upper(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && !self.raw.chars().any(char::is_lowercase)
    }
}

/// Whitespace split with surrounding punctuation removed. Short tokens that
/// would vanish (emoticons like `:)`) are kept verbatim; single characters are dropped.
fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|word| {
            let stripped = word.trim_matches(|c: char| c.is_ascii_punctuation());
            let kept = if stripped.chars().count() <= 2 { word } else { stripped };
            (kept.chars().count() > 1).then(|| Token {
                raw: kept.to_string(),
                lower: kept.to_lowercase(),
            })
        })
        .collect()
}

/// Space-joined lowercase tokens `from..=to`.
fn phrase(tokens: &[Token], from: usize, to: usize) -> String {
    tokens[from..=to]
        .iter()
        .map(|t| t.lower.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn booster_weight(lower: &str) -> Option<f64> {
    if INCREMENTERS.contains(&lower) {
        Some(BOOST_INCR)
    } else if DAMPENERS.contains(&lower) {
        Some(BOOST_DECR)
    } else {
        None
    }
}

fn booster_scalar(token: &Token, valence: f64, caps_differ: bool) -> f64 {
    let Some(mut scalar) = booster_weight(&token.lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if caps_differ && token.is_upper() {
        scalar += CAPS_INCR.copysign(valence);
    }
    scalar
}

fn is_negation(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.contains("n't")
}

/// Negation of the token `distance` places before `i`. "never so good" and
/// "never this good" intensify rather than flip.
fn negation_check(valence: f64, tokens: &[Token], distance: usize, i: usize) -> f64 {
    let word = move |back: usize| tokens[i - back].lower.as_str();
    let so_or_this = |w: &str| w == "so" || w == "this";

    match distance {
        1 if is_negation(word(1)) => valence * NEGATION_SCALAR,
        2 if word(2) == "never" && so_or_this(word(1)) => valence * 1.5,
        2 if is_negation(word(2)) => valence * NEGATION_SCALAR,
        3 if (word(3) == "never" && so_or_this(word(2))) || so_or_this(word(1)) => {
            valence * 1.25
        }
        3 if is_negation(word(3)) => valence * NEGATION_SCALAR,
        _ => valence,
    }
}

/// Only reached when `i >= 3`.
fn idiom_check(mut valence: f64, tokens: &[Token], i: usize) -> f64 {
    let behind = [
        phrase(tokens, i - 1, i),
        phrase(tokens, i - 2, i),
        phrase(tokens, i - 2, i - 1),
        phrase(tokens, i - 3, i - 1),
        phrase(tokens, i - 3, i - 2),
    ];
    if let Some(v) = behind.iter().find_map(|seq| idiom_valence(seq)) {
        valence = v;
    }

    let last = tokens.len() - 1;
    if last > i {
        if let Some(v) = idiom_valence(&phrase(tokens, i, i + 1)) {
            valence = v;
        }
    }
    if last > i + 1 {
        if let Some(v) = idiom_valence(&phrase(tokens, i, i + 2)) {
            valence = v;
        }
    }

    // Two-word dampeners in either of the two slots ahead of the token.
    let dampened = [phrase(tokens, i - 3, i - 2), phrase(tokens, i - 2, i - 1)]
        .iter()
        .any(|pair| booster_weight(pair).is_some());
    if dampened {
        valence += BOOST_DECR;
    }
    valence
}

fn idiom_valence(seq: &str) -> Option<f64> {
    IDIOMS.iter().find(|(idiom, _)| *idiom == seq).map(|(_, v)| *v)
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Four decimals, nearest with exact ties to even.
fn round4(v: f64) -> f64 {
    format!("{v:.4}").parse().unwrap_or(v)
}
