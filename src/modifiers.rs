//! Modifier rules: negation, intensifiers, contrast, emphasis, idioms
//!
//! Every rule here adjusts a base valence the lexicon already supplied.
//! Only negation changes a sign; everything else scales or adds in the
//! direction the valence already points.
//!
//! # Rules
//!
//! | Rule          | Trigger                         | Effect                               |
//! |---------------|---------------------------------|--------------------------------------|
//! | Negation      | "not", "never", "isn't", ...    | `valence * negation_scalar` (-0.74)  |
//! | Booster       | "very", "extremely", ...        | `+booster_increment` toward the sign |
//! | Dampener      | "slightly", "kind of", ...      | `-booster_increment` toward the sign |
//! | Contrast      | "but"                           | before x0.5, after x1.5              |
//! | Caps          | ALL CAPS word in mixed text     | `+caps_increment` toward the sign    |
//! | Punctuation   | `!` (max 4), `??`+              | added to the magnitude of the sum    |
//! | Idiom         | "the bomb", "yeah right", ...   | replaces the valence                 |

use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;
use crate::tokenizer::{Token, TokenizedText};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Look-back window for boosters and negations
pub const LOOKBACK: usize = 3;

/// Booster scaling at look-back distance 1, 2, 3
const DISTANCE_DECAY: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

/// "never so good" reads as emphasis, not negation
const NEVER_SO_FACTOR: f64 = 1.25;

/// Classification of a single token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierFlag {
    None,
    /// Signed boost: positive for boosters, negative for dampeners
    Intensifier(f64),
    Negation,
    Contrastive,
}

impl std::fmt::Display for ModifierFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierFlag::None => write!(f, "-"),
            ModifierFlag::Intensifier(b) if *b >= 0.0 => write!(f, "booster(+{:.3})", b),
            ModifierFlag::Intensifier(b) => write!(f, "dampener({:.3})", b),
            ModifierFlag::Negation => write!(f, "negation"),
            ModifierFlag::Contrastive => write!(f, "contrastive"),
        }
    }
}

/// Booster direction: +1 amplifies, -1 damps
type BoosterTable = FxHashMap<&'static str, f64>;

fn booster_table() -> &'static BoosterTable {
    static TABLE: OnceLock<BoosterTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        const INCR: &[&str] = &[
            "absolutely", "amazingly", "awfully", "completely", "considerable",
            "considerably", "decidedly", "deeply", "effing", "enormous", "enormously",
            "entirely", "especially", "exceptional", "exceptionally", "extreme",
            "extremely", "fabulously", "flipping", "flippin", "fricking", "frickin",
            "frigging", "friggin", "fully", "greatly", "hella", "highly", "hugely",
            "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
            "particularly", "purely", "quite", "really", "remarkably", "so",
            "substantially", "thoroughly", "total", "totally", "tremendous",
            "tremendously", "uber", "unbelievably", "unusually", "utter", "utterly",
            "very",
        ];
        const DECR: &[&str] = &[
            "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof",
            "kind-of", "less", "little", "marginal", "marginally", "occasional",
            "occasionally", "partly", "scarce", "scarcely", "slight", "slightly",
            "somewhat", "sort of", "sorta", "sortof", "sort-of",
        ];
        INCR.iter()
            .map(|w| (*w, 1.0))
            .chain(DECR.iter().map(|w| (*w, -1.0)))
            .collect()
    })
}

/// Multi-word expressions whose meaning is not the sum of their words
fn idiom_table() -> &'static FxHashMap<&'static str, f64> {
    static TABLE: OnceLock<FxHashMap<&'static str, f64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            ("the shit", 3.0),
            ("the bomb", 3.0),
            ("bad ass", 1.5),
            ("badass", 1.5),
            ("bus stop", 0.0),
            ("yeah right", -2.0),
            ("kiss of death", -1.5),
            ("to die for", 3.0),
            ("beating heart", 3.1),
            ("broken heart", -2.9),
        ]
        .into_iter()
        .collect()
    })
}

/// Closed negation set; any word containing "n't" also negates.
pub fn is_negation(lower: &str) -> bool {
    matches!(
        lower,
        "aint" | "arent" | "cannot" | "cant" | "couldnt" | "darent" | "didnt" | "doesnt"
            | "ain't" | "aren't" | "can't" | "couldn't" | "daren't" | "didn't" | "doesn't"
            | "dont" | "hadnt" | "hasnt" | "havent" | "isnt" | "mightnt" | "mustnt"
            | "neither" | "don't" | "hadn't" | "hasn't" | "haven't" | "isn't" | "mightn't"
            | "mustn't" | "neednt" | "needn't" | "never" | "none" | "nope" | "nor" | "not"
            | "nothing" | "nowhere" | "oughtnt" | "shant" | "shouldnt" | "uhuh" | "wasnt"
            | "werent" | "oughtn't" | "shan't" | "shouldn't" | "uh-uh" | "wasn't"
            | "weren't" | "without" | "wont" | "wouldnt" | "won't" | "wouldn't" | "rarely"
            | "seldom" | "despite"
    ) || lower.contains("n't")
}

/// Contrastive conjunctions shift weight to what follows them
pub fn is_contrastive(lower: &str) -> bool {
    matches!(lower, "but")
}

/// Applies the fixed modifier rules with a given set of constants.
///
/// Holds no per-call state; the rule tables are process-wide statics built once.
#[derive(Debug, Clone, Copy)]
pub struct ModifierResolver {
    config: ScoringConfig,
}

impl Default for ModifierResolver {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ModifierResolver {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Classify a lowercase token
    pub fn classify(&self, lower: &str) -> ModifierFlag {
        if let Some(boost) = self.booster(lower) {
            ModifierFlag::Intensifier(boost)
        } else if is_negation(lower) {
            ModifierFlag::Negation
        } else if is_contrastive(lower) {
            ModifierFlag::Contrastive
        } else {
            ModifierFlag::None
        }
    }

    /// Signed boost of a booster/dampener word or phrase
    pub fn booster(&self, lower: &str) -> Option<f64> {
        booster_table()
            .get(lower)
            .map(|dir| dir * self.config.booster_increment)
    }

    pub fn is_booster(&self, lower: &str) -> bool {
        booster_table().contains_key(lower)
    }

    /// Boost contributed by `modifier` to a word of the given `valence`.
    /// Signed to follow the valence, so it amplifies or damps but never flips.
    pub fn scalar_inc_dec(&self, modifier: &Token, valence: f64, cap_differential: bool) -> f64 {
        let Some(mut scalar) = self.booster(&modifier.lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if modifier.is_all_caps() && cap_differential {
            scalar += self.toward(valence, self.config.caps_increment);
        }
        scalar
    }

    /// Scale applied to a booster `distance` tokens before the word (1-based)
    pub fn distance_decay(distance: usize) -> f64 {
        DISTANCE_DECAY
            .get(distance.wrapping_sub(1))
            .copied()
            .unwrap_or(0.0)
    }

    /// Emphasis for an ALL CAPS sentiment word
    pub fn caps_emphasis(&self, valence: f64) -> f64 {
        self.toward(valence, self.config.caps_increment)
    }

    /// Negation check for the token `distance` places before `i`.
    /// Positions before the start of the text read as empty words.
    pub fn negation_check(&self, valence: f64, text: &TokenizedText, distance: usize, i: usize) -> f64 {
        let w = |back: usize| {
            i.checked_sub(back)
                .and_then(|k| text.lower(k))
                .unwrap_or("")
        };
        let scalar = self.config.negation_scalar;

        match distance {
            1 => {
                if is_negation(w(1)) {
                    return valence * scalar;
                }
            }
            2 => {
                if w(2) == "never" && matches!(w(1), "so" | "this") {
                    return valence * NEVER_SO_FACTOR;
                }
                if w(2) == "without" && w(1) == "doubt" {
                    return valence;
                }
                if is_negation(w(2)) {
                    return valence * scalar;
                }
            }
            3 => {
                if w(3) == "never" && (matches!(w(2), "so" | "this") || matches!(w(1), "so" | "this")) {
                    return valence * NEVER_SO_FACTOR;
                }
                if w(3) == "without" && (w(2) == "doubt" || w(1) == "doubt") {
                    return valence;
                }
                if is_negation(w(3)) {
                    return valence * scalar;
                }
            }
            _ => {}
        }
        valence
    }

    /// "no" as a determiner: "no good", "no real help", "no fun or joy".
    ///
    /// Returns the valence after "no" handling for the lexicon hit at `i`.
    pub fn no_check(&self, valence: f64, base: f64, text: &TokenizedText, i: usize, lexicon: &Lexicon) -> f64 {
        let w = |k: usize| text.lower(k).unwrap_or("");
        let mut valence = valence;

        // "no" followed by a sentiment word modifies it instead of scoring itself
        if w(i) == "no" && i + 1 < text.len() && lexicon.contains(w(i + 1)) {
            valence = 0.0;
        }

        let preceded = (i > 0 && w(i - 1) == "no")
            || (i > 1 && w(i - 2) == "no")
            || (i > 2 && w(i - 3) == "no" && matches!(w(i - 1), "or" | "nor"));
        if preceded {
            valence = base * self.config.negation_scalar;
        }
        valence
    }

    /// "least X" negates X, except in "at least" / "very least".
    pub fn least_check(&self, valence: f64, text: &TokenizedText, i: usize, lexicon: &Lexicon) -> f64 {
        let w = |k: usize| text.lower(k).unwrap_or("");
        if i == 0 || w(i - 1) != "least" || lexicon.contains("least") {
            return valence;
        }
        if i > 1 && matches!(w(i - 2), "at" | "very") {
            return valence;
        }
        valence * self.config.negation_scalar
    }

    /// Idioms overlapping the word at `i` override its valence; multi-word
    /// boosters ending right before it add their boost. Requires `i >= 3`.
    pub fn idiom_check(&self, valence: f64, text: &TokenizedText, i: usize) -> f64 {
        if i < LOOKBACK {
            return valence;
        }
        let w = |k: usize| text.lower(k).unwrap_or("");
        let idioms = idiom_table();
        let mut valence = valence;

        let one_zero = format!("{} {}", w(i - 1), w(i));
        let two_one_zero = format!("{} {} {}", w(i - 2), w(i - 1), w(i));
        let two_one = format!("{} {}", w(i - 2), w(i - 1));
        let three_two_one = format!("{} {} {}", w(i - 3), w(i - 2), w(i - 1));
        let three_two = format!("{} {}", w(i - 3), w(i - 2));

        for seq in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
            if let Some(v) = idioms.get(seq.as_str()) {
                valence = *v;
                break;
            }
        }

        if text.len() > i + 1 {
            let zero_one = format!("{} {}", w(i), w(i + 1));
            if let Some(v) = idioms.get(zero_one.as_str()) {
                valence = *v;
            }
        }
        if text.len() > i + 2 {
            let zero_one_two = format!("{} {} {}", w(i), w(i + 1), w(i + 2));
            if let Some(v) = idioms.get(zero_one_two.as_str()) {
                valence = *v;
            }
        }

        for ngram in [&three_two_one, &three_two, &two_one] {
            if let Some(boost) = self.booster(ngram) {
                valence += boost;
            }
        }
        valence
    }

    /// Reweight contributions around the first contrastive conjunction
    pub fn apply_contrastive(&self, text: &TokenizedText, contributions: &mut [f64]) {
        let Some(pivot) = text.tokens().iter().position(|t| is_contrastive(&t.lower)) else {
            return;
        };
        for (idx, c) in contributions.iter_mut().enumerate() {
            if idx < pivot {
                *c *= self.config.contrastive_before;
            } else if idx > pivot {
                *c *= self.config.contrastive_after;
            }
        }
    }

    /// Magnitude added to the text's sentiment for `!` and `?` marks
    pub fn punctuation_emphasis(&self, text: &TokenizedText) -> f64 {
        let cfg = &self.config;
        let exclaim = text.exclamations().min(cfg.exclamation_cap) as f64 * cfg.exclamation_increment;

        let questions = text.questions();
        let question = if questions <= 1 {
            0.0
        } else if questions <= cfg.question_cap {
            questions as f64 * cfg.question_increment
        } else {
            cfg.question_max
        };

        exclaim + question
    }

    /// `amount` signed like `valence`; zero valence gets no direction
    fn toward(&self, valence: f64, amount: f64) -> f64 {
        if valence > 0.0 {
            amount
        } else if valence < 0.0 {
            -amount
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn resolver() -> ModifierResolver {
        ModifierResolver::default()
    }

    #[test]
    fn test_classify() {
        let r = resolver();
        assert_eq!(r.classify("very"), ModifierFlag::Intensifier(0.293));
        assert_eq!(r.classify("slightly"), ModifierFlag::Intensifier(-0.293));
        assert_eq!(r.classify("not"), ModifierFlag::Negation);
        assert_eq!(r.classify("shouldn't"), ModifierFlag::Negation);
        assert_eq!(r.classify("but"), ModifierFlag::Contrastive);
        assert_eq!(r.classify("table"), ModifierFlag::None);
    }

    #[test]
    fn test_contraction_negates() {
        assert!(is_negation("isn't"));
        assert!(is_negation("mightn't"));
        assert!(is_negation("y'all'dn't"));
        assert!(!is_negation("no"), "'no' has its own rule");
        assert!(!is_negation("nothingness"));
    }

    #[test]
    fn test_scalar_follows_valence_sign() {
        let r = resolver();
        let text = tokenize("very bad");
        let very = &text.tokens()[0];
        assert!(r.scalar_inc_dec(very, 1.9, false) > 0.0);
        assert!(r.scalar_inc_dec(very, -2.5, false) < 0.0);

        let text = tokenize("slightly good");
        let slightly = &text.tokens()[0];
        assert!(r.scalar_inc_dec(slightly, 1.9, false) < 0.0);
    }

    #[test]
    fn test_caps_booster() {
        let r = resolver();
        let text = tokenize("VERY good");
        let very = &text.tokens()[0];
        let plain = r.scalar_inc_dec(very, 1.9, false);
        let shouted = r.scalar_inc_dec(very, 1.9, text.cap_differential());
        assert!((shouted - plain - 0.733).abs() < 1e-9);
    }

    #[test]
    fn test_negation_check_distances() {
        let r = resolver();
        let text = tokenize("not really good");
        // "not" sits two places before "good"
        assert_eq!(r.negation_check(2.0, &text, 1, 2), 2.0);
        assert!((r.negation_check(2.0, &text, 2, 2) + 1.48).abs() < 1e-9);
    }

    #[test]
    fn test_negation_check_at_text_start() {
        let r = resolver();
        let text = tokenize("good");
        for distance in 1..=LOOKBACK {
            assert_eq!(r.negation_check(2.0, &text, distance, 0), 2.0);
        }
    }

    #[test]
    fn test_never_so_amplifies() {
        let r = resolver();
        let text = tokenize("never so happy");
        assert!((r.negation_check(2.0, &text, 2, 2) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_without_doubt_is_not_negation() {
        let r = resolver();
        let text = tokenize("without doubt excellent");
        assert_eq!(r.negation_check(2.7, &text, 2, 2), 2.7);
    }

    #[test]
    fn test_least_check() {
        let r = resolver();
        let lexicon = Lexicon::from_records([("funny", 1.9)]).expect("lexicon");
        let text = tokenize("the least funny");
        assert!(r.least_check(1.9, &text, 2, &lexicon) < 0.0);
        let text = tokenize("at least funny");
        assert_eq!(r.least_check(1.9, &text, 2, &lexicon), 1.9);
    }

    #[test]
    fn test_no_check() {
        let r = resolver();
        let lexicon = Lexicon::from_records([("no", -1.2), ("good", 1.9)]).expect("lexicon");
        let text = tokenize("no good");
        assert_eq!(r.no_check(-1.2, -1.2, &text, 0, &lexicon), 0.0);
        assert!((r.no_check(1.9, 1.9, &text, 1, &lexicon) + 1.406).abs() < 1e-9);
    }

    #[test]
    fn test_idiom_overrides() {
        let r = resolver();
        let text = tokenize("that movie was the bomb");
        assert_eq!(r.idiom_check(-1.0, &text, 4), 3.0);
    }

    #[test]
    fn test_multiword_dampener() {
        let r = resolver();
        let text = tokenize("it is kind of good");
        let damped = r.idiom_check(1.9, &text, 4);
        assert!((damped - (1.9 - 0.293)).abs() < 1e-9);
    }

    #[test]
    fn test_contrastive_weights() {
        let r = resolver();
        let text = tokenize("good but bad");
        let mut contributions = vec![2.0, 0.0, -2.0];
        r.apply_contrastive(&text, &mut contributions);
        assert_eq!(contributions, vec![1.0, 0.0, -3.0]);
    }

    #[test]
    fn test_punctuation_emphasis() {
        let r = resolver();
        assert_eq!(r.punctuation_emphasis(&tokenize("great.")), 0.0);
        assert!((r.punctuation_emphasis(&tokenize("great!")) - 0.292).abs() < 1e-9);
        // capped at four marks
        let four = r.punctuation_emphasis(&tokenize("great!!!!"));
        let six = r.punctuation_emphasis(&tokenize("great!!!!!!"));
        assert_eq!(four, six);
        // single question mark carries no emphasis
        assert_eq!(r.punctuation_emphasis(&tokenize("great?")), 0.0);
        assert!((r.punctuation_emphasis(&tokenize("great??")) - 0.36).abs() < 1e-9);
        assert!((r.punctuation_emphasis(&tokenize("great?????")) - 0.96).abs() < 1e-9);
    }

    #[test]
    fn test_distance_decay() {
        assert_eq!(ModifierResolver::distance_decay(1), 1.0);
        assert_eq!(ModifierResolver::distance_decay(3), 0.9);
        assert_eq!(ModifierResolver::distance_decay(0), 0.0);
        assert_eq!(ModifierResolver::distance_decay(4), 0.0);
    }
}
