//! Turns a lake record into a one-line fact.
use rand::seq::SliceRandom;
use rand::Rng;

use lakefeed_core::domain::lake::Lake;

/// Closing remarks appended to every status.
pub const EXCLAMATIONS: [&str; 5] = ["Wow!", "Cool, huh?", "Now you know.", "WHAAAAT", "Neat-o!!"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error("no lakes to choose from")]
    NoLakes,
    #[error("lake '{lake}' has no attribute besides its name")]
    NoEligibleAttribute { lake: String },
    #[error("no exclamations to choose from")]
    NoExclamations,
}

/// Picks one non-null attribute of `lake` and renders its template.
pub fn describe_lake<R: Rng + ?Sized>(lake: &Lake, rng: &mut R) -> Result<String, SentenceError> {
    let eligible = lake.eligible_attributes();
    let (attribute, value) =
        eligible
            .choose(rng)
            .ok_or_else(|| SentenceError::NoEligibleAttribute {
                lake: lake.name.clone(),
            })?;
    Ok(attribute.render(&lake.name, value))
}

pub fn random_lake_sentence<R: Rng + ?Sized>(
    lakes: &[Lake],
    rng: &mut R,
) -> Result<String, SentenceError> {
    let lake = lakes.choose(rng).ok_or(SentenceError::NoLakes)?;
    describe_lake(lake, rng)
}

/// Sentence plus a closing exclamation, separated by one space.
pub fn compose_status<R: Rng + ?Sized>(
    lakes: &[Lake],
    exclamations: &[&str],
    rng: &mut R,
) -> Result<String, SentenceError> {
    let sentence = random_lake_sentence(lakes, rng)?;
    let flare = exclamations
        .choose(rng)
        .ok_or(SentenceError::NoExclamations)?;
    Ok(format!("{sentence} {flare}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakefeed_core::infra::random::seeded_rng;
    use lakefeed_core::testing::{lake, tahoe};

    #[test]
    fn never_describes_name_or_null_attributes() {
        let only_river = lake("Titicaca", None, None, None, None, Some("Desaguadero"));
        for seed in 0..50 {
            let mut rng = seeded_rng(Some(seed));
            assert_eq!(
                describe_lake(&only_river, &mut rng).unwrap(),
                "Titicaca empties into a river named Desaguadero."
            );
        }
    }

    #[test]
    fn tahoe_sentences_come_from_its_non_null_attributes() {
        let allowed = [
            "The area Tahoe is 495 square kilometers.",
            "The depth of Tahoe is 501 meters.",
            "The elevation of Tahoe is 1897 meters.",
            "The type of Tahoe is Freshwater.",
        ];
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = seeded_rng(Some(seed));
            let s = describe_lake(&tahoe(), &mut rng).unwrap();
            assert!(allowed.contains(&s.as_str()), "unexpected sentence {s}");
            seen.insert(s);
        }
        assert_eq!(seen.len(), allowed.len());
    }

    #[test]
    fn bare_lake_fails_loudly() {
        let bare = lake("Nameless", None, None, None, None, None);
        let mut rng = seeded_rng(Some(1));
        assert_eq!(
            describe_lake(&bare, &mut rng),
            Err(SentenceError::NoEligibleAttribute {
                lake: "Nameless".to_string()
            })
        );
    }

    #[test]
    fn empty_source_fails() {
        let mut rng = seeded_rng(Some(1));
        assert_eq!(random_lake_sentence(&[], &mut rng), Err(SentenceError::NoLakes));
        assert_eq!(
            compose_status(&[], &EXCLAMATIONS, &mut rng),
            Err(SentenceError::NoLakes)
        );
    }

    #[test]
    fn empty_exclamations_fail() {
        let mut rng = seeded_rng(Some(1));
        assert_eq!(
            compose_status(&[tahoe()], &[], &mut rng),
            Err(SentenceError::NoExclamations)
        );
    }

    #[test]
    fn status_is_sentence_space_exclamation() {
        let only_type = lake("Kivu", None, None, None, Some("Freshwater"), None);
        let mut rng = seeded_rng(Some(3));
        let status = compose_status(&[only_type], &["Neat-o!!"], &mut rng).unwrap();
        assert_eq!(status, "The type of Kivu is Freshwater. Neat-o!!");
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let lakes = vec![
            tahoe(),
            lake("Baikal", Some(31500.0), Some(1637.0), Some(456.0), Some("Freshwater"), Some("Angara")),
            lake("Caspian", Some(371000.0), None, Some(-28.0), Some("Salt"), None),
        ];
        let first = compose_status(&lakes, &EXCLAMATIONS, &mut seeded_rng(Some(2024))).unwrap();
        assert_eq!(first, "Baikal empties into a river named Angara. Now you know.");
        for _ in 0..5 {
            let again = compose_status(&lakes, &EXCLAMATIONS, &mut seeded_rng(Some(2024))).unwrap();
            assert_eq!(first, again);
        }
        assert_eq!(
            compose_status(&lakes, &EXCLAMATIONS, &mut seeded_rng(Some(42))).unwrap(),
            "The elevation of Tahoe is 1897 meters. Cool, huh?"
        );
    }
}
