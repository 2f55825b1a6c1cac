use urania::western::{is_afflicted, DignitiesService, DignityType, AFFLICTION_THRESHOLD};
use urania::zodiac::SIGN_NAMES;
use urania::KnowledgeBase;

fn opposite(sign: &str) -> &'static str {
    let index = SIGN_NAMES.iter().position(|s| *s == sign).unwrap();
    SIGN_NAMES[(index + 6) % 12]
}

#[test]
fn test_detriment_opposes_domicile() {
    let kb = KnowledgeBase::builtin();
    for (planet, entry) in &kb.dignity_table {
        let mut expected: Vec<_> = entry.domicile.iter().map(|s| opposite(s)).collect();
        let mut actual: Vec<_> = entry.detriment.iter().map(String::as_str).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected, "{}", planet);
    }
}

#[test]
fn test_fall_opposes_exaltation() {
    let kb = KnowledgeBase::builtin();
    for (planet, entry) in &kb.dignity_table {
        let expected: Vec<_> = entry.exaltation.iter().map(|s| opposite(s)).collect();
        let actual: Vec<_> = entry.fall.iter().map(String::as_str).collect();
        assert_eq!(actual, expected, "{}", planet);
    }
}

#[test]
fn test_every_placement_scores_in_range() {
    let kb = KnowledgeBase::builtin();
    let service = DignitiesService::new(&kb);
    for planet in kb.dignity_table.keys() {
        for sign in SIGN_NAMES {
            let score = service.score(planet, sign);
            assert!((-5..=5).contains(&score));
            assert_eq!(is_afflicted(score), score <= AFFLICTION_THRESHOLD);
        }
    }
}

#[test]
fn test_classic_placements() {
    let kb = KnowledgeBase::builtin();
    let service = DignitiesService::new(&kb);
    assert_eq!(service.classify("Sun", "Leo"), DignityType::Domicile);
    assert_eq!(service.classify("Moon", "Taurus"), DignityType::Exaltation);
    assert_eq!(service.classify("Venus", "Aries"), DignityType::Detriment);
    assert_eq!(service.classify("Saturn", "Aries"), DignityType::Fall);
    assert_eq!(service.classify("Jupiter", "Leo"), DignityType::Peregrine);
    assert_eq!(service.score("Pluto", "Scorpio"), 0);
}
