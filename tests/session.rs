//! Selector, association and session integration tests.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use deck_memorizer::{
    AssociationError, Associations, Card, Deck, ParseCardError, Presentation, Rank, SelectorError,
    Session,
    SessionError, SessionOptions, SessionState, Suit, SuitSelector,
};
use pretty_assertions::assert_eq;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("deck-memorizer-{}-{name}", std::process::id()))
}

fn present_all(session: &mut Session) -> Vec<Presentation> {
    let mut shown = Vec::new();
    while let Some(presentation) = session.present().unwrap() {
        shown.push(presentation);
    }
    shown
}

#[test]
fn selector_parses_suit_codes_in_any_case() {
    assert_eq!(SuitSelector::parse("D"), Ok(SuitSelector::suit(Suit::Diamond)));
    assert_eq!(SuitSelector::parse("h"), Ok(SuitSelector::suit(Suit::Heart)));
    assert_eq!("S".parse::<SuitSelector>(), Ok(SuitSelector::suit(Suit::Spade)));
    assert_eq!("c".parse::<SuitSelector>(), Ok(SuitSelector::suit(Suit::Club)));

    assert_eq!(
        SuitSelector::parse("X"),
        Err(SelectorError::UnknownCode("X".into()))
    );
    assert_eq!(
        SuitSelector::parse("DH"),
        Err(SelectorError::UnknownCode("DH".into()))
    );
    assert_eq!(
        SuitSelector::parse(""),
        Err(SelectorError::UnknownCode(String::new()))
    );
}

#[test]
fn selectors_combine_by_or() {
    let none = SuitSelector::default();
    assert!(none.is_none());
    assert_eq!(none.select(&Deck::full_ordered()).size(), 0);

    let red: SuitSelector = ["D", "H"]
        .into_iter()
        .map(|code| code.parse::<SuitSelector>().unwrap())
        .collect();
    assert!(red.matches(&card(Suit::Heart, Rank::Ace)));
    assert!(red.matches(&card(Suit::Diamond, Rank::King)));
    assert!(!red.matches(&card(Suit::Club, Rank::Ace)));

    let mut everything = red;
    everything |= SuitSelector::suit(Suit::Spade) | SuitSelector::suit(Suit::Club);
    assert_eq!(everything, SuitSelector::all());
}

#[test]
fn selection_keeps_full_deck_order() {
    let selected = SuitSelector::suit(Suit::Spade).select(&Deck::full_ordered());
    assert_eq!(selected, Deck::single_suit(Suit::Spade));
}

#[test]
fn associations_load_from_json_records() {
    let json = r#"[
        {"card": "H-A", "word": "apple"},
        {"card": "diamond-10", "word": "tent"},
        {"card": "h-a", "word": "anchor"}
    ]"#;
    let associations = Associations::from_json_str(json).unwrap();

    assert_eq!(associations.len(), 2);
    assert_eq!(associations.get(&card(Suit::Heart, Rank::Ace)), Some("anchor"));
    assert_eq!(associations.get(&card(Suit::Diamond, Rank::Ten)), Some("tent"));
    assert_eq!(associations.get(&card(Suit::Club, Rank::Two)), None);
}

#[test]
fn associations_reject_bad_documents() {
    assert_eq!(
        Associations::from_json_str(r#"[{"card": "X-1", "word": "nope"}]"#),
        Err(AssociationError::Card(ParseCardError::UnknownSuit("X".into())))
    );
    assert_eq!(
        Associations::from_json_str(r#"[{"card": "H-1", "word": "nope"}]"#),
        Err(AssociationError::Card(ParseCardError::RankOutOfRange("1".into())))
    );
    assert!(matches!(
        Associations::from_json_str(r#"[{"card": 5, "word": "nope"}]"#),
        Err(AssociationError::Json(_))
    ));
    assert!(matches!(
        Associations::from_json_str(r#"{"card": "H-A"}"#),
        Err(AssociationError::Json(_))
    ));
    assert!(Associations::from_json_str("[]").unwrap().is_empty());
}

#[test]
fn missing_association_file_loads_as_empty() {
    let path = scratch_path("missing.json");
    let _ = fs::remove_file(&path);
    assert_eq!(Associations::load(&path), Ok(Associations::new()));
}

#[test]
fn association_file_loads_records() {
    let path = scratch_path("valid.json");
    fs::write(&path, r#"[{"card": "S-Q", "word": "queen of swords"}]"#).unwrap();
    let loaded = Associations::load(&path);
    fs::remove_file(&path).unwrap();

    let associations = loaded.unwrap();
    assert_eq!(associations.len(), 1);
    assert_eq!(
        associations.get(&card(Suit::Spade, Rank::Queen)),
        Some("queen of swords")
    );
}

#[test]
fn malformed_association_file_is_an_error() {
    let path = scratch_path("malformed.json");
    fs::write(&path, "not json").unwrap();
    let loaded = Associations::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(loaded, Err(AssociationError::Json(_))));

    let dir = scratch_path("dir.json");
    fs::create_dir_all(&dir).unwrap();
    let loaded = Associations::load(&dir);
    fs::remove_dir(&dir).unwrap();
    assert!(matches!(loaded, Err(AssociationError::Io { .. })));
}

#[test]
fn associations_render_back_to_a_loadable_document() {
    let mut associations = Associations::new();
    associations.insert(card(Suit::Spade, Rank::Queen), "queen of swords");
    associations.insert(card(Suit::Heart, Rank::Two), "swan");

    let json = associations.to_json_string().unwrap();
    assert!(json.find("heart-2") < json.find("spade-q"));
    assert_eq!(Associations::from_json_str(&json).unwrap(), associations);
}

#[test]
fn session_presents_every_selected_card_once() {
    let options = SessionOptions::default().with_selector(SuitSelector::suit(Suit::Diamond));
    let mut session = Session::with_seed(options, Associations::new(), 11);
    assert_eq!(session.state(), SessionState::Presenting);
    assert_eq!(session.total(), 13);

    let shown = present_all(&mut session);
    assert_eq!(shown.len(), 13);
    assert_eq!(
        shown.iter().map(|p| p.position).collect::<Vec<_>>(),
        (0..13).collect::<Vec<_>>()
    );

    let cards: HashSet<Card> = shown.iter().map(|p| p.card).collect();
    let expected: HashSet<Card> = Deck::single_suit(Suit::Diamond).into_iter().collect();
    assert_eq!(cards, expected);

    assert_eq!(session.state(), SessionState::Recalling);
    assert_eq!(session.remaining_to_present(), 0);
    assert_eq!(session.remaining_to_recall(), 13);
}

#[test]
fn session_with_same_seed_presents_same_sequence() {
    let options = SessionOptions::default();
    let mut a = Session::with_seed(options, Associations::new(), 5);
    let mut b = Session::with_seed(options, Associations::new(), 5);
    assert_eq!(present_all(&mut a), present_all(&mut b));
}

#[test]
fn session_respects_max_deck_size() {
    let options = SessionOptions::default()
        .with_selector(SuitSelector::suit(Suit::Club))
        .with_max_deck_size(Some(5));
    let mut session = Session::with_seed(options, Associations::new(), 3);
    assert_eq!(session.total(), 5);

    let shown = present_all(&mut session);
    assert_eq!(shown.len(), 5);
    assert!(shown.iter().all(|p| p.card.suit == Suit::Club));

    let oversized = SessionOptions::default()
        .with_selector(SuitSelector::suit(Suit::Club))
        .with_max_deck_size(Some(100));
    assert_eq!(Session::with_seed(oversized, Associations::new(), 3).total(), 13);
}

#[test]
fn session_scores_recall_in_presentation_order() {
    let options = SessionOptions::default()
        .with_selector(SuitSelector::suit(Suit::Heart))
        .with_max_deck_size(Some(4));
    let mut session = Session::with_seed(options, Associations::new(), 21);
    let shown: Vec<Card> = present_all(&mut session).into_iter().map(|p| p.card).collect();

    let first = session.recall(shown[0]).unwrap();
    assert!(first.correct);
    assert_eq!(first.position, 0);
    assert_eq!(first.expected, shown[0]);

    let wrong_guess = card(Suit::Spade, Rank::Ace);
    let second = session.recall(wrong_guess).unwrap();
    assert!(!second.correct);
    assert_eq!(second.expected, shown[1]);
    assert_eq!(second.guess, wrong_guess);

    session.recall(shown[2]).unwrap();
    assert_eq!(session.state(), SessionState::Recalling);
    session.recall(shown[3]).unwrap();
    assert_eq!(session.state(), SessionState::Finished);

    let summary = session.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.recalled, 4);
    assert_eq!(summary.correct, 3);
    assert!(!summary.is_perfect());
    assert_eq!(session.score(), 3);

    let recalled: Vec<Card> = session.recalled().iter().copied().collect();
    assert_eq!(recalled, [shown[0], wrong_guess, shown[2], shown[3]]);
}

#[test]
fn session_rejects_operations_in_the_wrong_state() {
    let options = SessionOptions::default().with_max_deck_size(Some(1));
    let mut session = Session::with_seed(options, Associations::new(), 8);
    let guess = card(Suit::Heart, Rank::Ace);

    assert_eq!(session.recall(guess), Err(SessionError::InvalidState));
    assert_eq!(session.restart(), Err(SessionError::InvalidState));

    let shown = present_all(&mut session);
    assert_eq!(session.present(), Err(SessionError::InvalidState));

    session.recall(shown[0].card).unwrap();
    assert_eq!(session.recall(guess), Err(SessionError::InvalidState));
    assert_eq!(session.present(), Err(SessionError::InvalidState));
}

#[test]
fn session_without_cards_finishes_immediately() {
    let options = SessionOptions::default().with_selector(SuitSelector::none());
    let mut session = Session::with_seed(options, Associations::new(), 1);
    assert_eq!(session.total(), 0);
    assert_eq!(session.present(), Ok(None));
    assert_eq!(session.state(), SessionState::Finished);
    assert!(session.summary().is_perfect());
}

#[test]
fn session_shows_associations_only_when_enabled() {
    let mut associations = Associations::new();
    for card in Deck::single_suit(Suit::Spade) {
        associations.insert(card, card.rank.value().to_string());
    }
    let selector = SuitSelector::suit(Suit::Spade);

    let hidden = SessionOptions::default().with_selector(selector);
    let mut session = Session::with_seed(hidden, associations.clone(), 2);
    assert!(present_all(&mut session).iter().all(|p| p.association.is_none()));

    let shown = hidden.with_show_associations(true);
    let mut session = Session::with_seed(shown, associations, 2);
    for presentation in present_all(&mut session) {
        assert_eq!(
            presentation.association,
            Some(presentation.card.rank.value().to_string())
        );
    }
}

#[test]
fn restart_replays_the_same_run() {
    let options = SessionOptions::default().with_max_deck_size(Some(6));
    let mut session = Session::with_seed(options, Associations::new(), 17);
    let first_run = present_all(&mut session);
    for presentation in &first_run {
        session.recall(presentation.card).unwrap();
    }
    assert!(session.summary().is_perfect());

    session.restart().unwrap();
    assert_eq!(session.state(), SessionState::Presenting);
    assert_eq!(session.score(), 0);
    assert!(session.recalled().is_empty());
    assert_eq!(present_all(&mut session), first_run);
}
