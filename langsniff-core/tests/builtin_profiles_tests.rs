//! Classification of real sentences against the built-in profiles

use langsniff_core::{classify, ClassifierConfig, ClassificationVerdict, Registry};

fn detect(text: &str) -> ClassificationVerdict {
    let registry = Registry::builtin().unwrap();
    let words = text.split_whitespace().count();
    classify(text, words, &registry, &ClassifierConfig::default())
}

fn assert_confident(text: &str, base: &str, variant: &str) {
    let verdict = detect(text);
    assert!(verdict.is_confident(), "expected confident {base}, got {verdict:?}");
    assert_eq!(verdict.winning_base_language, base);
    assert_eq!(verdict.winning_variant_id, variant);
}

#[test]
fn test_english_text() {
    assert_confident(
        "The weather was bad, but we went to the park and played in the rain with all of \
         our friends because it was the only day that they could come.",
        "english",
        "american",
    );
}

#[test]
fn test_british_spelling_selects_british_variant() {
    assert_confident(
        "My favourite colour is grey and the theatre in the centre of the town is where \
         we go with our neighbour.",
        "english",
        "british",
    );
}

#[test]
fn test_german_with_umlauts() {
    assert_confident(
        "Ich möchte für dich über die Brücke gehen, aber es ist schön, dass wir während \
         der Ferien zurück nach Hause können und später noch mehr Zeit haben.",
        "german",
        "deutsch8",
    );
}

#[test]
fn test_german_without_umlauts() {
    assert_confident(
        "Ich moechte fuer dich ueber die Bruecke gehen, aber es ist schoen, dass wir \
         waehrend der Ferien zurueck nach Hause koennen und spaeter noch mehr Zeit haben.",
        "german",
        "deutsch",
    );
}

#[test]
fn test_french_text() {
    assert_confident(
        "Le chat est dans la maison avec les enfants et il ne veut pas sortir parce que \
         la pluie est très forte sur la ville.",
        "french",
        "francais",
    );
}

#[test]
fn test_spanish_text() {
    assert_confident(
        "El perro está en la casa con los niños y no quiere salir porque la lluvia es muy \
         fuerte sobre la ciudad.",
        "spanish",
        "espanol",
    );
}

#[test]
fn test_dutch_text() {
    assert_confident(
        "De hond is in het huis met de kinderen en hij wil niet naar buiten omdat de regen \
         erg hard is.",
        "dutch",
        "nederlands",
    );
}

#[test]
fn test_too_few_words_is_no_winner() {
    assert!(detect("Hello").is_no_winner());
    assert!(detect("").is_no_winner());
    assert!(detect("12345 67890").is_no_winner());
}

#[test]
fn test_capitalised_stopwords_do_not_count() {
    // matching is case-sensitive
    assert!(detect("THE AND OF THE AND").is_no_winner());
}
