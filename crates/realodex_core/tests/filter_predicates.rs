mod common;

use common::{person, with_birthday, with_housing_type, with_remark, with_tags};
use realodex_core::model::housing_type::is_valid_housing_type;
use realodex_core::model::{HousingType, Tag};
use realodex_core::{
    create_predicate, parse_command, Command, ContactList, FilterPrefix, ParseError,
};

fn phrases(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn tag_predicate_is_a_superset_check() {
    let predicate = create_predicate(FilterPrefix::Tag, &phrases(&["buyer"])).unwrap();
    let both = with_tags(person("Alex Yeoh"), &[Tag::Buyer, Tag::Seller]);
    let seller = with_tags(person("Bernice Yu"), &[Tag::Seller]);

    assert!(predicate.test(&both));
    assert!(!predicate.test(&seller));
}

#[test]
fn name_and_remark_match_substrings_ignoring_case() {
    let name = create_predicate(FilterPrefix::Name, &phrases(&["LEX"])).unwrap();
    let remark = create_predicate(FilterPrefix::Remark, &phrases(&["high floor"])).unwrap();
    let alex = with_remark(person("Alex Yeoh"), "Wants a HIGH FLOOR unit");

    assert!(name.test(&alex));
    assert!(!name.test(&person("Bernice Yu")));
    assert!(remark.test(&alex));
    assert!(!remark.test(&person("Bernice Yu")));
}

#[test]
fn birthday_predicate_matches_month_of_specified_birthdays() {
    let predicate = create_predicate(FilterPrefix::Birthday, &phrases(&["MARCH"])).unwrap();
    assert!(predicate.test(&with_birthday(person("Alex Yeoh"), "15Mar1990")));
    assert!(!predicate.test(&with_birthday(person("Bernice Yu"), "15Apr1990")));
    assert!(!predicate.test(&person("Charlotte Oliveiro")));
}

#[test]
fn housing_type_validation_is_case_insensitive_but_not_trimmed() {
    assert!(!is_valid_housing_type("HDB "));
    assert!(is_valid_housing_type("hdb"));

    let predicate = create_predicate(FilterPrefix::HousingType, &phrases(&["condominium"])).unwrap();
    let condo = with_housing_type(person("Alex Yeoh"), HousingType::Condominium);
    assert!(predicate.test(&condo));
    assert!(!predicate.test(&person("Bernice Yu")));
}

#[test]
fn empty_keyphrase_list_carries_filter_usage() {
    let err = create_predicate(FilterPrefix::Name, &[]).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
    assert!(err.to_string().contains("filter:"));
}

#[test]
fn filter_command_ands_every_prefix() {
    let Command::Filter(predicate) = parse_command("filter n/alex t/seller").unwrap() else {
        panic!("expected filter command");
    };
    let buyer_alex = person("Alex Yeoh");
    let seller_alex = with_tags(person("Alex Tan"), &[Tag::Seller]);
    let seller_bernice = with_tags(person("Bernice Yu"), &[Tag::Seller]);

    assert!(!predicate.test(&buyer_alex));
    assert!(predicate.test(&seller_alex));
    assert!(!predicate.test(&seller_bernice));
}

#[test]
fn filter_feedback_counts_matches_and_describes_the_filter() {
    let mut contacts = ContactList::new(vec![
        with_tags(person("Alex Yeoh"), &[Tag::Buyer, Tag::Seller]),
        person("Alexis Tan"),
        person("Bernice Yu"),
    ]);
    let result = parse_command("filter n/alex t/seller b/jan")
        .unwrap()
        .execute(&mut contacts)
        .unwrap();
    assert_eq!(
        result.feedback,
        "0 clients listed! (filter: name contains `alex` and tags include [SELLER] and birthday in January)"
    );

    let result = parse_command("filter n/ALEX")
        .unwrap()
        .execute(&mut contacts)
        .unwrap();
    assert_eq!(result.feedback, "2 clients listed! (filter: name contains `ALEX`)");
}
