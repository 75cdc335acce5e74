use realodex_core::command::usage::DELETE_USAGE;
use realodex_core::parser::delete::{
    parse_delete, MESSAGE_INDEX_AND_NAME_PROVIDED, MESSAGE_NO_FIELDS_PROVIDED,
};
use realodex_core::{parse_command, Command, DeleteTarget, ParseError, Prefix};

#[test]
fn index_and_name_both_provided_is_a_syntax_error() {
    let err = parse_delete("1 n/James").unwrap_err();
    assert_eq!(err.usage(), Some(DELETE_USAGE));
    assert_eq!(
        err.to_string(),
        format!("{MESSAGE_INDEX_AND_NAME_PROVIDED}\n{DELETE_USAGE}")
    );
}

#[test]
fn no_fields_provided_is_a_syntax_error() {
    let err = parse_delete("").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            detail: MESSAGE_NO_FIELDS_PROVIDED,
            usage: DELETE_USAGE,
        }
    );
}

#[test]
fn repeated_name_prefix_names_that_prefix() {
    let err = parse_delete(" n/James n/John").unwrap_err();
    assert_eq!(err, ParseError::DuplicatePrefixes(vec![Prefix::Name]));
    assert!(err.to_string().ends_with("n/"));
}

#[test]
fn full_line_dispatches_to_delete() {
    let Command::Delete(DeleteTarget::Name(name)) = parse_command("delete n/James Ho").unwrap()
    else {
        panic!("expected delete by name");
    };
    assert_eq!(name.as_str(), "James Ho");

    let Command::Delete(DeleteTarget::Index(index)) = parse_command("delete 3").unwrap() else {
        panic!("expected delete by index");
    };
    assert_eq!(index.one_based(), 3);
}

#[test]
fn text_glued_to_the_prefix_is_part_of_the_index() {
    // `1n/James` has no whitespace before the marker, so it is one bad index.
    assert!(matches!(
        parse_delete("1n/James").unwrap_err(),
        ParseError::Syntax { usage: DELETE_USAGE, .. }
    ));
}
