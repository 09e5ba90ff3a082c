use super::*;

#[test]
fn capitalizes_local_part() {
    assert_eq!(display_name_from_email("priya@example.com").as_deref(), Some("Priya"));
}

#[test]
fn keeps_rest_of_local_part_verbatim() {
    assert_eq!(display_name_from_email("rahul.k@example.com").as_deref(), Some("Rahul.k"));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(display_name_from_email("  anu@example.com ").as_deref(), Some("Anu"));
}

#[test]
fn missing_at_uses_whole_input() {
    assert_eq!(display_name_from_email("sam").as_deref(), Some("Sam"));
}

#[test]
fn empty_local_part_is_none() {
    assert_eq!(display_name_from_email("@example.com"), None);
    assert_eq!(display_name_from_email(""), None);
}
