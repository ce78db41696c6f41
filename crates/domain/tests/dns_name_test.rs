use loopdns_domain::{encode_domains, encode_name, name_to_string, DomainError};

#[test]
fn test_encode_single_label() {
    assert_eq!(encode_domains(&["abc"]).unwrap(), vec![3, b'a', b'b', b'c', 0]);
}

#[test]
fn test_encode_empty_list_is_root() {
    let empty: [&str; 0] = [];
    assert_eq!(encode_domains(&empty).unwrap(), vec![0]);
}

#[test]
fn test_encode_two_labels() {
    assert_eq!(encode_domains(&["a.b"]).unwrap(), vec![1, b'a', 1, b'b', 0]);
}

#[test]
fn test_encode_rejects_more_than_one_domain() {
    let result = encode_domains(&["a.com", "b.com"]);
    assert_eq!(result, Err(DomainError::MultipleDomainsInName(2)));
}

#[test]
fn test_encode_name_example_com() {
    let mut expected = vec![7];
    expected.extend_from_slice(b"example");
    expected.push(3);
    expected.extend_from_slice(b"com");
    expected.push(0);

    assert_eq!(encode_name("example.com"), expected);
}

#[test]
fn test_encode_name_trailing_dot_is_ignored() {
    assert_eq!(encode_name("example.com."), encode_name("example.com"));
}

#[test]
fn test_encode_name_root() {
    assert_eq!(encode_name(""), vec![0]);
    assert_eq!(encode_name("."), vec![0]);
}

#[test]
fn test_encode_name_does_not_validate_label_length() {
    let long_label = "x".repeat(70);
    let encoded = encode_name(&long_label);

    assert_eq!(encoded[0], 70);
    assert_eq!(encoded.len(), 72);
    assert_eq!(*encoded.last().unwrap(), 0);
}

#[test]
fn test_name_to_string() {
    assert_eq!(name_to_string(&encode_name("www.example.com")), "www.example.com");
    assert_eq!(name_to_string(&[0]), ".");
    assert_eq!(name_to_string(&[]), ".");
}

#[test]
fn test_name_to_string_truncated_label_does_not_panic() {
    assert_eq!(name_to_string(&[5, b'a', b'b']), "ab");
}
