use std::collections::HashSet;

use passgen_core::password::{
    PASSWORD_ALPHABET, PasswordCharset, random_password, random_password_with,
};
use rand::{SeedableRng, distr::SampleString, rngs::StdRng};

#[test]
fn test_random_password_length() {
    for length in [0, 1, 12, 64, 1024] {
        assert_eq!(random_password(length).len(), length);
    }
}

#[test]
fn test_all_alphabet_characters_reachable() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let password = random_password_with(&mut rng, 20_000);

    let seen: HashSet<u8> = password.bytes().collect();
    let alphabet: HashSet<u8> = PASSWORD_ALPHABET.iter().copied().collect();
    assert_eq!(seen, alphabet);
}

#[test]
fn test_seeded_generation_is_repeatable() {
    let first = random_password_with(&mut StdRng::seed_from_u64(42), 24);
    let second = random_password_with(&mut StdRng::seed_from_u64(42), 24);
    assert_eq!(first, second);
}

#[test]
fn test_sample_string_appends() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut value = "prefix-".to_string();
    PasswordCharset.append_string(&mut rng, &mut value, 10);

    assert_eq!(value.len(), 17);
    assert!(value.starts_with("prefix-"));
    assert!(
        value[7..]
            .bytes()
            .all(|value| PASSWORD_ALPHABET.contains(&value))
    );
}

#[test]
fn test_random_passwords_differ() {
    let passwords: HashSet<String> = (0..100).map(|_| random_password(16)).collect();
    assert_eq!(passwords.len(), 100);
}
