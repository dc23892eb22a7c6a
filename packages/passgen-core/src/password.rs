use rand::{
    Rng,
    distr::{Distribution, SampleString},
};

/// Every character a password may contain: ASCII letters, digits and
/// punctuation (all printable ASCII excluding the space)
pub const PASSWORD_ALPHABET: &[u8; 94] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Distribution sampling uniformly from [PASSWORD_ALPHABET]
///
/// Works the same way as [rand::distr::Alphanumeric] but over the
/// wider password alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordCharset;

impl Distribution<char> for PasswordCharset {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let index = rng.random_range(0..PASSWORD_ALPHABET.len());
        char::from(PASSWORD_ALPHABET[index])
    }
}

impl SampleString for PasswordCharset {
    fn append_string<R: Rng + ?Sized>(&self, rng: &mut R, string: &mut String, len: usize) {
        string.reserve(len);
        for _ in 0..len {
            string.push(self.sample(rng));
        }
    }
}

/// Generates a random password using the thread local secure generator
pub fn random_password(length: usize) -> String {
    let mut rng = rand::rng();
    random_password_with(&mut rng, length)
}

/// Generates a random password using the provided `rng`
pub fn random_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    PasswordCharset.sample_string(rng, length)
}
