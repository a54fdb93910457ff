/// Rotate ASCII letters by 13 places, keeping case; everything else passes through
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a'),
            'A'..='Z' => rotate(c, b'A'),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8) -> char {
    char::from((c as u8 - base + 13) % 26 + base)
}
