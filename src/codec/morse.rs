//! International Morse code
//!
//! Letters and digits map to dot/dash codes and a space maps to the empty
//! code. Encoded symbols are joined by single spaces, so a word break shows
//! up as a double space. Decoding yields lower-case letters.

use crate::codec::CodecError;

const MORSE_TABLE: [(char, &str); 37] = [
    (' ', ""),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

pub fn encode(text: &str) -> Result<String, CodecError> {
    let codes = text
        .chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            MORSE_TABLE
                .iter()
                .find(|(ch, _)| *ch == upper)
                .map(|(_, code)| *code)
                .ok_or(CodecError::UnknownMorseChar(c))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.join(" "))
}

/// Every space-separated code maps to one character, so `""` is a single space
pub fn decode(text: &str) -> Result<String, CodecError> {
    text.split(' ')
        .map(|code| {
            MORSE_TABLE
                .iter()
                .find(|(_, c)| *c == code)
                .map(|(ch, _)| ch.to_ascii_lowercase())
                .ok_or_else(|| CodecError::UnknownMorseCode(code.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for (i, (_, a)) in MORSE_TABLE.iter().enumerate() {
            for (_, b) in &MORSE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
