use crate::error::{Error, Result};

/// Decode a hex string into signed bytes.
///
/// Every two hex digits make one byte; values above `0x7f` come out
/// negative, as in Java's `byte`. An odd trailing digit is decoded on its
/// own. Only ASCII hex digits are accepted, so signs are rejected, and an
/// error's `position` counts characters rather than bytes.
///
/// ```rust
/// use plainval::parse_hex_binary;
///
/// assert_eq!(parse_hex_binary("4812d7").unwrap(), vec![72, 18, -41]);
/// ```
pub fn parse_hex_binary(hex: &str) -> Result<Vec<i8>> {
    let digits: Vec<char> = hex.chars().collect();

    digits
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let group: String = pair.iter().collect();
            if !pair.iter().all(char::is_ascii_hexdigit) {
                return Err(Error::InvalidHex {
                    position: i * 2,
                    group,
                });
            }
            u8::from_str_radix(&group, 16)
                .map(|byte| byte as i8)
                .map_err(|_| Error::InvalidHex {
                    position: i * 2,
                    group,
                })
        })
        .collect()
}
