use log::warn;

pub struct Hexstring<'a>(pub &'a [u8]);

impl<'a> core::fmt::Debug for Hexstring<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl<'a> core::fmt::Display for Hexstring<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<'a> serde::Serialize for Hexstring<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[macro_export]
macro_rules! impl_debug_serialize_hexstring {
    ($for:ident) => {
        impl std::fmt::Debug for $for {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($for))
                    .field(&$crate::utils::Hexstring(&self.0[..]))
                    .finish()
            }
        }

        impl std::fmt::Display for $for {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&$crate::utils::Hexstring(&self.0[..]), f)
            }
        }

        impl serde::Serialize for $for {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'a'..=b'f' => c - b'a' + 0xA,
        b'A'..=b'F' => c - b'A' + 0xA,
        b'0'..=b'9' => c - b'0',
        _ => 0,
    }
}

/// Decode a hexstring into `dst`, two characters per byte.
///
/// This never fails. A string of the wrong length is reported and decoded as
/// far as it goes (missing digits count as zero, extra ones are ignored), and
/// characters that aren't hexadecimal digits decode as zero.
pub fn decode_hex(dst: &mut [u8], src: &str) {
    if src.len() != dst.len() * 2 {
        warn!(
            "Encountered malformed value (length {} != expected {})",
            src.len(),
            dst.len() * 2
        );
    }

    let mut digits = src.bytes().map(hex_to_nibble);
    for byte in dst.iter_mut() {
        let hi = digits.next().unwrap_or(0);
        let lo = digits.next().unwrap_or(0);
        *byte = (hi << 4) | lo;
    }
}

/// Encode bytes as a lowercase hexstring, the way key files spell them.
pub fn encode_hex(src: &[u8]) -> String {
    Hexstring(src).to_string()
}

/// Returns true if every byte of the buffer is zero.
pub fn is_zero(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}
