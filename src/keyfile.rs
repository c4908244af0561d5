//! Key file parsing.
//!
//! Key files are loosely formatted text: `name = value` pairs, where the
//! separator may be `=`, `,` or whitespace followed by either, and pairs are
//! separated by whitespace. Names are case-insensitive and get folded to
//! lowercase. Values must be an even number of hex digits.
//!
//! ```text
//! master_key_source = d8a2410ac6c59001c61d6a267c513f3c
//! TSEC_KEY,00112233445566778899aabbccddeeff
//! ```
//!
//! A bad value only costs its own pair. A bad name, or a pair cut short by the
//! end of the file, stops the parse of the whole file: everything after it is
//! ignored.

use crate::error::{Error, ResultExt};
use log::{debug, warn};
use std::borrow::Cow;
use std::path::Path;

fn is_filler(c: u8) -> bool {
    matches!(c, b'\n' | b'\r' | b'\0' | b' ' | b'\t')
}

fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

fn is_delimiter(c: u8) -> bool {
    matches!(c, b'=' | b',')
}

fn is_value_end(c: u8) -> bool {
    matches!(c, b'\n' | b'\r' | b'\0' | b' ' | b'\t' | b',')
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Check a value before handing it over. Returns false (after warning) if
/// the pair has to be skipped. An empty value is passed on: loading it
/// clears the slot.
fn validate_value(key: &str, value: &str) -> bool {
    if value.len() % 2 != 0 {
        warn!("Key {} has malformed value (odd number of characters)", key);
        return false;
    }

    if !value.bytes().all(|c| c.is_ascii_hexdigit()) {
        warn!("Key {} has malformed value (not hexadecimal)", key);
        return false;
    }

    true
}

/// Parse a key file held in `buf`, calling `f` with every valid `(key, value)`
/// pair in file order.
///
/// Key names are lowercased in place, which is why the buffer is mutable.
/// Pairs with a malformed value are skipped with a warning. A malformed key
/// stops parsing and is returned as an error; the pairs before it have
/// already been handed to `f`.
pub fn process_key_value_buffer<F>(buf: &mut [u8], mut f: F) -> Result<(), Error>
where
    F: FnMut(&str, &str),
{
    let len = buf.len();
    let mut ofs = 0;
    while ofs < len {
        // Skip from start of line to start of key.
        if is_filler(buf[ofs]) {
            ofs += 1;
            continue;
        }

        let key_start = ofs;
        let mut kend = ofs;
        while kend < len {
            match buf[kend] {
                b' ' | b'\t' | b',' | b'=' => break,
                b'A'..=b'Z' => buf[kend] = buf[kend].to_ascii_lowercase(),
                b'a'..=b'z' | b'0'..=b'9' | b'_' => (),
                _ => {
                    return Err(Error::MalformedKey {
                        key: lossy(&buf[key_start..kend]).into_owned(),
                    })
                }
            }
            kend += 1;
        }

        if kend == len {
            return Err(Error::TruncatedKeyValue {
                key: lossy(&buf[key_start..kend]).into_owned(),
            });
        }

        // We should be after a key now, so skip a delimiter.
        ofs = kend;
        if !is_delimiter(buf[ofs]) {
            while ofs < len && is_blank(buf[ofs]) {
                ofs += 1;
            }
            if ofs == len || !is_delimiter(buf[ofs]) {
                return Err(Error::MalformedKeyValue {
                    key: lossy(&buf[key_start..kend]).into_owned(),
                });
            }
        }
        ofs += 1;

        if key_start == kend {
            return Err(Error::EmptyKey);
        }

        while ofs < len && is_blank(buf[ofs]) {
            ofs += 1;
        }

        if ofs == len {
            return Err(Error::MissingValue {
                key: lossy(&buf[key_start..kend]).into_owned(),
            });
        }

        let value_start = ofs;
        while ofs < len && !is_value_end(buf[ofs]) {
            ofs += 1;
        }
        let value_end = ofs;
        // A comma may also separate two pairs.
        if ofs < len && buf[ofs] == b',' {
            ofs += 1;
        }

        let key = lossy(&buf[key_start..kend]);
        let value = lossy(&buf[value_start..value_end]);
        if validate_value(&key, &value) {
            f(&key, &value);
        }
    }
    Ok(())
}

/// Read a whole key file and parse it with [`process_key_value_buffer`].
///
/// The file is closed before parsing starts. Errors carry the file's path.
pub fn load_key_value_file<P, F>(path: P, f: F) -> Result<(), Error>
where
    P: AsRef<Path>,
    F: FnMut(&str, &str),
{
    let path = path.as_ref();
    let mut buf = std::fs::read(path).map_err(|err| (err, path))?;
    debug!("Parsing key file {} ({} bytes)", path.display(), buf.len());
    process_key_value_buffer(&mut buf, f).with_path(path)
}
