//! Title keys.
//!
//! Content using titlekey crypto is tied to a rights id, and decrypting it
//! needs the matching access key (the titlekey). `title.keys` files map one to
//! the other, using the same syntax as other key files:
//!
//! ```text
//! 01004b9000490000000000000000000a = 0123456789abcdef0123456789abcdef
//! ```

use crate::error::Error;
use crate::utils::decode_hex;
use log::warn;
use snafu::{Backtrace, GenerateImplicitData};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RightsId([u8; 0x10]);
impl_debug_serialize_hexstring!(RightsId);

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessKey([u8; 0x10]);
impl_debug_serialize_hexstring!(AccessKey);

impl From<[u8; 0x10]> for RightsId {
    fn from(bytes: [u8; 0x10]) -> RightsId {
        RightsId(bytes)
    }
}

impl From<[u8; 0x10]> for AccessKey {
    fn from(bytes: [u8; 0x10]) -> AccessKey {
        AccessKey(bytes)
    }
}

impl AccessKey {
    pub fn as_bytes(&self) -> &[u8; 0x10] {
        &self.0
    }
}

/// Access keys by rights id.
#[derive(Debug, Default, Clone)]
pub struct TitleKeyManager {
    keys: HashMap<RightsId, AccessKey>,
}

impl TitleKeyManager {
    pub fn new() -> TitleKeyManager {
        TitleKeyManager::default()
    }

    /// Register an access key, replacing any previous one for the rights id.
    pub fn register(&mut self, rights_id: RightsId, access_key: AccessKey) {
        self.keys.insert(rights_id, access_key);
    }

    pub fn get(&self, rights_id: &RightsId) -> Option<&AccessKey> {
        self.keys.get(rights_id)
    }

    pub fn require(&self, rights_id: &RightsId) -> Result<&AccessKey, Error> {
        self.get(rights_id).ok_or_else(|| Error::MissingTitleKey {
            rights_id: *rights_id,
            backtrace: Backtrace::generate(),
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RightsId, &AccessKey)> {
        self.keys.iter()
    }

    /// Handle one pair of a title.keys file. Pairs with a malformed rights id
    /// are dropped with a warning.
    pub fn load_title_key(&mut self, key: &str, value: &str) {
        if key.len() % 2 != 0 {
            warn!("Rights Id {} has malformed id (odd number of characters)", key);
            return;
        }

        if key.len() != 32 {
            warn!("Rights Id {} has malformed id (wrong number of characters)", key);
            return;
        }

        if !key.bytes().all(|c| c.is_ascii_hexdigit()) {
            warn!("Rights Id {} has malformed id (not hexadecimal)", key);
            return;
        }

        // A short or long value is still registered, decoded as far as it goes.
        if value.len() != 32 {
            warn!("Rights Id {} has malformed value (wrong number of characters)", key);
        }

        let mut rights_id = RightsId::default();
        decode_hex(&mut rights_id.0, key);

        let mut access_key = AccessKey::default();
        decode_hex(&mut access_key.0, value);

        self.register(rights_id, access_key);
    }
}
