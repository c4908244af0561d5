//! The key registry.
//!
//! [`KeySet`] owns one fixed-size slot per key of the hierarchy. Key files
//! refer to slots by name: [`KeyName`] maps those names (`master_key_05`,
//! `tsec_key`, `key_area_key_ocean_0a`, ...) to typed slots through static
//! tables, so the exact spelling understood by the loader lives in one place.

use super::moduli::*;
use super::{
    Aes128Key, AesXtsKey, EncryptedKeyblob, Keyblob, Modulus, KEYBLOB_COUNT, KEY_GENERATION_1_0_0,
    KEY_GENERATION_6_2_0, KEY_GENERATION_MAX, MARIKO_AES_CLASS_KEY_COUNT, TSEC_KEY_COUNT,
};
use crate::error::Error;
use crate::utils::{is_zero, Hexstring};
use serde::ser::SerializeMap;
use snafu::{Backtrace, GenerateImplicitData};
use std::fmt;
use std::io::{self, Write};
use std::ops::Range;
use std::str::FromStr;

/// The three key area key purposes, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyAreaKeyType {
    Application = 0,
    Ocean = 1,
    System = 2,
}

macro_rules! key_names {
    ($(#[$meta:meta])* $ty:ident { $($variant:ident => $name:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)*
        }

        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)*];

            /// The name used for this key in key files.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }

            fn from_name(name: &str) -> Option<$ty> {
                $ty::ALL.iter().copied().find(|key| key.name() == name)
            }
        }
    };
}

key_names!(
    /// Keys that exist once per console.
    SingleKey {
        SecureBootKey => "secure_boot_key",
        TsecKey => "tsec_key",
        DeviceKey => "device_key",
        MarikoKek => "mariko_kek",
        MarikoBek => "mariko_bek",
        KeyblobMacKeySource => "keyblob_mac_key_source",
        TsecRootKek => "tsec_root_kek",
        Package1MacKek => "package1_mac_kek",
        Package1Kek => "package1_kek",
        MasterKeySource => "master_key_source",
        Package2KeySource => "package2_key_source",
        PerConsoleKeySource => "per_console_key_source",
        AesKekGenerationSource => "aes_kek_generation_source",
        AesKeyGenerationSource => "aes_key_generation_source",
        KeyAreaKeyApplicationSource => "key_area_key_application_source",
        KeyAreaKeyOceanSource => "key_area_key_ocean_source",
        KeyAreaKeySystemSource => "key_area_key_system_source",
        TitlekekSource => "titlekek_source",
        HeaderKekSource => "header_kek_source",
        HeaderKeySource => "header_key_source",
        HeaderKey => "header_key",
        SdCardKekSource => "sd_card_kek_source",
        SdCardNcaKeySource => "sd_card_nca_key_source",
        SdCardSaveKeySource => "sd_card_save_key_source",
        SaveMacKekSource => "save_mac_kek_source",
        SaveMacKeySource => "save_mac_key_source",
        SaveMacKey => "save_mac_key",
        XciHeaderKey => "xci_header_key",
        SdCardNcaKey => "sd_card_nca_key",
        SdCardSaveKey => "sd_card_save_key",
    }
);

key_names!(
    /// Key families spelled `<name>_XX`, where `XX` is a two-digit lowercase
    /// hex index.
    IndexedKey {
        KeyblobKeySource => "keyblob_key_source",
        KeyblobKey => "keyblob_key",
        KeyblobMacKey => "keyblob_mac_key",
        EncryptedKeyblob => "encrypted_keyblob",
        Keyblob => "keyblob",
        MarikoMasterKekSource => "mariko_master_kek_source",
        TsecAuthSignature => "tsec_auth_signature",
        TsecRootKey => "tsec_root_key",
        MasterKekSource => "master_kek_source",
        Package1MacKey => "package1_mac_key",
        MarikoAesClassKey => "mariko_aes_class_key",
        MasterKek => "master_kek",
        MasterKey => "master_key",
        Package1Key => "package1_key",
        Package2Key => "package2_key",
        Titlekek => "titlekek",
        KeyAreaKeyApplication => "key_area_key_application",
        KeyAreaKeyOcean => "key_area_key_ocean",
        KeyAreaKeySystem => "key_area_key_system",
    }
);

impl IndexedKey {
    /// The indices a key file may use for this family.
    ///
    /// Keyblob families only exist before 6.2.0. The TSEC families are
    /// indexed relative to 6.2.0, so `tsec_root_key_00` belongs to 6.2.0.
    pub fn indices(self) -> Range<usize> {
        match self {
            IndexedKey::KeyblobKeySource
            | IndexedKey::KeyblobKey
            | IndexedKey::KeyblobMacKey
            | IndexedKey::EncryptedKeyblob
            | IndexedKey::Keyblob => KEY_GENERATION_1_0_0..KEY_GENERATION_6_2_0,
            IndexedKey::TsecAuthSignature | IndexedKey::TsecRootKey => 0..TSEC_KEY_COUNT,
            IndexedKey::MasterKekSource | IndexedKey::Package1MacKey => {
                KEY_GENERATION_6_2_0..KEY_GENERATION_MAX
            }
            IndexedKey::MarikoAesClassKey => 0..MARIKO_AES_CLASS_KEY_COUNT,
            IndexedKey::MarikoMasterKekSource
            | IndexedKey::MasterKek
            | IndexedKey::MasterKey
            | IndexedKey::Package1Key
            | IndexedKey::Package2Key
            | IndexedKey::Titlekek
            | IndexedKey::KeyAreaKeyApplication
            | IndexedKey::KeyAreaKeyOcean
            | IndexedKey::KeyAreaKeySystem => KEY_GENERATION_1_0_0..KEY_GENERATION_MAX,
        }
    }
}

/// A key slot of the registry, as named in key files.
///
/// Indexed names built by hand may fall outside [`IndexedKey::indices`].
/// [`KeySet::get`] and [`KeySet::require`] treat those as missing keys, the
/// raw slot accessors panic on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyName {
    Single(SingleKey),
    Indexed(IndexedKey, usize),
}

impl KeyName {
    /// Every valid key name, in table order.
    pub fn all() -> impl Iterator<Item = KeyName> {
        let singles = SingleKey::ALL.iter().map(|&key| KeyName::Single(key));
        let indexed = IndexedKey::ALL
            .iter()
            .flat_map(|&key| key.indices().map(move |idx| KeyName::Indexed(key, idx)));
        singles.chain(indexed)
    }

    /// Whether the name refers to an existing slot.
    pub fn is_valid(self) -> bool {
        match self {
            KeyName::Single(_) => true,
            KeyName::Indexed(key, idx) => key.indices().contains(&idx),
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::Single(key) => f.write_str(key.name()),
            KeyName::Indexed(key, idx) => write!(f, "{}_{:02x}", key.name(), idx),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyName(pub String);

impl fmt::Display for UnknownKeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key name \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownKeyName {}

impl FromStr for KeyName {
    type Err = UnknownKeyName;

    /// Names are matched exactly: key files are lowercased by the parser
    /// before they get here.
    fn from_str(name: &str) -> Result<KeyName, UnknownKeyName> {
        if let Some(key) = SingleKey::from_name(name) {
            return Ok(KeyName::Single(key));
        }

        let indexed = name.rsplit_once('_').and_then(|(family, suffix)| {
            if suffix.len() != 2 || !suffix.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')) {
                return None;
            }
            let idx = usize::from_str_radix(suffix, 16).ok()?;
            let key = IndexedKey::from_name(family)?;
            if key.indices().contains(&idx) {
                Some(KeyName::Indexed(key, idx))
            } else {
                None
            }
        });

        indexed.ok_or_else(|| UnknownKeyName(name.to_owned()))
    }
}

macro_rules! slot_access {
    ($self:ident, $name:expr, $bytes:ident) => {
        match $name {
            KeyName::Single(key) => match key {
                SingleKey::SecureBootKey => $self.secure_boot_key.$bytes(),
                SingleKey::TsecKey => $self.tsec_key.$bytes(),
                SingleKey::DeviceKey => $self.device_key.$bytes(),
                SingleKey::MarikoKek => $self.mariko_kek.$bytes(),
                SingleKey::MarikoBek => $self.mariko_bek.$bytes(),
                SingleKey::KeyblobMacKeySource => $self.keyblob_mac_key_source.$bytes(),
                SingleKey::TsecRootKek => $self.tsec_root_kek.$bytes(),
                SingleKey::Package1MacKek => $self.package1_mac_kek.$bytes(),
                SingleKey::Package1Kek => $self.package1_kek.$bytes(),
                SingleKey::MasterKeySource => $self.master_key_source.$bytes(),
                SingleKey::Package2KeySource => $self.package2_key_source.$bytes(),
                SingleKey::PerConsoleKeySource => $self.per_console_key_source.$bytes(),
                SingleKey::AesKekGenerationSource => $self.aes_kek_generation_source.$bytes(),
                SingleKey::AesKeyGenerationSource => $self.aes_key_generation_source.$bytes(),
                SingleKey::KeyAreaKeyApplicationSource => {
                    $self.key_area_key_sources[KeyAreaKeyType::Application as usize].$bytes()
                }
                SingleKey::KeyAreaKeyOceanSource => {
                    $self.key_area_key_sources[KeyAreaKeyType::Ocean as usize].$bytes()
                }
                SingleKey::KeyAreaKeySystemSource => {
                    $self.key_area_key_sources[KeyAreaKeyType::System as usize].$bytes()
                }
                SingleKey::TitlekekSource => $self.titlekek_source.$bytes(),
                SingleKey::HeaderKekSource => $self.header_kek_source.$bytes(),
                SingleKey::HeaderKeySource => $self.header_key_source.$bytes(),
                SingleKey::HeaderKey => $self.header_key.$bytes(),
                SingleKey::SdCardKekSource => $self.sd_card_kek_source.$bytes(),
                SingleKey::SdCardNcaKeySource => $self.sd_card_nca_key_source.$bytes(),
                SingleKey::SdCardSaveKeySource => $self.sd_card_save_key_source.$bytes(),
                SingleKey::SaveMacKekSource => $self.save_mac_kek_source.$bytes(),
                SingleKey::SaveMacKeySource => $self.save_mac_key_source.$bytes(),
                SingleKey::SaveMacKey => $self.save_mac_key.$bytes(),
                SingleKey::XciHeaderKey => $self.xci_header_key.$bytes(),
                SingleKey::SdCardNcaKey => $self.sd_card_nca_key.$bytes(),
                SingleKey::SdCardSaveKey => $self.sd_card_save_key.$bytes(),
            },
            KeyName::Indexed(key, idx) => match key {
                IndexedKey::KeyblobKeySource => $self.keyblob_key_sources[idx].$bytes(),
                IndexedKey::KeyblobKey => $self.keyblob_keys[idx].$bytes(),
                IndexedKey::KeyblobMacKey => $self.keyblob_mac_keys[idx].$bytes(),
                IndexedKey::EncryptedKeyblob => $self.encrypted_keyblobs[idx].$bytes(),
                IndexedKey::Keyblob => $self.keyblobs[idx].$bytes(),
                IndexedKey::MarikoMasterKekSource => $self.mariko_master_kek_sources[idx].$bytes(),
                IndexedKey::TsecAuthSignature => $self.tsec_auth_signatures[idx].$bytes(),
                IndexedKey::TsecRootKey => $self.tsec_root_keys[idx].$bytes(),
                IndexedKey::MasterKekSource => $self.master_kek_sources[idx].$bytes(),
                IndexedKey::Package1MacKey => $self.package1_mac_keys[idx].$bytes(),
                IndexedKey::MarikoAesClassKey => $self.mariko_aes_class_keys[idx].$bytes(),
                IndexedKey::MasterKek => $self.master_keks[idx].$bytes(),
                IndexedKey::MasterKey => $self.master_keys[idx].$bytes(),
                IndexedKey::Package1Key => $self.package1_keys[idx].$bytes(),
                IndexedKey::Package2Key => $self.package2_keys[idx].$bytes(),
                IndexedKey::Titlekek => $self.titlekeks[idx].$bytes(),
                IndexedKey::KeyAreaKeyApplication => {
                    $self.key_area_keys[idx][KeyAreaKeyType::Application as usize].$bytes()
                }
                IndexedKey::KeyAreaKeyOcean => {
                    $self.key_area_keys[idx][KeyAreaKeyType::Ocean as usize].$bytes()
                }
                IndexedKey::KeyAreaKeySystem => {
                    $self.key_area_keys[idx][KeyAreaKeyType::System as usize].$bytes()
                }
            },
        }
    };
}

/// Every key of the hierarchy. All-zero slots are unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeySet {
    // Console unique.
    pub secure_boot_key: Aes128Key,
    pub tsec_key: Aes128Key,
    pub device_key: Aes128Key,
    pub keyblob_keys: [Aes128Key; KEYBLOB_COUNT],
    pub keyblob_mac_keys: [Aes128Key; KEYBLOB_COUNT],
    pub encrypted_keyblobs: [EncryptedKeyblob; KEYBLOB_COUNT],

    // Mariko.
    pub mariko_aes_class_keys: [Aes128Key; MARIKO_AES_CLASS_KEY_COUNT],
    pub mariko_kek: Aes128Key,
    pub mariko_bek: Aes128Key,

    pub keyblobs: [Keyblob; KEYBLOB_COUNT],
    pub keyblob_key_sources: [Aes128Key; KEYBLOB_COUNT],
    pub keyblob_mac_key_source: Aes128Key,
    pub tsec_root_kek: Aes128Key,
    pub package1_mac_kek: Aes128Key,
    pub package1_kek: Aes128Key,
    /// Indexed relative to 6.2.0.
    pub tsec_auth_signatures: [Aes128Key; TSEC_KEY_COUNT],
    /// Indexed relative to 6.2.0.
    pub tsec_root_keys: [Aes128Key; TSEC_KEY_COUNT],
    pub master_kek_sources: [Aes128Key; KEY_GENERATION_MAX],
    pub mariko_master_kek_sources: [Aes128Key; KEY_GENERATION_MAX],
    pub master_keks: [Aes128Key; KEY_GENERATION_MAX],
    pub master_key_source: Aes128Key,
    pub master_keys: [Aes128Key; KEY_GENERATION_MAX],
    pub package1_mac_keys: [Aes128Key; KEY_GENERATION_MAX],
    pub package1_keys: [Aes128Key; KEY_GENERATION_MAX],
    pub package2_keys: [Aes128Key; KEY_GENERATION_MAX],
    pub package2_key_source: Aes128Key,
    pub per_console_key_source: Aes128Key,
    pub aes_kek_generation_source: Aes128Key,
    pub aes_key_generation_source: Aes128Key,
    pub key_area_key_sources: [Aes128Key; 3],
    pub titlekek_source: Aes128Key,
    pub header_kek_source: Aes128Key,
    pub sd_card_kek_source: Aes128Key,
    pub sd_card_nca_key_source: AesXtsKey,
    pub sd_card_save_key_source: AesXtsKey,
    pub save_mac_kek_source: Aes128Key,
    pub save_mac_key_source: Aes128Key,
    pub header_key_source: AesXtsKey,

    // Derived.
    pub header_key: AesXtsKey,
    pub titlekeks: [Aes128Key; KEY_GENERATION_MAX],
    pub key_area_keys: [[Aes128Key; 3]; KEY_GENERATION_MAX],
    pub xci_header_key: Aes128Key,
    pub save_mac_key: Aes128Key,
    pub sd_card_nca_key: AesXtsKey,
    pub sd_card_save_key: AesXtsKey,

    // Fixed public keys.
    pub nca_hdr_fixed_key_moduli: [Modulus; 2],
    pub acid_fixed_key_moduli: [Modulus; 2],
    pub package2_fixed_key_modulus: Modulus,
}

impl KeySet {
    /// An empty keyset, with the public moduli of retail or development
    /// consoles already in place.
    pub fn new(dev: bool) -> KeySet {
        let mut ks = KeySet::default();
        if dev {
            ks.nca_hdr_fixed_key_moduli[0] = Modulus::from(DEV_NCA_HDR_FIXED_KEY_MODULUS);
            ks.acid_fixed_key_moduli[0] = Modulus::from(DEV_ACID_FIXED_KEY_MODULUS);
            ks.package2_fixed_key_modulus = Modulus::from(DEV_PACKAGE2_FIXED_KEY_MODULUS);
        } else {
            ks.nca_hdr_fixed_key_moduli[0] = Modulus::from(RETAIL_NCA_HDR_FIXED_KEY_MODULUS);
            ks.acid_fixed_key_moduli[0] = Modulus::from(RETAIL_ACID_FIXED_KEY_MODULUS);
            ks.package2_fixed_key_modulus = Modulus::from(RETAIL_PACKAGE2_FIXED_KEY_MODULUS);
        }
        ks
    }

    pub fn new_retail() -> KeySet {
        KeySet::new(false)
    }

    pub fn new_dev() -> KeySet {
        KeySet::new(true)
    }

    /// Raw bytes of a slot, set or not. Panics if `name` is not valid.
    pub fn slot(&self, name: KeyName) -> &[u8] {
        slot_access!(self, name, as_slice)
    }

    pub(crate) fn slot_mut(&mut self, name: KeyName) -> &mut [u8] {
        slot_access!(self, name, as_bytes_mut)
    }

    /// The slot's bytes, or `None` if the slot is unset or doesn't exist.
    pub fn get(&self, name: KeyName) -> Option<&[u8]> {
        if !name.is_valid() {
            return None;
        }
        let slot = self.slot(name);
        if is_zero(slot) {
            None
        } else {
            Some(slot)
        }
    }

    /// Like [`KeySet::get`], for consumers that can't go on without the key.
    pub fn require(&self, name: KeyName) -> Result<&[u8], Error> {
        self.get(name).ok_or_else(|| Error::MissingKey {
            key_name: name,
            backtrace: Backtrace::generate(),
        })
    }

    /// Overwrite a slot. `name` must be valid and `value` exactly as long as
    /// the slot.
    pub fn set(&mut self, name: KeyName, value: &[u8]) {
        self.slot_mut(name).copy_from_slice(value)
    }

    pub fn master_key(&self, generation: usize) -> Option<&Aes128Key> {
        self.master_keys.get(generation)?.get()
    }

    pub fn titlekek(&self, generation: usize) -> Option<&Aes128Key> {
        self.titlekeks.get(generation)?.get()
    }

    pub fn key_area_key(&self, generation: usize, ty: KeyAreaKeyType) -> Option<&Aes128Key> {
        self.key_area_keys.get(generation)?[ty as usize].get()
    }

    /// Names and values of every set slot, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyName, &[u8])> + '_ {
        KeyName::all().filter_map(move |name| self.get(name).map(|value| (name, value)))
    }

    /// Write every set slot out in key file syntax.
    pub fn write_key_file<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (name, value) in self.iter() {
            writeln!(w, "{} = {}", name, Hexstring(value))?;
        }
        Ok(())
    }
}

impl serde::Serialize for KeySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.iter() {
            map.serialize_entry(&name.to_string(), &Hexstring(value))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Option<KeyName> {
        s.parse().ok()
    }

    #[test]
    fn single_names_match_exactly() {
        assert_eq!(name("tsec_key"), Some(KeyName::Single(SingleKey::TsecKey)));
        assert_eq!(
            name("key_area_key_ocean_source"),
            Some(KeyName::Single(SingleKey::KeyAreaKeyOceanSource))
        );
        assert_eq!(name("tsec_keys"), None);
        assert_eq!(name(""), None);
    }

    #[test]
    fn indexed_names_use_two_hex_digits() {
        assert_eq!(name("master_key_00"), Some(KeyName::Indexed(IndexedKey::MasterKey, 0)));
        assert_eq!(name("master_key_1f"), Some(KeyName::Indexed(IndexedKey::MasterKey, 0x1F)));
        assert_eq!(
            name("key_area_key_system_0a"),
            Some(KeyName::Indexed(IndexedKey::KeyAreaKeySystem, 0xA))
        );
        assert_eq!(name("master_key_0"), None);
        assert_eq!(name("master_key_000"), None);
        assert_eq!(name("master_key_0A"), None);
        assert_eq!(name("master_key_20"), None);
        assert_eq!(name("master_key_"), None);
    }

    #[test]
    fn indexed_names_respect_generation_ranges() {
        assert_eq!(name("keyblob_05"), Some(KeyName::Indexed(IndexedKey::Keyblob, 5)));
        assert_eq!(name("keyblob_06"), None);
        assert_eq!(name("master_kek_source_05"), None);
        assert_eq!(
            name("master_kek_source_06"),
            Some(KeyName::Indexed(IndexedKey::MasterKekSource, 6))
        );
        assert_eq!(name("tsec_root_key_00"), Some(KeyName::Indexed(IndexedKey::TsecRootKey, 0)));
        assert_eq!(name("tsec_root_key_19"), Some(KeyName::Indexed(IndexedKey::TsecRootKey, 0x19)));
        assert_eq!(name("tsec_root_key_1a"), None);
        assert_eq!(name("mariko_aes_class_key_0b"), Some(KeyName::Indexed(IndexedKey::MarikoAesClassKey, 0xB)));
        assert_eq!(name("mariko_aes_class_key_0c"), None);
        assert_eq!(
            name("mariko_master_kek_source_00"),
            Some(KeyName::Indexed(IndexedKey::MarikoMasterKekSource, 0))
        );
    }

    #[test]
    fn every_name_parses_back_to_itself() {
        let mut count = 0;
        for key in KeyName::all() {
            assert_eq!(name(&key.to_string()), Some(key), "{}", key);
            count += 1;
        }
        assert!(count > SingleKey::ALL.len());
    }

    #[test]
    fn slots_have_the_right_size() {
        let ks = KeySet::default();
        assert_eq!(ks.slot(KeyName::Single(SingleKey::HeaderKey)).len(), 0x20);
        assert_eq!(ks.slot(KeyName::Indexed(IndexedKey::EncryptedKeyblob, 0)).len(), 0xB0);
        assert_eq!(ks.slot(KeyName::Indexed(IndexedKey::Keyblob, 5)).len(), 0x90);
        assert_eq!(ks.slot(KeyName::Indexed(IndexedKey::MasterKey, 0x1F)).len(), 0x10);
    }

    #[test]
    fn key_area_keys_map_by_purpose() {
        let mut ks = KeySet::default();
        ks.set(KeyName::Indexed(IndexedKey::KeyAreaKeyOcean, 3), &[0xAA; 0x10]);
        assert_eq!(ks.key_area_keys[3][1].as_bytes(), &[0xAA; 0x10]);
        assert!(ks.key_area_key(3, KeyAreaKeyType::Application).is_none());
        assert!(ks.key_area_key(3, KeyAreaKeyType::Ocean).is_some());
    }

    #[test]
    fn unset_slots_are_missing() {
        let mut ks = KeySet::new_retail();
        let master_key_00 = KeyName::Indexed(IndexedKey::MasterKey, 0);
        assert!(ks.get(master_key_00).is_none());
        match ks.require(master_key_00) {
            Err(Error::MissingKey { key_name, .. }) => assert_eq!(key_name, master_key_00),
            other => panic!("unexpected {:?}", other),
        }
        ks.set(master_key_00, &[1; 0x10]);
        assert_eq!(ks.require(master_key_00).unwrap(), &[1; 0x10]);
    }

    #[test]
    fn out_of_range_names_are_missing() {
        let ks = KeySet::new_retail();
        let name = KeyName::Indexed(IndexedKey::TsecRootKey, 0x1F);
        assert!(!name.is_valid());
        assert!(ks.get(name).is_none());
        match ks.require(name) {
            Err(Error::MissingKey { key_name, .. }) => assert_eq!(key_name, name),
            other => panic!("unexpected {:?}", other),
        }
        assert!(ks.get(KeyName::Indexed(IndexedKey::Keyblob, KEYBLOB_COUNT)).is_none());
    }

    #[test]
    fn presets_only_fill_moduli() {
        let retail = KeySet::new_retail();
        let dev = KeySet::new_dev();
        assert!(!retail.nca_hdr_fixed_key_moduli[0].is_unset());
        assert!(retail.nca_hdr_fixed_key_moduli[1].is_unset());
        assert_ne!(retail.package2_fixed_key_modulus, dev.package2_fixed_key_modulus);
        assert_eq!(retail.iter().count(), 0);
    }

    #[test]
    fn key_file_dump_lists_set_slots_in_order() {
        let mut ks = KeySet::default();
        ks.set(KeyName::Indexed(IndexedKey::MasterKey, 1), &[0x11; 0x10]);
        ks.set(KeyName::Single(SingleKey::TsecKey), &[0xAB; 0x10]);
        let mut out = Vec::new();
        ks.write_key_file(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("tsec_key = {}\nmaster_key_01 = {}\n", "ab".repeat(0x10), "11".repeat(0x10))
        );
    }

    #[test]
    fn serializes_as_name_map() {
        let mut ks = KeySet::default();
        ks.set(KeyName::Indexed(IndexedKey::Titlekek, 2), &[0x0F; 0x10]);
        let json = serde_json::to_value(&ks).unwrap();
        assert_eq!(json["titlekek_02"], "0f".repeat(0x10));
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
