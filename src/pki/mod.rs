//! Key material and the primitives used to derive it.
//!
//! The Switch key hierarchy is rooted in a handful of console-unique secrets
//! (the secure boot key, the TSEC key, the Mariko KEK, ...) that get mixed
//! with seeds burned into each firmware "generation" to produce the keys
//! actually used to decrypt content. [`keyset::KeySet`] holds every slot of
//! that hierarchy, and [`derive`] fills in whatever can be computed from the
//! slots already set.
//!
//! A slot whose bytes are all zero is considered unset. There is no separate
//! "known" flag, so a genuinely all-zero key can't be represented.

pub mod derive;
pub mod keyset;
mod moduli;

use crate::error::Error;
use crate::utils::is_zero;
use aes::Aes128;
use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit, KeyIvInit, StreamCipher};
use cmac::{Cmac, Mac};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

pub const KEY_GENERATION_1_0_0: usize = 0x00;
pub const KEY_GENERATION_3_0_0: usize = 0x01;
pub const KEY_GENERATION_3_0_1: usize = 0x02;
pub const KEY_GENERATION_4_0_0: usize = 0x03;
pub const KEY_GENERATION_5_0_0: usize = 0x04;
pub const KEY_GENERATION_6_0_0: usize = 0x05;
/// First generation whose keys come out of the TSEC firmware instead of a
/// keyblob.
pub const KEY_GENERATION_6_2_0: usize = 0x06;
pub const KEY_GENERATION_MAX: usize = 0x20;

/// Number of generations protected by a keyblob.
pub const KEYBLOB_COUNT: usize = KEY_GENERATION_6_2_0 - KEY_GENERATION_1_0_0;
/// Number of generations indexed relative to 6.2.0.
pub const TSEC_KEY_COUNT: usize = KEY_GENERATION_MAX - KEY_GENERATION_6_2_0;
pub const MARIKO_AES_CLASS_KEY_COUNT: usize = 0xC;

macro_rules! key_type {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name([u8; $size]);

        impl_debug_serialize_hexstring!($name);

        impl Default for $name {
            fn default() -> $name {
                $name([0; $size])
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> $name {
                $name(bytes)
            }
        }

        impl $name {
            pub const SIZE: usize = $size;

            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0[..]
            }

            pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
                &mut self.0[..]
            }

            /// An all-zero key is the "not provided" sentinel.
            pub fn is_unset(&self) -> bool {
                is_zero(&self.0)
            }

            /// Returns the key if it is set.
            pub fn get(&self) -> Option<&$name> {
                if self.is_unset() {
                    None
                } else {
                    Some(self)
                }
            }
        }
    };
}

key_type!(Aes128Key, 0x10);
key_type!(
    /// A pair of AES-128 keys, for XTS.
    AesXtsKey,
    0x20
);
key_type!(
    /// A keyblob as stored in the console's EKS: CMAC, CTR counter, then the
    /// encrypted [`Keyblob`].
    EncryptedKeyblob,
    0xB0
);
key_type!(Keyblob, 0x90);
key_type!(
    /// An RSA-2048 public modulus.
    Modulus,
    0x100
);

impl Aes128Key {
    /// Decrypt a single block of key material under this key.
    pub fn derive_key(&self, source: &[u8; 0x10]) -> Aes128Key {
        let mut newkey = *source;

        let crypter = Aes128::new(GenericArray::from_slice(&self.0));
        crypter.decrypt_block(GenericArray::from_mut_slice(&mut newkey));

        Aes128Key(newkey)
    }

    pub fn encrypt_key(&self, key: &Aes128Key) -> [u8; 0x10] {
        let mut newkey = key.0;

        let crypter = Aes128::new(GenericArray::from_slice(&self.0));
        crypter.encrypt_block(GenericArray::from_mut_slice(&mut newkey));

        newkey
    }

    pub fn derive_xts_key(&self, source: &[u8; 0x20]) -> AesXtsKey {
        let mut newkey = *source;

        let crypter = Aes128::new(GenericArray::from_slice(&self.0));
        crypter.decrypt_block(GenericArray::from_mut_slice(&mut newkey[0x00..0x10]));
        crypter.decrypt_block(GenericArray::from_mut_slice(&mut newkey[0x10..0x20]));

        AesXtsKey(newkey)
    }

    fn apply_ctr(&self, buf: &mut [u8], ctr: &[u8]) {
        let mut crypter = Aes128Ctr::new(
            GenericArray::from_slice(&self.0),
            GenericArray::from_slice(ctr),
        );
        crypter.apply_keystream(buf);
    }

    fn cmac(&self) -> Cmac<Aes128> {
        <Cmac<Aes128> as Mac>::new(GenericArray::from_slice(&self.0))
    }
}

/// The key generation scheme used by the security processor: the master key
/// unwraps a KEK seed, which unwraps the source, which unwraps the key seed.
pub fn generate_kek(
    src: &Aes128Key,
    master_key: &Aes128Key,
    kek_seed: &Aes128Key,
    key_seed: &Aes128Key,
) -> Aes128Key {
    let kek = master_key.derive_key(&kek_seed.0);
    let src_kek = kek.derive_key(&src.0);
    src_kek.derive_key(&key_seed.0)
}

impl Keyblob {
    pub fn master_kek(&self) -> Aes128Key {
        let mut key = [0; 0x10];
        key.copy_from_slice(&self.0[0x00..0x10]);
        Aes128Key(key)
    }

    pub fn package1_key(&self) -> Aes128Key {
        let mut key = [0; 0x10];
        key.copy_from_slice(&self.0[0x80..0x90]);
        Aes128Key(key)
    }

    /// Encrypt and sign the keyblob. `ctr` becomes the stored counter.
    pub fn encrypt(&self, key: &Aes128Key, mac_key: &Aes128Key, ctr: &[u8; 0x10]) -> EncryptedKeyblob {
        let mut encrypted_keyblob = [0; 0xB0];
        encrypted_keyblob[0x10..0x20].copy_from_slice(ctr);
        encrypted_keyblob[0x20..].copy_from_slice(&self.0);
        key.apply_ctr(&mut encrypted_keyblob[0x20..], ctr);

        let mut cmac = mac_key.cmac();
        cmac.update(&encrypted_keyblob[0x10..]);
        encrypted_keyblob[..0x10].copy_from_slice(&cmac.finalize().into_bytes());
        EncryptedKeyblob(encrypted_keyblob)
    }
}

impl EncryptedKeyblob {
    /// Check the keyblob's CMAC, then decrypt it.
    pub fn decrypt(&self, key: &Aes128Key, mac_key: &Aes128Key, keyblob_id: usize) -> Result<Keyblob, Error> {
        let mut cmac = mac_key.cmac();
        cmac.update(&self.0[0x10..]);
        cmac.verify_slice(&self.0[..0x10]).map_err(|err| (keyblob_id, err))?;

        let mut keyblob = [0; 0x90];
        keyblob.copy_from_slice(&self.0[0x20..]);
        key.apply_ctr(&mut keyblob, &self.0[0x10..0x20]);

        Ok(Keyblob(keyblob))
    }
}
