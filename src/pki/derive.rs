//! Key derivation.
//!
//! The console's key hierarchy changed twice: up to 6.0.0 master keks are
//! stored in per-generation keyblobs unwrapped by the boot ROM, from 6.2.0
//! they come out of the TSEC firmware, and Mariko units derive them from the
//! Mariko KEK. The three paths all land in the same slots, so the stages
//! below run in a fixed order and later stages overwrite what earlier ones
//! produced. In particular the Mariko stage wins over both the keyblob path
//! and any master kek given in a key file.
//!
//! Every stage checks its inputs against the zero sentinel and silently
//! skips a generation whose inputs aren't all set. Nothing here fails; the
//! keyset simply ends up with more or fewer slots filled in. Since a stage
//! only reads slots and writes its outputs, running the whole pipeline
//! again over its own result changes nothing.

use super::keyset::{KeyAreaKeyType, KeySet};
use super::{generate_kek, KEY_GENERATION_1_0_0, KEY_GENERATION_6_2_0, KEY_GENERATION_MAX};
use log::{debug, warn};
use std::ops::Range;

/// One step of the derivation pipeline.
pub struct Stage {
    pub name: &'static str,
    /// Generations the stage runs for, in order.
    pub generations: Range<usize>,
    /// Derives the stage's outputs for one generation. Returns `None` as soon
    /// as a required input is unset.
    pub derive: fn(&mut KeySet, usize) -> Option<()>,
}

/// The pipeline, in execution order. Order matters: see the module docs.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "keyblob_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_6_2_0,
        derive: derive_keyblob_key,
    },
    Stage {
        name: "keyblob_mac_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_6_2_0,
        derive: derive_keyblob_mac_key,
    },
    Stage {
        name: "device_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_1_0_0 + 1,
        derive: derive_device_key,
    },
    Stage {
        name: "keyblob",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_6_2_0,
        derive: decrypt_keyblob,
    },
    Stage {
        name: "keyblob_contents",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_6_2_0,
        derive: extract_keyblob_contents,
    },
    Stage {
        name: "tsec_keydata",
        generations: KEY_GENERATION_6_2_0..KEY_GENERATION_MAX,
        derive: derive_tsec_keydata,
    },
    Stage {
        name: "master_kek_tsec",
        generations: KEY_GENERATION_6_2_0..KEY_GENERATION_MAX,
        derive: derive_master_kek_tsec,
    },
    Stage {
        name: "master_kek_mariko",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_MAX,
        derive: derive_master_kek_mariko,
    },
    Stage {
        name: "master_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_MAX,
        derive: derive_master_key,
    },
    Stage {
        name: "master_key_children",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_MAX,
        derive: derive_master_key_children,
    },
    Stage {
        name: "key_area_keys",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_MAX,
        derive: derive_key_area_keys,
    },
    Stage {
        name: "header_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_1_0_0 + 1,
        derive: derive_header_key,
    },
    Stage {
        name: "sd_card_keys",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_1_0_0 + 1,
        derive: derive_sd_card_keys,
    },
    Stage {
        name: "save_mac_key",
        generations: KEY_GENERATION_1_0_0..KEY_GENERATION_1_0_0 + 1,
        derive: derive_save_mac_key,
    },
];

impl KeySet {
    /// Run every derivation stage over the keyset.
    pub fn derive_keys(&mut self) {
        for stage in STAGES {
            for gen in stage.generations.clone() {
                // None means an input is unset, there's nothing to report.
                let _ = (stage.derive)(self, gen);
            }
        }
    }
}

fn derive_keyblob_key(ks: &mut KeySet, gen: usize) -> Option<()> {
    let sbk = ks.secure_boot_key.get()?;
    let tsec_key = ks.tsec_key.get()?;
    let keyblob_key_source = ks.keyblob_key_sources[gen].get()?;

    let tmp = tsec_key.derive_key(&keyblob_key_source.0);
    ks.keyblob_keys[gen] = sbk.derive_key(&tmp.0);
    Some(())
}

fn derive_keyblob_mac_key(ks: &mut KeySet, gen: usize) -> Option<()> {
    let keyblob_key = ks.keyblob_keys[gen].get()?;
    let keyblob_mac_key_source = ks.keyblob_mac_key_source.get()?;

    ks.keyblob_mac_keys[gen] = keyblob_key.derive_key(&keyblob_mac_key_source.0);
    Some(())
}

fn derive_device_key(ks: &mut KeySet, gen: usize) -> Option<()> {
    let keyblob_key = ks.keyblob_keys[gen].get()?;
    let per_console_key_source = ks.per_console_key_source.get()?;

    ks.device_key = keyblob_key.derive_key(&per_console_key_source.0);
    Some(())
}

fn decrypt_keyblob(ks: &mut KeySet, gen: usize) -> Option<()> {
    let keyblob_key = ks.keyblob_keys[gen].get()?;
    let keyblob_mac_key = ks.keyblob_mac_keys[gen].get()?;
    let encrypted_keyblob = ks.encrypted_keyblobs[gen].get()?;

    match encrypted_keyblob.decrypt(keyblob_key, keyblob_mac_key, gen) {
        Ok(keyblob) => ks.keyblobs[gen] = keyblob,
        Err(err) => warn!("{} Is keyblob_key_{:02x} correct?", err, gen),
    }
    Some(())
}

fn extract_keyblob_contents(ks: &mut KeySet, gen: usize) -> Option<()> {
    let keyblob = ks.keyblobs[gen].get()?;

    let package1_key = keyblob.package1_key();
    if !package1_key.is_unset() {
        ks.package1_keys[gen] = package1_key;
    }

    let master_kek = keyblob.master_kek();
    if !master_kek.is_unset() {
        ks.master_keks[gen] = master_kek;
    }
    Some(())
}

fn derive_tsec_keydata(ks: &mut KeySet, gen: usize) -> Option<()> {
    ks.tsec_auth_signatures[gen - KEY_GENERATION_6_2_0].get()?;

    // The TSEC root key and newer package1 keys are computed by the TSEC
    // firmware itself. They have to be supplied directly.
    debug!("Not deriving TSEC keydata for generation {:02x}", gen);
    Some(())
}

fn derive_master_kek_tsec(ks: &mut KeySet, gen: usize) -> Option<()> {
    let tsec_root_key = ks.tsec_root_keys[gen - KEY_GENERATION_6_2_0].get()?;
    let master_kek_source = ks.master_kek_sources[gen].get()?;

    ks.master_keks[gen] = tsec_root_key.derive_key(&master_kek_source.0);
    Some(())
}

fn derive_master_kek_mariko(ks: &mut KeySet, gen: usize) -> Option<()> {
    let mariko_kek = ks.mariko_kek.get()?;
    let mariko_master_kek_source = ks.mariko_master_kek_sources[gen].get()?;

    ks.master_keks[gen] = mariko_kek.derive_key(&mariko_master_kek_source.0);
    Some(())
}

fn derive_master_key(ks: &mut KeySet, gen: usize) -> Option<()> {
    let master_kek = ks.master_keks[gen].get()?;
    let master_key_source = ks.master_key_source.get()?;

    ks.master_keys[gen] = master_kek.derive_key(&master_key_source.0);
    Some(())
}

fn derive_master_key_children(ks: &mut KeySet, gen: usize) -> Option<()> {
    let master_key = ks.master_keys[gen].get()?;

    if let Some(titlekek_source) = ks.titlekek_source.get() {
        ks.titlekeks[gen] = master_key.derive_key(&titlekek_source.0);
    }
    if let Some(package2_key_source) = ks.package2_key_source.get() {
        ks.package2_keys[gen] = master_key.derive_key(&package2_key_source.0);
    }
    Some(())
}

fn derive_key_area_keys(ks: &mut KeySet, gen: usize) -> Option<()> {
    let master_key = ks.master_keys[gen].get()?;
    let aes_kek_generation_source = ks.aes_kek_generation_source.get()?;
    let aes_key_generation_source = ks.aes_key_generation_source.get()?;

    for ty in [KeyAreaKeyType::Application, KeyAreaKeyType::Ocean, KeyAreaKeyType::System] {
        if let Some(source) = ks.key_area_key_sources[ty as usize].get() {
            ks.key_area_keys[gen][ty as usize] =
                generate_kek(source, master_key, aes_kek_generation_source, aes_key_generation_source);
        }
    }
    Some(())
}

fn derive_header_key(ks: &mut KeySet, gen: usize) -> Option<()> {
    let master_key = ks.master_keys[gen].get()?;
    let header_kek_source = ks.header_kek_source.get()?;
    let header_key_source = ks.header_key_source.get()?;
    let aes_kek_generation_source = ks.aes_kek_generation_source.get()?;
    let aes_key_generation_source = ks.aes_key_generation_source.get()?;

    let header_kek = generate_kek(
        header_kek_source,
        master_key,
        aes_kek_generation_source,
        aes_key_generation_source,
    );
    ks.header_key = header_kek.derive_xts_key(&header_key_source.0);
    Some(())
}

fn derive_sd_card_keys(ks: &mut KeySet, gen: usize) -> Option<()> {
    let master_key = ks.master_keys[gen].get()?;
    let sd_card_kek_source = ks.sd_card_kek_source.get()?;
    let aes_kek_generation_source = ks.aes_kek_generation_source.get()?;
    let aes_key_generation_source = ks.aes_key_generation_source.get()?;

    let sd_kek = generate_kek(
        sd_card_kek_source,
        master_key,
        aes_kek_generation_source,
        aes_key_generation_source,
    );
    if let Some(sd_card_save_key_source) = ks.sd_card_save_key_source.get() {
        ks.sd_card_save_key = sd_kek.derive_xts_key(&sd_card_save_key_source.0);
    }
    if let Some(sd_card_nca_key_source) = ks.sd_card_nca_key_source.get() {
        ks.sd_card_nca_key = sd_kek.derive_xts_key(&sd_card_nca_key_source.0);
    }
    Some(())
}

fn derive_save_mac_key(ks: &mut KeySet, _gen: usize) -> Option<()> {
    let device_key = ks.device_key.get()?;
    let aes_kek_generation_source = ks.aes_kek_generation_source.get()?;
    let save_mac_kek_source = ks.save_mac_kek_source.get()?;
    let save_mac_key_source = ks.save_mac_key_source.get()?;

    let kek = device_key.derive_key(&aes_kek_generation_source.0);
    let save_mac_kek = kek.derive_key(&save_mac_kek_source.0);
    ks.save_mac_key = save_mac_kek.derive_key(&save_mac_key_source.0);
    Some(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pki::{Aes128Key, Keyblob};
    use crate::utils::decode_hex;

    fn key(byte: u8) -> Aes128Key {
        Aes128Key::from([byte; 0x10])
    }

    fn hex_key(hex: &str) -> Aes128Key {
        let mut k = Aes128Key::default();
        decode_hex(k.as_bytes_mut(), hex);
        k
    }

    fn legacy_keyset() -> KeySet {
        let mut ks = KeySet::default();
        ks.secure_boot_key = key(0x11);
        ks.tsec_key = key(0x22);
        ks.keyblob_mac_key_source = key(0x33);
        ks.per_console_key_source = key(0x44);
        ks.master_key_source = key(0x55);
        for gen in 0..KEY_GENERATION_6_2_0 {
            ks.keyblob_key_sources[gen] = key(0x60 + gen as u8);
        }
        ks
    }

    #[test]
    fn keyblob_key_is_tsec_then_sbk_decryption() {
        let mut ks = KeySet::default();
        // FIPS-197 C.1: the TSEC pass turns the source into 00112233...
        ks.tsec_key = hex_key("000102030405060708090a0b0c0d0e0f");
        ks.keyblob_key_sources[0] = hex_key("69c4e0d86a7b0430d8cdb78070b4c55a");
        ks.secure_boot_key = key(0x11);
        ks.derive_keys();

        let expected = key(0x11).derive_key(hex_key("00112233445566778899aabbccddeeff").as_bytes());
        assert_eq!(ks.keyblob_keys[0], expected);

        // Going back up the chain gives the source again.
        let tmp = Aes128Key::from(ks.secure_boot_key.encrypt_key(&ks.keyblob_keys[0]));
        assert_eq!(&ks.tsec_key.encrypt_key(&tmp), ks.keyblob_key_sources[0].as_bytes());
    }

    #[test]
    fn keyblob_keys_need_all_roots() {
        let mut ks = legacy_keyset();
        ks.tsec_key = Aes128Key::default();
        ks.derive_keys();
        assert!(ks.keyblob_keys.iter().all(Aes128Key::is_unset));
        assert!(ks.keyblob_mac_keys.iter().all(Aes128Key::is_unset));
        assert!(ks.device_key.is_unset());
    }

    #[test]
    fn legacy_chain_derives_mac_and_device_keys() {
        let mut ks = legacy_keyset();
        ks.keyblob_key_sources[3] = Aes128Key::default();
        ks.derive_keys();

        for gen in 0..KEY_GENERATION_6_2_0 {
            if gen == 3 {
                assert!(ks.keyblob_keys[gen].is_unset());
                assert!(ks.keyblob_mac_keys[gen].is_unset());
                continue;
            }
            let tmp = key(0x22).derive_key(key(0x60 + gen as u8).as_bytes());
            let keyblob_key = key(0x11).derive_key(tmp.as_bytes());
            assert_eq!(ks.keyblob_keys[gen], keyblob_key);
            assert_eq!(ks.keyblob_mac_keys[gen], keyblob_key.derive_key(key(0x33).as_bytes()));
        }
        assert_eq!(ks.device_key, ks.keyblob_keys[0].derive_key(key(0x44).as_bytes()));
    }

    fn keyblob_with(master_kek: Aes128Key, package1_key: Aes128Key) -> Keyblob {
        let mut raw = [0; 0x90];
        raw[0x00..0x10].copy_from_slice(master_kek.as_bytes());
        raw[0x80..0x90].copy_from_slice(package1_key.as_bytes());
        Keyblob::from(raw)
    }

    fn with_encrypted_keyblob(gen: usize, keyblob: &Keyblob) -> KeySet {
        let mut ks = legacy_keyset();
        let mut probe = ks.clone();
        probe.derive_keys();
        ks.encrypted_keyblobs[gen] =
            keyblob.encrypt(&probe.keyblob_keys[gen], &probe.keyblob_mac_keys[gen], &[0x77; 0x10]);
        ks
    }

    #[test]
    fn keyblob_provides_master_kek_and_package1_key() {
        let keyblob = keyblob_with(key(0xA1), key(0xB2));
        let mut ks = with_encrypted_keyblob(1, &keyblob);
        ks.derive_keys();

        assert_eq!(ks.keyblobs[1], keyblob);
        assert_eq!(ks.master_keks[1], key(0xA1));
        assert_eq!(ks.package1_keys[1], key(0xB2));
        assert_eq!(ks.master_keys[1], key(0xA1).derive_key(key(0x55).as_bytes()));
        assert!(ks.keyblobs[0].is_unset());
        assert!(ks.master_keys[0].is_unset());
    }

    #[test]
    fn empty_keyblob_fields_keep_existing_values() {
        let keyblob = keyblob_with(key(0xA1), Aes128Key::default());
        let mut ks = with_encrypted_keyblob(2, &keyblob);
        ks.package1_keys[2] = key(0xEE);
        ks.derive_keys();

        assert_eq!(ks.master_keks[2], key(0xA1));
        assert_eq!(ks.package1_keys[2], key(0xEE));
    }

    #[test]
    fn tampered_keyblob_is_not_decrypted() {
        let keyblob = keyblob_with(key(0xA1), key(0xB2));
        let mut ks = with_encrypted_keyblob(0, &keyblob);
        let mut raw = *ks.encrypted_keyblobs[0].as_bytes();
        raw[0xAF] ^= 0x80;
        ks.encrypted_keyblobs[0] = raw.into();
        ks.derive_keys();

        assert!(ks.keyblobs[0].is_unset());
        assert!(ks.master_keks[0].is_unset());
        assert!(ks.package1_keys[0].is_unset());
    }

    #[test]
    fn mariko_master_kek_overrides_keyblob() {
        let keyblob = keyblob_with(key(0xA1), key(0xB2));
        let mut ks = with_encrypted_keyblob(1, &keyblob);
        ks.mariko_kek = key(0xCC);
        ks.mariko_master_kek_sources[1] = key(0xDD);
        ks.derive_keys();

        let mariko = key(0xCC).derive_key(key(0xDD).as_bytes());
        assert_ne!(mariko, key(0xA1));
        assert_eq!(ks.master_keks[1], mariko);
        assert_eq!(ks.master_keys[1], mariko.derive_key(key(0x55).as_bytes()));
        // The keyblob's package1 key is left alone.
        assert_eq!(ks.package1_keys[1], key(0xB2));
    }

    #[test]
    fn mariko_master_kek_overrides_user_supplied_kek() {
        let mut ks = KeySet::default();
        ks.master_keks[0x0A] = key(0x01);
        ks.master_keks[0x0B] = key(0x02);
        ks.mariko_kek = key(0xCC);
        ks.mariko_master_kek_sources[0x0A] = key(0xDD);
        ks.derive_keys();

        assert_eq!(ks.master_keks[0x0A], key(0xCC).derive_key(key(0xDD).as_bytes()));
        assert_eq!(ks.master_keks[0x0B], key(0x02));
    }

    #[test]
    fn tsec_root_keys_are_relative_to_6_2_0() {
        let mut ks = KeySet::default();
        ks.tsec_root_keys[0] = key(0x12);
        ks.master_kek_sources[KEY_GENERATION_6_2_0] = key(0x34);
        ks.master_kek_sources[KEY_GENERATION_6_2_0 + 1] = key(0x56);
        ks.tsec_auth_signatures[0] = key(0x78);
        ks.derive_keys();

        assert_eq!(ks.master_keks[KEY_GENERATION_6_2_0], key(0x12).derive_key(key(0x34).as_bytes()));
        assert!(ks.master_keks[KEY_GENERATION_6_2_0 + 1].is_unset());
        assert!(ks.tsec_root_keys[1].is_unset());
    }

    #[test]
    fn no_master_key_source_means_no_master_keys() {
        let keyblob = keyblob_with(key(0xA1), key(0xB2));
        let mut ks = with_encrypted_keyblob(0, &keyblob);
        ks.master_key_source = Aes128Key::default();
        ks.mariko_kek = key(0xCC);
        for gen in 0..KEY_GENERATION_MAX {
            ks.mariko_master_kek_sources[gen] = key(gen as u8 + 1);
            ks.master_keks[gen] = key(0xF0);
        }
        ks.titlekek_source = key(0x0E);
        ks.derive_keys();

        assert!(ks.master_keks.iter().all(|k| !k.is_unset()));
        assert!(ks.master_keys.iter().all(Aes128Key::is_unset));
        assert!(ks.titlekeks.iter().all(Aes128Key::is_unset));
    }

    #[test]
    fn master_key_children() {
        let mut ks = KeySet::default();
        ks.master_keks[4] = key(0x04);
        ks.master_key_source = key(0x55);
        ks.titlekek_source = key(0x01);
        ks.package2_key_source = key(0x02);
        ks.aes_kek_generation_source = key(0x03);
        ks.aes_key_generation_source = key(0x04);
        ks.key_area_key_sources[KeyAreaKeyType::Ocean as usize] = key(0x05);
        ks.derive_keys();

        let master_key = key(0x04).derive_key(key(0x55).as_bytes());
        assert_eq!(ks.master_key(4), Some(&master_key));
        assert_eq!(ks.titlekek(4), Some(&master_key.derive_key(key(0x01).as_bytes())));
        assert_eq!(ks.package2_keys[4], master_key.derive_key(key(0x02).as_bytes()));

        let kek = master_key.derive_key(key(0x03).as_bytes());
        let src_kek = kek.derive_key(key(0x05).as_bytes());
        let expected = src_kek.derive_key(key(0x04).as_bytes());
        assert_eq!(ks.key_area_key(4, KeyAreaKeyType::Ocean), Some(&expected));
        assert_eq!(ks.key_area_key(4, KeyAreaKeyType::Application), None);
        assert_eq!(ks.key_area_key(3, KeyAreaKeyType::Ocean), None);
        // Generation-zero keys need master_key_00.
        assert!(ks.header_key.is_unset());
    }

    #[test]
    fn header_and_sd_keys_use_first_master_key() {
        let mut ks = KeySet::default();
        ks.master_keks[0] = key(0x10);
        ks.master_key_source = key(0x55);
        ks.aes_kek_generation_source = key(0x03);
        ks.aes_key_generation_source = key(0x04);
        ks.header_kek_source = key(0x06);
        ks.header_key_source = [0x07; 0x20].into();
        ks.sd_card_kek_source = key(0x08);
        ks.sd_card_nca_key_source = [0x09; 0x20].into();
        ks.derive_keys();

        let master_key = key(0x10).derive_key(key(0x55).as_bytes());
        let header_kek = generate_kek(&key(0x06), &master_key, &key(0x03), &key(0x04));
        assert_eq!(ks.header_key, header_kek.derive_xts_key(&[0x07; 0x20]));

        let sd_kek = generate_kek(&key(0x08), &master_key, &key(0x03), &key(0x04));
        assert_eq!(ks.sd_card_nca_key, sd_kek.derive_xts_key(&[0x09; 0x20]));
        assert!(ks.sd_card_save_key.is_unset());
    }

    #[test]
    fn save_mac_key_comes_from_device_key() {
        let mut ks = legacy_keyset();
        ks.aes_kek_generation_source = key(0x03);
        ks.save_mac_kek_source = key(0x0A);
        ks.save_mac_key_source = key(0x0B);
        ks.derive_keys();

        let kek = ks.device_key.derive_key(key(0x03).as_bytes());
        let save_mac_kek = kek.derive_key(key(0x0A).as_bytes());
        assert_eq!(ks.save_mac_key, save_mac_kek.derive_key(key(0x0B).as_bytes()));
    }

    #[test]
    fn derivation_is_idempotent() {
        let keyblob = keyblob_with(key(0xA1), key(0xB2));
        let mut ks = with_encrypted_keyblob(3, &keyblob);
        ks.mariko_kek = key(0xCC);
        ks.mariko_master_kek_sources[0x0C] = key(0xDD);
        ks.tsec_root_keys[1] = key(0x12);
        ks.master_kek_sources[7] = key(0x34);
        ks.master_keks[0x10] = key(0x99);
        ks.titlekek_source = key(0x01);
        ks.aes_kek_generation_source = key(0x03);
        ks.aes_key_generation_source = key(0x04);
        ks.key_area_key_sources = [key(0x05), key(0x06), key(0x07)];
        ks.derive_keys();

        let once = ks.clone();
        ks.derive_keys();
        assert_eq!(ks, once);
        assert!(!ks.master_keys[3].is_unset());
        assert!(!ks.master_keys[7].is_unset());
        assert!(!ks.master_keys[0x0C].is_unset());
        assert!(!ks.master_keys[0x10].is_unset());
    }

    #[test]
    fn stages_run_in_documented_order() {
        let names: Vec<_> = STAGES.iter().map(|s| s.name).collect();
        let pos = |n: &str| names.iter().position(|&x| x == n).unwrap();
        assert!(pos("keyblob_key") < pos("keyblob_mac_key"));
        assert!(pos("keyblob_contents") < pos("master_kek_mariko"));
        assert!(pos("master_kek_tsec") < pos("master_kek_mariko"));
        assert!(pos("master_kek_mariko") < pos("master_key"));
    }
}
