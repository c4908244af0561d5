//! Loading keys the way a tool run does: read the key files, derive, then
//! read the title keys.

use crate::error::Error;
use crate::keyfile::load_key_value_file;
use crate::pki::keyset::{KeyName, KeySet};
use crate::pki::{Aes128Key, KEY_GENERATION_MAX};
use crate::titlekey::TitleKeyManager;
use crate::utils::decode_hex;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Where to load keys from.
#[derive(Debug, Default, Clone)]
pub struct KeyOptions {
    /// Key files, loaded in order. Later files overwrite earlier slots. When
    /// empty, the default `prod.keys` (or `dev.keys`) is looked up.
    pub key_files: Vec<PathBuf>,
    /// When unset, the default `title.keys` is looked up.
    pub titlekey_file: Option<PathBuf>,
    /// Use development console presets and defaults.
    pub dev: bool,
}

/// Search `~/.config/switch` then `~/.switch` for `name`.
fn find_default_file(name: &str) -> Option<PathBuf> {
    let paths = [
        dirs_next::config_dir().map(|mut v| {
            v.push("switch");
            v.push(name);
            v
        }),
        dirs_next::home_dir().map(|mut v| {
            v.push(".switch");
            v.push(name);
            v
        }),
    ];

    paths.into_iter().flatten().find(|path| path.is_file())
}

impl KeyOptions {
    fn key_files(&self) -> Vec<PathBuf> {
        if !self.key_files.is_empty() {
            return self.key_files.clone();
        }
        let default_key_name = if self.dev { "dev.keys" } else { "prod.keys" };
        match find_default_file(default_key_name) {
            Some(path) => vec![path],
            None => {
                warn!("Keyfile {} not found.", default_key_name);
                Vec::new()
            }
        }
    }

    fn titlekey_file(&self) -> Option<PathBuf> {
        self.titlekey_file
            .clone()
            .or_else(|| find_default_file("title.keys"))
    }
}

/// Somewhere master keys can be handed to, such as a platform key-store.
pub trait KeyStore {
    fn preset_master_key(&mut self, generation: usize, key: &Aes128Key) -> Result<(), Error>;
}

/// Everything loaded for a run: the derived key hierarchy and the title keys.
#[derive(Debug, Clone)]
pub struct Keys {
    pub keyset: KeySet,
    pub titlekeys: TitleKeyManager,
}

/// Store one key file pair into its slot, if the name is known.
fn load_key(keyset: &mut KeySet, key: &str, value: &str) {
    match key.parse::<KeyName>() {
        Ok(name) => decode_hex(keyset.slot_mut(name), value),
        Err(_) => warn!("Failed to match key \"{}\", (value \"{}\")", key, value),
    }
}

fn report_load_error(err: &Error, path: &Path) {
    if err.is_parse_abort() {
        warn!("{} inside key file ({})", err, path.display());
    } else {
        warn!("{}", err);
    }
}

impl Keys {
    /// Load every key file, derive the hierarchy, then load the title keys.
    ///
    /// Nothing here is fatal: unreadable or malformed files are reported and
    /// the run goes on with whatever could be loaded.
    pub fn load(options: &KeyOptions) -> Keys {
        let mut keyset = KeySet::new(options.dev);
        for path in options.key_files() {
            info!("Loading keys from {}", path.display());
            if let Err(err) = load_key_value_file(&path, |k, v| load_key(&mut keyset, k, v)) {
                report_load_error(&err, &path);
            }
        }

        keyset.derive_keys();

        let mut titlekeys = TitleKeyManager::new();
        if let Some(path) = options.titlekey_file() {
            info!("Loading title keys from {}", path.display());
            if let Err(err) = load_key_value_file(&path, |k, v| titlekeys.load_title_key(k, v)) {
                report_load_error(&err, &path);
            }
            debug!("Loaded {} title keys", titlekeys.len());
        }

        Keys { keyset, titlekeys }
    }

    /// Hand every known master key to `store`. A rejected key is reported
    /// and the remaining ones are still exported.
    pub fn export_master_keys<S: KeyStore + ?Sized>(&self, store: &mut S) {
        for generation in 0..KEY_GENERATION_MAX {
            if let Some(key) = self.keyset.master_key(generation) {
                if let Err(err) = store.preset_master_key(generation, key) {
                    warn!("{} Is master_key_{:02x} correct?", err, generation);
                }
            }
        }
    }
}
