use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{from_reader, Value};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("could not parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    #[error("no '{key}' entry in {}", path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("invalid '{key}' entry in {}", path.display())]
    InvalidValue {
        path: PathBuf,
        key: String,
        #[source]
        error: serde_json::Error,
    },
}

/// A directory holding the user's data, as one `config.json` file.
pub trait Vault {
    fn path(&self) -> &Path;

    fn read_vault_values<T: DeserializeOwned>(&self, key: &str) -> Result<T, VaultError>;
}

/// A value stored under its own key of the vault's configuration file.
pub trait VaultReadable: DeserializeOwned {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, VaultError> {
        vault.read_vault_values(Self::KEY)
    }
}

#[derive(Debug, Clone)]
pub struct VaultImpl {
    pub path: PathBuf,
}

impl VaultImpl {
    fn config_path(&self) -> PathBuf {
        self.path.join(CONFIG_FILE)
    }
}

impl Vault for VaultImpl {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_vault_values<T: DeserializeOwned>(&self, key: &str) -> Result<T, VaultError> {
        let path = self.config_path();
        let file = File::open(&path).map_err(|error| VaultError::Open {
            path: path.clone(),
            error,
        })?;

        let mut config: Value = from_reader(BufReader::new(file)).map_err(|error| VaultError::Parse {
            path: path.clone(),
            error,
        })?;

        let value = config
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| VaultError::MissingKey {
                path: path.clone(),
                key: key.to_string(),
            })?;

        serde_json::from_value(value).map_err(|error| VaultError::InvalidValue {
            path,
            key: key.to_string(),
            error,
        })
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod read_vault_values_tests {
    use std::fs::File;
    use std::io::Write;

    use serde::Deserialize;
    use tempfile::{tempdir, TempDir};

    use super::{Vault, VaultError, VaultImpl, VaultReadable, CONFIG_FILE};

    #[derive(Deserialize, Debug, PartialEq)]
    struct Greeting {
        text: String,
    }

    impl VaultReadable for Greeting {
        const KEY: &'static str = "greeting";
    }

    fn vault_with_config(content: &str) -> (TempDir, VaultImpl) {
        let directory = tempdir().unwrap();
        let mut file = File::create(directory.path().join(CONFIG_FILE)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        (directory, vault)
    }

    #[test]
    fn read__nominal() {
        let (_directory, vault) =
            vault_with_config(r#"{"greeting": {"text": "hello"}, "other": [1, 2]}"#);
        assert_eq!(
            Greeting::from_vault(&vault).unwrap(),
            Greeting {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn read__plain_values() {
        let (_directory, vault) = vault_with_config(r#"{"numbers": [1, 2, 3]}"#);
        let numbers: Vec<u8> = vault.read_vault_values("numbers").unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn read__no_config_file() {
        let directory = tempdir().unwrap();
        let vault = VaultImpl {
            path: directory.path().to_path_buf(),
        };
        assert!(matches!(
            Greeting::from_vault(&vault).unwrap_err(),
            VaultError::Open { .. }
        ));
    }

    #[test]
    fn read__invalid_json() {
        let (_directory, vault) = vault_with_config(r#"{"greeting": "#);
        assert!(matches!(
            Greeting::from_vault(&vault).unwrap_err(),
            VaultError::Parse { .. }
        ));
    }

    #[test]
    fn read__missing_key() {
        let (_directory, vault) = vault_with_config(r#"{"farewell": {"text": "bye"}}"#);
        let error = Greeting::from_vault(&vault).unwrap_err();
        assert!(matches!(&error, VaultError::MissingKey { key, .. } if key == "greeting"));
    }

    #[test]
    fn read__invalid_value() {
        let (_directory, vault) = vault_with_config(r#"{"greeting": {"text": 42}}"#);
        assert!(matches!(
            Greeting::from_vault(&vault).unwrap_err(),
            VaultError::InvalidValue { .. }
        ));
    }

    #[test]
    fn read__invalid_value_keeps_cause() {
        let (_directory, vault) = vault_with_config(r#"{"greeting": {"text": 42}}"#);
        let error = Greeting::from_vault(&vault).unwrap_err();
        let cause = std::error::Error::source(&error).expect("Has a cause");
        assert!(cause.is::<serde_json::Error>());
    }

    #[test]
    fn path__is_the_vault_directory() {
        let (directory, vault) = vault_with_config("{}");
        assert_eq!(vault.path(), directory.path());
    }
}
