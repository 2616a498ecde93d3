use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use site::theme::ThemeStore;

pub fn set_local_storage<T>(key: &str, value: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let key = format!("framework_{}", key);

    LocalStorage::set(key.clone(), value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a missing key is not an error; it is what every first visit looks like
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("framework_{}", key);

    match LocalStorage::get(key.clone()) {
        Ok(val) => Ok(Some(val)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// browser-backed theme persistence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage::<String>(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        set_local_storage(key, value)
    }
}
