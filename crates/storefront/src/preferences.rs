//! Site preferences kept in durable storage.

use resto_core::Theme;

use crate::storage::{Storage, StorageError, StorageExt, keys};

/// Read the saved theme. Absent or unrecognised values mean [`Theme::Light`].
///
/// Both the JSON form (`"dark"`) and the bare word the site script writes
/// (`dark`) are accepted.
pub fn load_theme<S: Storage + ?Sized>(storage: &S) -> Theme {
    match storage.load_json::<Theme>(keys::THEME) {
        Ok(theme) => theme.unwrap_or_default(),
        Err(e) => bare_theme(storage).unwrap_or_else(|| {
            tracing::warn!(error = %e, "Ignoring unreadable theme preference");
            Theme::default()
        }),
    }
}

fn bare_theme<S: Storage + ?Sized>(storage: &S) -> Option<Theme> {
    let raw = storage.get(keys::THEME).ok()??;
    raw.trim().parse().ok()
}

/// Persist `theme`.
///
/// # Errors
///
/// Returns an error if the preference cannot be written.
pub fn save_theme<S: Storage + ?Sized>(storage: &S, theme: Theme) -> Result<(), StorageError> {
    storage.save_json(keys::THEME, &theme)
}

/// Flip the saved theme and return the new one.
///
/// # Errors
///
/// Returns an error if the preference cannot be written.
pub fn toggle_theme<S: Storage + ?Sized>(storage: &S) -> Result<Theme, StorageError> {
    let theme = load_theme(storage).toggled();
    save_theme(storage, theme)?;
    tracing::info!(%theme, "Theme changed");
    Ok(theme)
}
