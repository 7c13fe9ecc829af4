//! Profile stats, sign-in and reset commands

use crate::store::{Profile, ProfileStats, StoreError};

/// Snapshot the cached stats
#[must_use]
pub fn show_stats(profile: &Profile) -> ProfileStats {
    profile.stats()
}

/// Session details issued by the account service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub user_id: Option<String>,
    pub player_id: Option<String>,
    pub username: Option<String>,
}

/// Cache a session so later runs count as signed in
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be written.
pub fn sign_in(
    profile: &mut Profile,
    credentials: &Credentials,
) -> Result<ProfileStats, StoreError> {
    profile.set_access_token(&credentials.access_token)?;
    if let Some(user_id) = &credentials.user_id {
        profile.set_user_id(user_id)?;
    }
    if let Some(player_id) = &credentials.player_id {
        profile.set_player_id(player_id)?;
    }
    if let Some(username) = &credentials.username {
        profile.set_username(username)?;
    }
    log::info!("signed in as {}", profile.username().as_deref().unwrap_or("guest"));
    Ok(profile.stats())
}

/// Forget the session token and every cached stat
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be cleared.
pub fn reset_profile(profile: &mut Profile) -> Result<ProfileStats, StoreError> {
    let before = profile.stats();
    profile.destroy_all()?;
    log::info!("profile reset ({} wins, {} xp cleared)", before.wins, before.xp);
    Ok(before)
}
