use crate::models::Profile;
use crate::status::StatusMessage;

/// Where cards and the status line end up.
///
/// Implementations are driven from both the UI thread and the runtime's
/// worker threads, and must apply calls in the order they arrive.
pub trait DisplaySurface: Send + Sync {
    fn clear_cards(&self);
    fn append_card(&self, card: Card);
    fn set_status(&self, status: StatusMessage);
}

/// Display fields for one profile.
///
/// Every field is plain text. A rendering target places each one in its
/// own text slot, so nothing taken from a profile is ever read as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub picture_url: String,
    pub picture_alt: String,
}

impl From<&Profile> for Card {
    fn from(profile: &Profile) -> Self {
        let full_name = profile.name.full();
        Self {
            picture_alt: format!("Profile picture of {full_name}"),
            full_name,
            username: format!("@{}", profile.login.username),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            location: format!("{}, {}", profile.location.city, profile.location.country),
            picture_url: profile.picture.medium.clone(),
        }
    }
}

pub fn clear_users(display: &dyn DisplaySurface) {
    display.clear_cards();
}

/// Replaces everything on the surface with one card per profile, in order.
pub fn render_users(display: &dyn DisplaySurface, profiles: &[Profile]) {
    clear_users(display);
    for profile in profiles {
        display.append_card(Card::from(profile));
    }
}
