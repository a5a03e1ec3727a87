use crate::api::{DynAPI, HotelAPI};
use crate::entities::{average_rating, star_display, Hotel, HotelUpdate, Review, Room, StarDisplay};
use crate::notify::Notifier;
use crate::store::{Collection, LoadState};
use crate::views::Scope;

/// Hotel-admin console: the hotel's own profile, its room inventory, and
/// the reviews left against it.
pub struct HotelDesk {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    profile: Option<Hotel>,
    profile_state: LoadState,
    profile_edit: Option<HotelUpdate>,
    rooms: Collection<Room>,
    reviews: Collection<Review>,
    submitting: bool,
}

impl HotelDesk {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            profile: None,
            profile_state: LoadState::Idle,
            profile_edit: None,
            rooms: Collection::new(),
            reviews: Collection::new(),
            submitting: false,
        }
    }

    pub fn profile(&self) -> Option<&Hotel> {
        self.profile.as_ref()
    }

    pub fn profile_state(&self) -> &LoadState {
        &self.profile_state
    }

    pub fn rooms(&self) -> &Collection<Room> {
        &self.rooms
    }

    pub fn reviews(&self) -> &Collection<Review> {
        &self.reviews
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_profile(&mut self) {
        self.profile_state = LoadState::Loading;

        match self.scope.run(self.api.find_profile()).await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.profile_state = LoadState::Ready;
            }
            Err(err) => {
                self.profile_state = LoadState::Failed;
                self.notices
                    .failure(format!("could not load hotel profile: {}", err.message));
            }
        }
    }

    pub fn open_profile_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.profile_edit = Some(HotelUpdate::from_hotel(profile));
        }
    }

    pub fn profile_edit_mut(&mut self) -> Option<&mut HotelUpdate> {
        self.profile_edit.as_mut()
    }

    pub fn close_profile_edit(&mut self) {
        self.profile_edit = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_profile_edit(&mut self) {
        let Some(update) = self.profile_edit.clone() else {
            return;
        };

        self.submitting = true;
        let result = self.scope.run(self.api.update_profile(update)).await;
        self.submitting = false;

        match result {
            Ok(updated) => {
                self.profile_edit = None;
                self.profile = Some(updated);
                self.notices.success("profile updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update profile: {}", err.message)),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_rooms(&mut self) {
        self.rooms.begin_load();

        match self.scope.run(self.api.list_rooms()).await {
            Ok(rooms) => self.rooms.complete_load(rooms),
            Err(err) => {
                self.rooms.fail_load();
                self.notices
                    .failure(format!("could not load rooms: {}", err.message));
            }
        }
    }

    /// Per-row mutation; other rows stay interactive while one is saving.
    #[tracing::instrument(skip(self))]
    pub async fn set_room_count(&mut self, id: i64, total_number: u32) {
        self.rooms.begin_action(id);
        let result = self
            .scope
            .run(self.api.update_room_count(id, total_number))
            .await;
        self.rooms.finish_action(&id);

        match result {
            Ok(updated) => {
                self.rooms.sync_updated(updated);
                self.notices.success("room count updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update room count: {}", err.message)),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_reviews(&mut self) {
        let Some(hotel_id) = self.profile.as_ref().map(|profile| profile.id) else {
            // profile not loaded yet, stay idle rather than erroring
            return;
        };

        self.reviews.begin_load();

        match self.scope.run(self.api.list_hotel_reviews(hotel_id)).await {
            Ok(reviews) => self.reviews.complete_load(reviews),
            Err(err) => {
                self.reviews.fail_load();
                self.notices
                    .failure(format!("could not load reviews: {}", err.message));
            }
        }
    }

    pub fn average_rating(&self) -> Option<f64> {
        average_rating(self.reviews.items())
    }

    pub fn stars(&self) -> Option<StarDisplay> {
        self.average_rating().map(star_display)
    }
}
