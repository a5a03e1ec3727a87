use crate::api::{CustomerAPI, DynAPI};
use crate::auth::AuthContext;
use crate::entities::{Review, ReviewUpdate};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// The customer's own reviews. Only the author sees this list, so every
/// row here is editable and deletable.
pub struct ReviewBoard {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    reviews: Collection<Review>,
    editing: Option<(i64, ReviewUpdate)>,
    confirming_delete: Option<i64>,
    submitting: bool,
}

impl ReviewBoard {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            reviews: Collection::new(),
            editing: None,
            confirming_delete: None,
            submitting: false,
        }
    }

    pub fn reviews(&self) -> &Collection<Review> {
        &self.reviews
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[tracing::instrument(skip(self, auth))]
    pub async fn load(&mut self, auth: &AuthContext) {
        let Some(user_id) = auth.user_id() else {
            return;
        };

        self.reviews.begin_load();

        match self.scope.run(self.api.list_reviews(user_id)).await {
            Ok(reviews) => self.reviews.complete_load(reviews),
            Err(err) => {
                self.reviews.fail_load();
                self.notices
                    .failure(format!("could not load reviews: {}", err.message));
            }
        }
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(review) = self.reviews.find(&id) {
            self.editing = Some((id, ReviewUpdate::from_review(review)));
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut ReviewUpdate> {
        self.editing.as_mut().map(|(_, update)| update)
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_edit(&mut self) {
        let Some((id, update)) = self.editing.clone() else {
            return;
        };

        if let Err(err) = update.validate() {
            self.notices
                .failure(format!("rating must be 1 to 5: {}", err.message));
            return;
        }

        self.submitting = true;
        let result = self.scope.run(self.api.update_review(id, update)).await;
        self.submitting = false;

        match result {
            Ok(updated) => {
                self.editing = None;
                self.reviews.sync_updated(updated);
                self.notices.success("review updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update review: {}", err.message)),
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.confirming_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.confirming_delete.take() else {
            return;
        };

        self.reviews.begin_action(id);
        let result = self.scope.run(self.api.delete_review(id)).await;
        self.reviews.finish_action(&id);

        match result {
            Ok(()) => {
                self.reviews.sync_removed(&id);
                self.notices.success("review deleted");
            }
            Err(err) => self
                .notices
                .failure(format!("could not delete review: {}", err.message)),
        }
    }
}
