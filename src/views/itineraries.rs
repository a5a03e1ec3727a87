use chrono::NaiveDate;

use crate::api::{CustomerAPI, DynAPI};
use crate::auth::AuthContext;
use crate::entities::{Itinerary, ItineraryDraft, ItineraryStatus};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// The customer's itinerary planner. Status tabs (upcoming, ongoing,
/// completed) are derived from the date range on render.
pub struct ItineraryPlanner {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    itineraries: Collection<Itinerary>,
    query: String,
    draft: Option<ItineraryDraft>,
    editing: Option<(i64, ItineraryDraft)>,
    confirming_delete: Option<i64>,
    submitting: bool,
}

impl ItineraryPlanner {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            itineraries: Collection::new(),
            query: String::new(),
            draft: None,
            editing: None,
            confirming_delete: None,
            submitting: false,
        }
    }

    pub fn itineraries(&self) -> &Collection<Itinerary> {
        &self.itineraries
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Skipped while nobody is signed in; the collection stays idle.
    #[tracing::instrument(skip(self, auth))]
    pub async fn load(&mut self, auth: &AuthContext) {
        let Some(user_id) = auth.user_id() else {
            return;
        };

        self.itineraries.begin_load();

        match self.scope.run(self.api.list_itineraries(user_id)).await {
            Ok(itineraries) => self.itineraries.complete_load(itineraries),
            Err(err) => {
                self.itineraries.fail_load();
                self.notices
                    .failure(format!("could not load itineraries: {}", err.message));
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Itinerary> {
        self.itineraries.filtered(&self.query)
    }

    pub fn with_status(&self, status: ItineraryStatus, today: NaiveDate) -> Vec<&Itinerary> {
        self.itineraries
            .filtered(&self.query)
            .into_iter()
            .filter(|itinerary| itinerary.status_on(today) == status)
            .collect()
    }

    pub fn open_create(&mut self) {
        self.draft = Some(ItineraryDraft::default());
    }

    pub fn draft_mut(&mut self) -> Option<&mut ItineraryDraft> {
        self.draft.as_mut()
    }

    pub fn close_create(&mut self) {
        self.draft = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_create(&mut self) {
        let Some(draft) = self.draft.clone() else {
            return;
        };

        if let Err(err) = draft.validate() {
            self.notices
                .failure(format!("itinerary is incomplete: {}", err.message));
            return;
        }

        self.submitting = true;
        let result = self.scope.run(self.api.create_itinerary(draft)).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.draft = None;
                self.itineraries.sync_created(created);
                self.notices.success("itinerary created");
            }
            Err(err) => self
                .notices
                .failure(format!("could not create itinerary: {}", err.message)),
        }
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(itinerary) = self.itineraries.find(&id) {
            self.editing = Some((id, ItineraryDraft::from_itinerary(itinerary)));
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut ItineraryDraft> {
        self.editing.as_mut().map(|(_, draft)| draft)
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_edit(&mut self) {
        let Some((id, draft)) = self.editing.clone() else {
            return;
        };

        if let Err(err) = draft.validate() {
            self.notices
                .failure(format!("itinerary is incomplete: {}", err.message));
            return;
        }

        self.submitting = true;
        let result = self.scope.run(self.api.update_itinerary(id, draft)).await;
        self.submitting = false;

        match result {
            Ok(updated) => {
                self.editing = None;
                self.itineraries.sync_updated(updated);
                self.notices.success("itinerary updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update itinerary: {}", err.message)),
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

        self.itineraries.begin_action(id);
        let result = self.scope.run(self.api.delete_itinerary(id)).await;
        self.itineraries.finish_action(&id);

        match result {
            Ok(()) => {
                self.itineraries.sync_removed(&id);
                self.notices.success("itinerary deleted");
            }
            Err(err) => self
                .notices
                .failure(format!("could not delete itinerary: {}", err.message)),
        }
    }
}
