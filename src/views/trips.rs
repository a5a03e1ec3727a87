use crate::api::{DriverAPI, DynAPI};
use crate::auth::AuthContext;
use crate::entities::{RideRequest, Trip};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// Driver console: pending ride requests to accept or decline, plus the
/// trip history. Accept and decline keep one notice each and resolve it in
/// place instead of stacking a second one.
pub struct TripBoard {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    pending: Collection<RideRequest>,
    history: Collection<Trip>,
}

impl TripBoard {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            pending: Collection::new(),
            history: Collection::new(),
        }
    }

    pub fn pending(&self) -> &Collection<RideRequest> {
        &self.pending
    }

    pub fn history(&self) -> &Collection<Trip> {
        &self.history
    }

    #[tracing::instrument(skip(self, auth))]
    pub async fn load(&mut self, auth: &AuthContext) {
        let Some(driver_id) = auth.user_id() else {
            return;
        };

        self.pending.begin_load();

        match self.scope.run(self.api.list_ride_requests(driver_id)).await {
            Ok(requests) => self.pending.complete_load(requests),
            Err(err) => {
                self.pending.fail_load();
                self.notices
                    .failure(format!("could not load ride requests: {}", err.message));
            }
        }
    }

    #[tracing::instrument(skip(self, auth))]
    pub async fn load_history(&mut self, auth: &AuthContext) {
        let Some(driver_id) = auth.user_id() else {
            return;
        };

        self.history.begin_load();

        match self.scope.run(self.api.list_trips(driver_id)).await {
            Ok(trips) => self.history.complete_load(trips),
            Err(err) => {
                self.history.fail_load();
                self.notices
                    .failure(format!("could not load trips: {}", err.message));
            }
        }
    }

    #[tracing::instrument(skip(self, auth))]
    pub async fn accept(&mut self, auth: &AuthContext, id: &str) {
        let Some(driver_id) = auth.user_id() else {
            self.notices.failure("sign in to accept rides");
            return;
        };

        let Some(request) = self.pending.find(&id.to_string()).cloned() else {
            return;
        };

        let ride_id = match request.numeric_id() {
            Ok(ride_id) => ride_id,
            Err(err) => {
                self.notices
                    .failure(format!("malformed ride id: {}", err.message));
                return;
            }
        };

        self.pending.begin_action(request.id.clone());
        let handle = self
            .notices
            .pending(format!("accepting ride {}", request.id));

        let result = self.scope.run(self.api.accept_ride(ride_id, driver_id)).await;
        self.pending.finish_action(&request.id);

        match result {
            Ok(trip) => {
                self.pending.sync_removed(&request.id);
                self.history.sync_created(trip);
                handle.succeeded(format!("ride {} accepted", request.id));
            }
            // the request stays in the pending list untouched
            Err(err) => handle.failed(format!("could not accept ride: {}", err.message)),
        }
    }

    #[tracing::instrument(skip(self, auth))]
    pub async fn decline(&mut self, auth: &AuthContext, id: &str) {
        let Some(driver_id) = auth.user_id() else {
            self.notices.failure("sign in to decline rides");
            return;
        };

        let Some(request) = self.pending.find(&id.to_string()).cloned() else {
            return;
        };

        let ride_id = match request.numeric_id() {
            Ok(ride_id) => ride_id,
            Err(err) => {
                self.notices
                    .failure(format!("malformed ride id: {}", err.message));
                return;
            }
        };

        self.pending.begin_action(request.id.clone());
        let handle = self
            .notices
            .pending(format!("declining ride {}", request.id));

        let result = self
            .scope
            .run(self.api.decline_ride(ride_id, driver_id))
            .await;
        self.pending.finish_action(&request.id);

        match result {
            Ok(()) => {
                self.pending.sync_removed(&request.id);
                handle.succeeded(format!("ride {} declined", request.id));
            }
            Err(err) => handle.failed(format!("could not decline ride: {}", err.message)),
        }
    }
}
