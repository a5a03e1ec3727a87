use crate::api::{AdminAPI, DynAPI};
use crate::entities::{Driver, DriverDraft, DriverUpdate};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// Admin console over the driver fleet.
pub struct DriverConsole {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    drivers: Collection<Driver>,
    query: String,
    draft: Option<DriverDraft>,
    editing: Option<(i64, DriverUpdate)>,
    confirming_delete: Option<i64>,
    submitting: bool,
}

impl DriverConsole {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            drivers: Collection::new(),
            query: String::new(),
            draft: None,
            editing: None,
            confirming_delete: None,
            submitting: false,
        }
    }

    pub fn drivers(&self) -> &Collection<Driver> {
        &self.drivers
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.drivers.begin_load();

        match self.scope.run(self.api.list_drivers()).await {
            Ok(drivers) => self.drivers.complete_load(drivers),
            Err(err) => {
                self.drivers.fail_load();
                self.notices
                    .failure(format!("could not load drivers: {}", err.message));
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Driver> {
        self.drivers.filtered(&self.query)
    }

    pub fn open_create(&mut self) {
        self.draft = Some(DriverDraft::default());
    }

    pub fn draft_mut(&mut self) -> Option<&mut DriverDraft> {
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

        self.submitting = true;
        let result = self.scope.run(self.api.create_driver(draft)).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.draft = None;
                self.drivers.sync_created(created);
                self.notices.success("driver created");
            }
            Err(err) => self
                .notices
                .failure(format!("could not create driver: {}", err.message)),
        }
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(driver) = self.drivers.find(&id) {
            self.editing = Some((id, DriverUpdate::from_driver(driver)));
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut DriverUpdate> {
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

        self.submitting = true;
        let result = self.scope.run(self.api.update_driver(id, update)).await;
        self.submitting = false;

        match result {
            Ok(updated) => {
                self.editing = None;
                self.drivers.sync_updated(updated);
                self.notices.success("driver updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update driver: {}", err.message)),
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

        self.drivers.begin_action(id);
        let result = self.scope.run(self.api.delete_driver(id)).await;
        self.drivers.finish_action(&id);

        match result {
            Ok(()) => {
                self.drivers.sync_removed(&id);
                self.notices.success("driver deleted");
            }
            Err(err) => self
                .notices
                .failure(format!("could not delete driver: {}", err.message)),
        }
    }
}
