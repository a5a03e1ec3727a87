use crate::api::{AdminAPI, AuthAPI, DynAPI};
use crate::entities::{Customer, CustomerDraft, CustomerUpdate};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// Admin console over the customer collection: load, filter, sign up new
/// customers through the shared sign-up endpoint, edit, delete.
pub struct CustomerConsole {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    customers: Collection<Customer>,
    query: String,
    draft: Option<CustomerDraft>,
    editing: Option<(i64, CustomerUpdate)>,
    confirming_delete: Option<i64>,
    submitting: bool,
}

impl CustomerConsole {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            customers: Collection::new(),
            query: String::new(),
            draft: None,
            editing: None,
            confirming_delete: None,
            submitting: false,
        }
    }

    pub fn customers(&self) -> &Collection<Customer> {
        &self.customers
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.customers.begin_load();

        match self.scope.run(self.api.list_customers()).await {
            Ok(customers) => self.customers.complete_load(customers),
            Err(err) => {
                self.customers.fail_load();
                self.notices
                    .failure(format!("could not load customers: {}", err.message));
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Customer> {
        self.customers.filtered(&self.query)
    }

    pub fn open_create(&mut self) {
        self.draft = Some(CustomerDraft::default());
    }

    pub fn draft_mut(&mut self) -> Option<&mut CustomerDraft> {
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
        let result = self.scope.run(self.api.sign_up(draft, "customer")).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.draft = None;
                self.customers.sync_created(created);
                self.notices.success("customer created");
            }
            // the dialog stays open so the input can be corrected
            Err(err) => self
                .notices
                .failure(format!("could not create customer: {}", err.message)),
        }
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(customer) = self.customers.find(&id) {
            self.editing = Some((id, CustomerUpdate::from_customer(customer)));
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut CustomerUpdate> {
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
        let result = self.scope.run(self.api.update_customer(id, update)).await;
        self.submitting = false;

        match result {
            Ok(updated) => {
                self.editing = None;
                self.customers.sync_updated(updated);
                self.notices.success("customer updated");
            }
            Err(err) => self
                .notices
                .failure(format!("could not update customer: {}", err.message)),
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

        self.customers.begin_action(id);
        let result = self.scope.run(self.api.delete_customer(id)).await;
        self.customers.finish_action(&id);

        match result {
            Ok(()) => {
                // identity is known, no re-fetch needed
                self.customers.sync_removed(&id);
                self.notices.success("customer deleted");
            }
            Err(err) => self
                .notices
                .failure(format!("could not delete customer: {}", err.message)),
        }
    }
}
