//! Food store
//!
//! Owns the dashboard state and keeps the food list in step with the backend.
//! Every mutation waits for the backend and then swaps in a new list computed
//! from whatever list is current when the response arrives.

use super::intent::Intent;
use super::list::FoodList;
use super::state::{DashboardSnapshot, ModalState};
use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, Operation};
use crate::logging::LogLevel;
use crate::models::{Food, FoodDraft, FoodEdit};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

pub struct FoodStore {
    api: Arc<dyn FoodApi>,
    state: watch::Sender<DashboardSnapshot>,
    event_sender: Option<mpsc::Sender<Event>>,
    error_classifier: ErrorClassifier,
}

impl FoodStore {
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        let (state, _) = watch::channel(DashboardSnapshot::default());
        Self {
            api,
            state,
            event_sender: None,
            error_classifier: ErrorClassifier::new(),
        }
    }

    /// Report activity on `event_sender` as well as through `log`.
    pub fn with_events(mut self, event_sender: mpsc::Sender<Event>) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    /// Base URL of the backend behind this store.
    pub fn api_url(&self) -> String {
        self.api.base_url()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.borrow().clone()
    }

    pub fn foods(&self) -> FoodList {
        self.state.borrow().foods.clone()
    }

    /// Replace the whole list with the backend's collection. Errors are returned untouched.
    pub async fn load(&self) -> Result<(), ApiError> {
        self.emit(Event::request(
            Operation::Load,
            format!("Fetching foods from {}", self.api.base_url()),
        ));
        let foods = match self.api.list_foods().await {
            Ok(foods) => foods,
            Err(e) => {
                self.report_error(Operation::Load, "Failed to load foods", &e);
                return Err(e);
            }
        };

        let count = foods.len();
        self.state.send_modify(|state| state.foods = FoodList::new(foods));
        self.emit(Event::success(
            Operation::Load,
            format!("Loaded {} foods", count),
        ));
        Ok(())
    }

    /// Create a food from `draft` and append the backend's copy. Failures are only logged.
    pub async fn create(&self, draft: FoodDraft) {
        self.emit(Event::request(
            Operation::Create,
            format!("Creating \"{}\"", draft.name),
        ));
        match self.api.create_food(draft.into_new_food()).await {
            Ok(created) => {
                let msg = format!("Created #{} \"{}\"", created.id, created.name);
                self.state
                    .send_modify(|state| state.foods = state.foods.appended(created));
                self.emit(Event::success(Operation::Create, msg));
            }
            Err(e) => self.report_error(Operation::Create, "Failed to create food", &e),
        }
    }

    /// Apply `edit` to the food being edited, send it as a full replacement and
    /// swap the backend's copy into the list. Failures are only logged.
    pub async fn update(&self, edit: FoodEdit) {
        let editing = self.state.borrow().editing.clone();
        let Some(editing) = editing else {
            let msg = "No food selected for editing".to_string();
            log::warn!("{}", msg);
            self.emit(Event::error(Operation::Update, msg, LogLevel::Warn));
            return;
        };

        let merged = editing.merged(&edit);
        self.emit(Event::request(
            Operation::Update,
            format!("Updating #{} \"{}\"", editing.id, merged.name),
        ));
        match self.api.update_food(editing.id, merged).await {
            Ok(updated) => {
                let msg = format!("Updated #{} \"{}\"", updated.id, updated.name);
                self.state
                    .send_modify(|state| state.foods = state.foods.replaced(updated));
                self.emit(Event::success(Operation::Update, msg));
            }
            Err(e) => self.report_error(
                Operation::Update,
                &format!("Failed to update food #{}", editing.id),
                &e,
            ),
        }
    }

    /// Delete `id` on the backend and drop it from the list.
    ///
    /// The list is filtered whatever the backend answered; a failed deletion is
    /// still returned so the caller sees it.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.emit(Event::request(Operation::Delete, format!("Deleting #{}", id)));
        let result = self.api.delete_food(id).await;

        self.state
            .send_modify(|state| state.foods = state.foods.without(id));

        match result {
            Ok(()) => {
                self.emit(Event::success(Operation::Delete, format!("Deleted #{}", id)));
                Ok(())
            }
            Err(e) => {
                self.report_error(Operation::Delete, &format!("Failed to delete #{}", id), &e);
                Err(e)
            }
        }
    }

    /// Target `food` with the edit dialog and open it.
    pub fn begin_edit(&self, food: Arc<Food>) {
        let msg = format!("Editing #{} \"{}\"", food.id, food.name);
        self.state.send_modify(|state| {
            state.editing = Some(food);
            state.edit_modal = ModalState::Open;
        });
        self.emit(Event::state_change(msg));
    }

    pub fn toggle_add_modal(&self) {
        self.state
            .send_modify(|state| state.add_modal = state.add_modal.toggled());
        let now = self.state.borrow().add_modal;
        self.emit(Event::state_change(format!("Create dialog {}", now)));
    }

    pub fn toggle_edit_modal(&self) {
        self.state
            .send_modify(|state| state.edit_modal = state.edit_modal.toggled());
        let now = self.state.borrow().edit_modal;
        self.emit(Event::state_change(format!("Edit dialog {}", now)));
    }

    /// Route an intent to its operation. Only load and delete can fail.
    pub async fn dispatch(&self, intent: Intent) -> Result<(), ApiError> {
        match intent {
            Intent::Load => self.load().await,
            Intent::ToggleAddModal => {
                self.toggle_add_modal();
                Ok(())
            }
            Intent::ToggleEditModal => {
                self.toggle_edit_modal();
                Ok(())
            }
            Intent::BeginEdit(food) => {
                self.begin_edit(food);
                Ok(())
            }
            Intent::Create(draft) => {
                self.create(draft).await;
                Ok(())
            }
            Intent::Update(edit) => {
                self.update(edit).await;
                Ok(())
            }
            Intent::Delete(id) => self.delete(id).await,
        }
    }

    fn report_error(&self, operation: Operation, context: &str, error: &ApiError) {
        let level = self.error_classifier.classify_api_error(error);
        let msg = format!("{}: {}", context, error);
        let log_level: log::Level = level.into();
        log::log!(log_level, "{}", msg);
        self.emit(Event::error(operation, msg, level));
    }

    fn emit(&self, event: Event) {
        if event.event_type == EventType::Success {
            log::info!("{}", event.msg);
        } else {
            log::debug!("{}", event.msg);
        }
        if let Some(sender) = &self.event_sender {
            // Drop the event rather than stall the store if nobody drains the queue
            let _ = sender.try_send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFoodApi;
    use crate::models::NewFood;

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 12.5,
            available: true,
            image: format!("https://example.com/{}.png", id),
        }
    }

    fn draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            description: format!("{} description", name),
            price: 12.5,
            image: "https://example.com/new.png".to_string(),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    /// A store whose initial list is `foods`, loaded through the mock.
    async fn loaded_store(mut mock: MockFoodApi, foods: Vec<Food>) -> FoodStore {
        mock.expect_base_url()
            .returning(|| "http://localhost:3333".to_string());
        mock.expect_list_foods()
            .times(1)
            .returning(move || Ok(foods.clone()));
        let store = FoodStore::new(Arc::new(mock));
        store.load().await.unwrap();
        store
    }

    #[tokio::test]
    /// Loading replaces the list with exactly what the backend returned, in order.
    async fn test_load_replaces_list_in_order() {
        let store = loaded_store(MockFoodApi::new(), vec![food(1, "A"), food(2, "B")]).await;
        assert_eq!(store.foods(), vec![food(1, "A"), food(2, "B")]);
    }

    #[tokio::test]
    /// A failing load is returned to the caller and leaves the list alone.
    async fn test_load_error_propagates() {
        let mut mock = MockFoodApi::new();
        mock.expect_base_url()
            .returning(|| "http://localhost:3333".to_string());
        mock.expect_list_foods()
            .times(1)
            .returning(|| Err(server_error()));
        let store = FoodStore::new(Arc::new(mock));

        let result = store.load().await;
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
        assert!(store.foods().is_empty());
    }

    #[tokio::test]
    /// Creating appends the server's record and always submits available = true.
    async fn test_create_appends_server_record() {
        let mut mock = MockFoodApi::new();
        mock.expect_create_food()
            .withf(|body: &NewFood| body.available && body.name == "B")
            .times(1)
            .returning(|body| {
                Ok(Food {
                    id: 2,
                    name: body.name,
                    description: body.description,
                    price: body.price,
                    available: body.available,
                    image: body.image,
                })
            });
        let store = loaded_store(mock, vec![food(1, "A")]).await;
        let before = store.foods();

        store.create(draft("B")).await;

        let after = store.foods();
        assert_eq!(after.len(), 2);
        assert_eq!(after.get(1).unwrap().id, 2);
        assert!(after.get(1).unwrap().available);
        assert!(Arc::ptr_eq(before.get(0).unwrap(), after.get(0).unwrap()));
        assert_eq!(before.len(), 1);
        assert!(!before.ptr_eq(&after));
    }

    #[tokio::test]
    /// A failed create leaves the list untouched and reports an error event.
    async fn test_create_failure_keeps_list() {
        let mut mock = MockFoodApi::new();
        mock.expect_create_food()
            .times(1)
            .returning(|_| Err(server_error()));
        let (tx, mut rx) = mpsc::channel(16);
        let store = loaded_store(mock, vec![food(1, "A")]).await.with_events(tx);
        let before = store.foods();

        store.create(draft("B")).await;

        assert!(store.foods().ptr_eq(&before));
        let mut saw_error = false;
        while let Ok(event) = rx.try_recv() {
            if event.event_type == EventType::Error {
                assert_eq!(event.operation, Operation::Create);
                saw_error = true;
            }
        }
        assert!(saw_error);
    }

    #[tokio::test]
    /// Updating merges onto the selection, PUTs it, and swaps in the echoed record only.
    async fn test_update_replaces_matching_entry() {
        let mut mock = MockFoodApi::new();
        mock.expect_update_food()
            .withf(|id: &u64, body: &Food| {
                *id == 2 && body.id == 2 && body.name == "C" && body.description == "B description"
            })
            .times(1)
            .returning(|_, body| Ok(body));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;
        let before = store.foods();

        store.begin_edit(Arc::clone(before.get(1).unwrap()));
        store.update(FoodEdit::default().with_name("C")).await;

        let mut renamed = food(2, "B");
        renamed.name = "C".to_string();
        let after = store.foods();
        assert_eq!(after, vec![food(1, "A"), renamed]);
        assert!(Arc::ptr_eq(before.get(0).unwrap(), after.get(0).unwrap()));
        assert!(!Arc::ptr_eq(before.get(1).unwrap(), after.get(1).unwrap()));
    }

    #[tokio::test]
    /// The replacement is keyed by the response id, not the request.
    async fn test_update_uses_response_payload() {
        let mut mock = MockFoodApi::new();
        mock.expect_update_food().times(1).returning(|_, _| {
            let mut echoed = food(2, "From server");
            echoed.available = false;
            Ok(echoed)
        });
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;

        store.begin_edit(Arc::clone(store.foods().get(1).unwrap()));
        store.update(FoodEdit::default().with_name("C")).await;

        let updated = Arc::clone(store.foods().get(1).unwrap());
        assert_eq!(updated.name, "From server");
        assert!(!updated.available);
    }

    #[tokio::test]
    /// A failed update leaves the list untouched.
    async fn test_update_failure_keeps_list() {
        let mut mock = MockFoodApi::new();
        mock.expect_update_food()
            .times(1)
            .returning(|_, _| Err(server_error()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;
        let before = store.foods();

        store.begin_edit(Arc::clone(before.get(0).unwrap()));
        store.update(FoodEdit::default().with_price(99.0)).await;

        assert!(store.foods().ptr_eq(&before));
    }

    #[tokio::test]
    /// Without a selection there is nothing to update and no request is made.
    async fn test_update_without_selection_is_skipped() {
        let store = loaded_store(MockFoodApi::new(), vec![food(1, "A")]).await;
        let before = store.foods();

        store.update(FoodEdit::default().with_name("C")).await;

        assert!(store.foods().ptr_eq(&before));
    }

    #[tokio::test]
    /// Deleting filters the id out of the list.
    async fn test_delete_filters_list() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food()
            .withf(|id: &u64| *id == 1)
            .times(1)
            .returning(|_| Ok(()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;

        store.delete(1).await.unwrap();

        assert_eq!(store.foods(), vec![food(2, "B")]);
    }

    #[tokio::test]
    /// A rejected delete still filters locally and is returned to the caller.
    async fn test_delete_failure_still_filters() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food()
            .times(1)
            .returning(|_| Err(server_error()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;

        let result = store.delete(1).await;

        assert!(result.is_err());
        assert_eq!(store.foods(), vec![food(2, "B")]);
    }

    #[tokio::test]
    /// Deleting an id that is not listed leaves the content unchanged.
    async fn test_delete_missing_id_is_noop() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food().times(1).returning(|_| Ok(()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;

        store.delete(42).await.unwrap();

        assert_eq!(store.foods(), vec![food(1, "A"), food(2, "B")]);
    }

    #[tokio::test]
    /// Overlapping deletes each apply to the list current when they resolve.
    async fn test_overlapping_deletes_both_apply() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food().times(2).returning(|_| Ok(()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B"), food(3, "C")]).await;

        let (first, second) = tokio::join!(store.delete(1), store.delete(3));
        first.unwrap();
        second.unwrap();

        assert_eq!(store.foods(), vec![food(2, "B")]);
    }

    #[tokio::test]
    /// Beginning an edit selects the food and opens the edit dialog.
    async fn test_begin_edit_opens_dialog() {
        let store = loaded_store(MockFoodApi::new(), vec![food(1, "A")]).await;
        let target = Arc::clone(store.foods().get(0).unwrap());

        store.begin_edit(Arc::clone(&target));
        store.begin_edit(Arc::clone(&target));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.edit_modal, ModalState::Open);
        assert!(Arc::ptr_eq(snapshot.editing.as_ref().unwrap(), &target));
        assert_eq!(snapshot.add_modal, ModalState::Closed);
    }

    #[tokio::test]
    /// Toggling a dialog twice returns it to where it started.
    async fn test_toggles_are_involutions() {
        let store = FoodStore::new(Arc::new(MockFoodApi::new()));

        store.toggle_add_modal();
        assert_eq!(store.snapshot().add_modal, ModalState::Open);
        store.toggle_add_modal();
        assert_eq!(store.snapshot().add_modal, ModalState::Closed);

        store.toggle_edit_modal();
        store.toggle_edit_modal();
        assert_eq!(store.snapshot().edit_modal, ModalState::Closed);
    }

    #[tokio::test]
    /// Subscribers are notified with a fresh list after a mutation.
    async fn test_subscribers_see_new_list() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food().times(1).returning(|_| Ok(()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;
        let mut receiver = store.subscribe();
        let before = receiver.borrow_and_update().foods.clone();

        store.delete(2).await.unwrap();

        assert!(receiver.has_changed().unwrap());
        let after = receiver.borrow_and_update().foods.clone();
        assert!(!after.ptr_eq(&before));
        assert_eq!(after, vec![food(1, "A")]);
    }

    #[tokio::test]
    /// Dispatch routes intents to the matching operation.
    async fn test_dispatch_routes_intents() {
        let mut mock = MockFoodApi::new();
        mock.expect_delete_food()
            .withf(|id: &u64| *id == 1)
            .times(1)
            .returning(|_| Ok(()));
        let store = loaded_store(mock, vec![food(1, "A"), food(2, "B")]).await;

        store.dispatch(Intent::ToggleAddModal).await.unwrap();
        assert!(store.snapshot().add_modal.is_open());

        let target = Arc::clone(store.foods().get(1).unwrap());
        store.dispatch(Intent::BeginEdit(target)).await.unwrap();
        assert!(store.snapshot().edit_modal.is_open());

        store.dispatch(Intent::Delete(1)).await.unwrap();
        assert_eq!(store.foods(), vec![food(2, "B")]);
    }
}
