//! Local mirror of the remote `/foods` collection.
//!
//! # Design
//! `MenuSync` owns the ordered list of menu items the dashboard renders and
//! the single editing-target slot. Every mutation resolves its remote call
//! first and only then reconciles local state with the server's response, so
//! a failed call never leaves a partial local change behind.
//!
//! Reconciliation replaces records wholesale with what the server returned.
//! Creates append, updates and toggles keep position, deletes remove without
//! reordering the rest. Identity is exact equality of `Food::id`, found by a
//! linear scan; menus are small.

use log::{debug, info, warn};

use crate::client::MenuClient;
use crate::error::{SyncError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Food, FoodDraft, NewFood};

pub struct MenuSync<T> {
    client: MenuClient,
    transport: T,
    foods: Vec<Food>,
    editing: Option<Food>,
}

impl<T: Transport> MenuSync<T> {
    /// Starts with an empty collection; call `initialize` to load it.
    pub fn new(client: MenuClient, transport: T) -> Self {
        Self {
            client,
            transport,
            foods: Vec::new(),
            editing: None,
        }
    }

    /// Current collection in display order.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn get(&self, id: i64) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn editing_target(&self) -> Option<&Food> {
        self.editing.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the whole collection with the server's list, in server order.
    ///
    /// On failure the collection is left as it was.
    pub fn initialize(&mut self) -> Result<usize, SyncError> {
        let request = self.client.build_list_foods();
        let response = self.round_trip(request)?;
        let foods = self.client.parse_list_foods(response)?;
        info!("loaded {} menu item(s)", foods.len());
        self.foods = foods;
        Ok(self.foods.len())
    }

    /// Create a new item, always as available, and append the server's copy.
    pub fn add(&mut self, draft: FoodDraft) -> Result<Food, SyncError> {
        match self.create(draft) {
            Ok(food) => {
                self.append(food.clone());
                Ok(food)
            }
            Err(err) => {
                warn!("failed to create menu item: {err}");
                Err(err)
            }
        }
    }

    /// Replace item `id` with `draft`, keeping the id and availability it had
    /// when editing started.
    ///
    /// If the collection no longer holds `id` the server's answer is still
    /// returned but nothing local changes. An answer carrying another id is
    /// rejected with `SyncError::IdMismatch`.
    pub fn update(&mut self, id: i64, available: bool, draft: FoodDraft) -> Result<Food, SyncError> {
        let replacement = Food::from_draft(id, available, draft);
        self.replace(&replacement)
    }

    /// `update` using the id and availability held in the editing-target slot.
    pub fn update_editing(&mut self, draft: FoodDraft) -> Result<Food, SyncError> {
        let (id, available) = match &self.editing {
            Some(target) => (target.id, target.available),
            None => return Err(SyncError::NoEditingTarget),
        };
        self.update(id, available, draft)
    }

    /// Send `food` as-is. The caller flips `available` beforehand, usually
    /// with `Food::toggled`.
    pub fn toggle_availability(&mut self, food: &Food) -> Result<Food, SyncError> {
        self.replace(food)
    }

    /// Delete `id` remotely, then drop every local record carrying it.
    pub fn delete(&mut self, id: i64) -> Result<(), SyncError> {
        let request = self.client.build_delete_food(id);
        let response = self.round_trip(request)?;
        self.client.parse_delete_food(response)?;

        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        debug!("deleted menu item {id}, {} local record(s) removed", before - self.foods.len());
        Ok(())
    }

    /// Remember a copy of `food` as the record being edited.
    pub fn set_editing_target(&mut self, food: &Food) {
        self.editing = Some(food.clone());
    }

    pub fn clear_editing_target(&mut self) {
        self.editing = None;
    }

    fn create(&mut self, draft: FoodDraft) -> Result<Food, SyncError> {
        let request = self.client.build_create_food(&NewFood::from_draft(draft, true))?;
        let response = self.round_trip(request)?;
        Ok(self.client.parse_create_food(response)?)
    }

    fn replace(&mut self, food: &Food) -> Result<Food, SyncError> {
        let request = self.client.build_replace_food(food)?;
        let response = self.round_trip(request)?;
        let stored = self.client.parse_replace_food(response)?;
        if stored.id != food.id {
            warn!("replace of menu item {} answered with id {}", food.id, stored.id);
            return Err(SyncError::IdMismatch {
                sent: food.id,
                returned: stored.id,
            });
        }

        match self.position(food.id) {
            Some(index) => {
                debug!("replaced menu item {} at position {index}", food.id);
                self.foods[index] = stored.clone();
            }
            None => warn!("menu item {} is not in the local list, skipping reconcile", food.id),
        }
        Ok(stored)
    }

    fn append(&mut self, food: Food) {
        // A well-behaved server never reuses ids; keep the list unique if one does.
        if let Some(index) = self.position(food.id) {
            warn!("server returned existing id {} for a new item", food.id);
            self.foods[index] = food;
            return;
        }
        debug!("appended menu item {}", food.id);
        self.foods.push(food);
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.foods.iter().position(|food| food.id == id)
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("{} {}", request.method.as_str(), request.path);
        self.transport.execute(request)
    }
}
