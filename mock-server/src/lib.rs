use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

#[derive(Deserialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

/// Full replacement body. Any `id` in the payload is ignored; the path wins.
#[derive(Deserialize)]
pub struct FoodBody {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

/// Items keyed by id; ids are handed out in increasing order, so iteration
/// order is creation order.
#[derive(Debug, Default)]
pub struct Store {
    foods: BTreeMap<i64, Food>,
    next_id: i64,
}

impl Store {
    fn seeded(seed: Vec<Food>) -> Self {
        let next_id = seed.iter().map(|f| f.id).max().unwrap_or(0);
        let mut foods = BTreeMap::new();
        for food in seed {
            let id = food.id;
            if foods.insert(id, food).is_some() {
                warn!("seed holds id {id} more than once, keeping the last one");
            }
        }
        Self { foods, next_id }
    }

    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-loaded with `seed`. New ids continue after the highest seeded one.
pub fn app_with(seed: Vec<Food>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(seed)));
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{id}", get(get_food).put(replace_food).delete(delete_food))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, seed: Vec<Food>) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("serving /foods on {addr} with {} seeded item(s)", seed.len());
    }
    axum::serve(listener, app_with(seed)).await
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed file lists id {0} more than once")]
    DuplicateId(i64),
}

/// Read a JSON array of items, as used for `MENU_SEED_FILE`. Ids must be unique.
pub fn load_seed(raw: &str) -> Result<Vec<Food>, SeedError> {
    let foods: Vec<Food> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    if let Some(dup) = foods.iter().find(|f| !seen.insert(f.id)) {
        return Err(SeedError::DuplicateId(dup.id));
    }
    Ok(foods)
}

async fn list_foods(State(db): State<Db>) -> Json<Vec<Food>> {
    let store = db.read().await;
    Json(store.foods.values().cloned().collect())
}

async fn create_food(
    State(db): State<Db>,
    Json(input): Json<NewFood>,
) -> (StatusCode, Json<Food>) {
    let mut store = db.write().await;
    let food = Food {
        id: store.allocate_id(),
        name: input.name,
        image: input.image,
        price: input.price,
        description: input.description,
        available: input.available,
    };
    debug!("created food {}", food.id);
    store.foods.insert(food.id, food.clone());
    (StatusCode::CREATED, Json(food))
}

async fn get_food(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Food>, StatusCode> {
    let store = db.read().await;
    store.foods.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_food(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<FoodBody>,
) -> Result<Json<Food>, StatusCode> {
    let mut store = db.write().await;
    let food = store.foods.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *food = Food {
        id,
        name: input.name,
        image: input.image,
        price: input.price,
        description: input.description,
        available: input.available,
    };
    debug!("replaced food {id}");
    Ok(Json(food.clone()))
}

async fn delete_food(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.foods.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!("deleted food {}", removed.id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: i64) -> Food {
        Food {
            id,
            name: "Ao molho".to_string(),
            image: "ao-molho.png".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            available: true,
        }
    }

    #[test]
    fn food_serializes_to_json() {
        let json = serde_json::to_value(food(1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], "19.90");
        assert_eq!(json["available"], true);
    }

    #[test]
    fn new_food_defaults_available_to_true() {
        let input: NewFood = serde_json::from_str(
            r#"{"name":"A","image":"a.png","price":"1.00","description":"d"}"#,
        )
        .unwrap();
        assert!(input.available);
    }

    #[test]
    fn new_food_accepts_explicit_available() {
        let input: NewFood = serde_json::from_str(
            r#"{"name":"A","image":"a.png","price":"1.00","description":"d","available":false}"#,
        )
        .unwrap();
        assert!(!input.available);
    }

    #[test]
    fn new_food_rejects_missing_name() {
        let result: Result<NewFood, _> =
            serde_json::from_str(r#"{"image":"a.png","price":"1.00","description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn food_body_ignores_id() {
        let input: FoodBody = serde_json::from_str(
            r#"{"id":99,"name":"A","image":"a.png","price":"1.00","description":"d","available":false}"#,
        )
        .unwrap();
        assert_eq!(input.name, "A");
        assert!(!input.available);
    }

    #[test]
    fn seeded_store_continues_after_highest_id() {
        let mut store = Store::seeded(vec![food(3), food(7)]);
        assert_eq!(store.allocate_id(), 8);
        assert_eq!(Store::default().allocate_id(), 1);
    }

    #[test]
    fn load_seed_reads_array() {
        let foods = load_seed(&serde_json::to_string(&vec![food(1), food(2)]).unwrap()).unwrap();
        assert_eq!(foods.len(), 2);
        assert!(matches!(load_seed("{}"), Err(SeedError::Parse(_))));
    }

    #[test]
    fn load_seed_rejects_duplicate_ids() {
        let raw = serde_json::to_string(&vec![food(1), food(2), food(1)]).unwrap();
        assert!(matches!(load_seed(&raw), Err(SeedError::DuplicateId(1))));
    }

    #[test]
    fn seeded_store_keeps_one_record_per_id() {
        let mut last = food(4);
        last.name = "Segundo".to_string();
        let store = Store::seeded(vec![food(4), last.clone()]);
        assert_eq!(store.foods.len(), 1);
        assert_eq!(store.foods[&4], last);
    }
}
