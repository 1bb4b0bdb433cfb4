pub mod db;
mod error;
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod price_history {
    pub mod entity;
    pub mod repository;
}
pub mod report {
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
