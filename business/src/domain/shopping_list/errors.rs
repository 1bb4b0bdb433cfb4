#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.name_too_long")]
    NameTooLong,
    #[error("shopping_list.negative_budget")]
    NegativeBudget,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.item_rejected")]
    Item(#[from] crate::domain::item::errors::ItemError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
