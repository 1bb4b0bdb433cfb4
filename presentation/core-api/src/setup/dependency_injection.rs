use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use logger::TracingLogger;
use persistence::db::{Database, DatabaseConfig};
use persistence::item::repository::ItemRepositorySqlite;
use persistence::price_history::repository::PriceHistoryRepositorySqlite;
use persistence::report::repository::ReportRepositorySqlite;
use persistence::shopping_list::repository::ShoppingListRepositorySqlite;

use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_by_list::GetItemsByListUseCaseImpl;
use business::application::item::save::SaveItemUseCaseImpl;
use business::application::item::set_purchased::SetItemPurchasedUseCaseImpl;
use business::application::item::suggest_defaults::SuggestItemDefaultsUseCaseImpl;
use business::application::price_history::average_price::AveragePriceUseCaseImpl;
use business::application::price_history::get_history::GetPriceHistoryUseCaseImpl;
use business::application::price_history::record::RecordPriceUseCaseImpl;
use business::application::price_history::similar_products::SimilarProductsUseCaseImpl;
use business::application::report::purchased_items::PurchasedItemsInRangeUseCaseImpl;
use business::application::report::spend_by_category::SpendByCategoryUseCaseImpl;
use business::application::shopping_list::add_catalog_products::AddCatalogProductsUseCaseImpl;
use business::application::shopping_list::delete::DeleteListUseCaseImpl;
use business::application::shopping_list::ensure_default::EnsureDefaultListUseCaseImpl;
use business::application::shopping_list::finalize::FinalizeListUseCaseImpl;
use business::application::shopping_list::get_all::GetAllListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetListByIdUseCaseImpl;
use business::application::shopping_list::save::SaveListUseCaseImpl;
use business::domain::catalog::model::CatalogTable;
use business::domain::item::errors::ItemError;
use business::domain::item::use_cases::delete::DeleteItemUseCase;
use business::domain::item::use_cases::get_by_list::{GetItemsByListParams, GetItemsByListUseCase};
use business::domain::item::use_cases::save::SaveItemUseCase;
use business::domain::item::use_cases::set_purchased::SetItemPurchasedUseCase;
use business::domain::item::use_cases::suggest_defaults::SuggestItemDefaultsUseCase;
use business::domain::price_history::use_cases::average_price::AveragePriceUseCase;
use business::domain::price_history::use_cases::get_history::GetPriceHistoryUseCase;
use business::domain::price_history::use_cases::record::RecordPriceUseCase;
use business::domain::price_history::use_cases::similar_products::SimilarProductsUseCase;
use business::domain::report::use_cases::purchased_items::PurchasedItemsInRangeUseCase;
use business::domain::report::use_cases::spend_by_category::SpendByCategoryUseCase;
use business::domain::shared::value_objects::ListId;
use business::domain::shopping_list::use_cases::add_catalog_products::AddCatalogProductsUseCase;
use business::domain::shopping_list::use_cases::delete::DeleteListUseCase;
use business::domain::shopping_list::use_cases::ensure_default::EnsureDefaultListUseCase;
use business::domain::shopping_list::use_cases::finalize::FinalizeListUseCase;
use business::domain::shopping_list::use_cases::get_all::GetAllListsUseCase;
use business::domain::shopping_list::use_cases::get_by_id::GetListByIdUseCase;
use business::domain::shopping_list::use_cases::save::SaveListUseCase;
use business::domain::totals::model::ShoppingTotals;
use business::domain::totals::tracker::TotalsTracker;

use crate::config::app_config::AppConfig;
use crate::setup::logging::init_tracing;

/// Every operation the UI can invoke, wired to the SQLite adapters.
///
/// The database is opened lazily by the first operation that needs it.
pub struct ShoppingCore {
    // Shopping lists
    pub get_all_lists: Arc<dyn GetAllListsUseCase>,
    pub get_list: Arc<dyn GetListByIdUseCase>,
    pub save_list: Arc<dyn SaveListUseCase>,
    pub delete_list: Arc<dyn DeleteListUseCase>,
    pub finalize_list: Arc<dyn FinalizeListUseCase>,
    pub ensure_default_list: Arc<dyn EnsureDefaultListUseCase>,
    pub add_catalog_products: Arc<dyn AddCatalogProductsUseCase>,
    // Items
    pub list_items: Arc<dyn GetItemsByListUseCase>,
    pub save_item: Arc<dyn SaveItemUseCase>,
    pub delete_item: Arc<dyn DeleteItemUseCase>,
    pub set_item_purchased: Arc<dyn SetItemPurchasedUseCase>,
    pub suggest_item_defaults: Arc<dyn SuggestItemDefaultsUseCase>,
    // Price history
    pub record_price: Arc<dyn RecordPriceUseCase>,
    pub price_history: Arc<dyn GetPriceHistoryUseCase>,
    pub average_price: Arc<dyn AveragePriceUseCase>,
    pub similar_products: Arc<dyn SimilarProductsUseCase>,
    // Reports
    pub purchased_items_in_range: Arc<dyn PurchasedItemsInRangeUseCase>,
    pub spend_by_category: Arc<dyn SpendByCategoryUseCase>,

    pub catalog: Arc<CatalogTable>,
    pub totals: Arc<TotalsTracker>,
    database: Arc<Database>,
}

impl ShoppingCore {
    /// Loads `.env`, installs tracing and wires the core from environment configuration.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        init_tracing();
        let config = AppConfig::from_env()?;
        Ok(Self::new(config.database))
    }

    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_catalog(config, CatalogTable::standard().clone())
    }

    /// Wires the core around an externally supplied catalog.
    pub fn with_catalog(config: DatabaseConfig, catalog: CatalogTable) -> Self {
        info!(url = %config.database_url, catalog_entries = catalog.len(), "Wiring shopping core");
        let logger = Arc::new(TracingLogger);
        let catalog = Arc::new(catalog);
        let database = Arc::new(Database::new(config));

        // Infrastructure adapters
        let list_repository = Arc::new(ShoppingListRepositorySqlite::new(database.clone()));
        let item_repository = Arc::new(ItemRepositorySqlite::new(database.clone()));
        let price_history_repository =
            Arc::new(PriceHistoryRepositorySqlite::new(database.clone()));
        let report_repository = Arc::new(ReportRepositorySqlite::new(database.clone()));

        // Shopping list use cases
        let get_all_lists = Arc::new(GetAllListsUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_list = Arc::new(GetListByIdUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let save_list = Arc::new(SaveListUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let delete_list = Arc::new(DeleteListUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let finalize_list = Arc::new(FinalizeListUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let ensure_default_list = Arc::new(EnsureDefaultListUseCaseImpl {
            list_repository: list_repository.clone(),
            item_repository: item_repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let add_catalog_products = Arc::new(AddCatalogProductsUseCaseImpl {
            list_repository,
            item_repository: item_repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let list_items = Arc::new(GetItemsByListUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let save_item = Arc::new(SaveItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let set_item_purchased = Arc::new(SetItemPurchasedUseCaseImpl {
            repository: item_repository,
            logger: logger.clone(),
        });
        let suggest_item_defaults = Arc::new(SuggestItemDefaultsUseCaseImpl {
            catalog: catalog.clone(),
            price_history_repository: price_history_repository.clone(),
            logger: logger.clone(),
        });

        // Price history use cases
        let record_price = Arc::new(RecordPriceUseCaseImpl {
            repository: price_history_repository.clone(),
            logger: logger.clone(),
        });
        let price_history = Arc::new(GetPriceHistoryUseCaseImpl {
            repository: price_history_repository.clone(),
            logger: logger.clone(),
        });
        let average_price = Arc::new(AveragePriceUseCaseImpl {
            repository: price_history_repository.clone(),
            logger: logger.clone(),
        });
        let similar_products = Arc::new(SimilarProductsUseCaseImpl {
            repository: price_history_repository,
            logger: logger.clone(),
        });

        // Report use cases
        let purchased_items_in_range = Arc::new(PurchasedItemsInRangeUseCaseImpl {
            repository: report_repository.clone(),
            logger: logger.clone(),
        });
        let spend_by_category = Arc::new(SpendByCategoryUseCaseImpl {
            repository: report_repository,
            logger,
        });

        Self {
            get_all_lists,
            get_list,
            save_list,
            delete_list,
            finalize_list,
            ensure_default_list,
            add_catalog_products,
            list_items,
            save_item,
            delete_item,
            set_item_purchased,
            suggest_item_defaults,
            record_price,
            price_history,
            average_price,
            similar_products,
            purchased_items_in_range,
            spend_by_category,
            catalog,
            totals: Arc::new(TotalsTracker::new()),
            database,
        }
    }

    /// Reloads the items of `list_id` and publishes their totals to subscribers.
    pub async fn refresh_totals(&self, list_id: ListId) -> Result<ShoppingTotals, ItemError> {
        let items = self
            .list_items
            .execute(GetItemsByListParams { list_id })
            .await?;
        Ok(self.totals.update(&items))
    }

    /// Closes the database if it was opened.
    pub async fn shutdown(&self) {
        self.database.close().await;
    }
}
