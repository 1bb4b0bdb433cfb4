use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::SIMILAR_PRODUCTS_LIMIT;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::price_history::use_cases::similar_products::{
    SimilarProductsParams, SimilarProductsUseCase,
};

pub struct SimilarProductsUseCaseImpl {
    pub repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SimilarProductsUseCase for SimilarProductsUseCaseImpl {
    async fn execute(&self, params: SimilarProductsParams) -> Result<Vec<String>, PriceHistoryError> {
        let term = params.term.trim();
        if term.is_empty() {
            return Ok(vec![]);
        }

        let names = self
            .repository
            .find_product_names(term, SIMILAR_PRODUCTS_LIMIT)
            .await?;

        self.logger.debug(&format!(
            "Found {} products matching '{}'",
            names.len(),
            term
        ));
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::price_history::model::PriceHistoryEntry;
    use crate::domain::shared::value_objects::{PriceEntryId, Unit};
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub PriceRepo {}

        #[async_trait]
        impl PriceHistoryRepository for PriceRepo {
            async fn record(&self, entry: &PriceHistoryEntry) -> Result<PriceEntryId, RepositoryError>;
            async fn get_by_product(&self, product_name: &str, limit: u32) -> Result<Vec<PriceHistoryEntry>, RepositoryError>;
            async fn recent_prices(&self, product_name: &str, unit: Unit, limit: u32) -> Result<Vec<BigDecimal>, RepositoryError>;
            async fn find_product_names(&self, term: &str, limit: u32) -> Result<Vec<String>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_search_with_limit() {
        let mut repo = MockPriceRepo::new();
        repo.expect_find_product_names()
            .withf(|term, limit| term == "coff" && *limit == SIMILAR_PRODUCTS_LIMIT)
            .returning(|_, _| Ok(vec!["Coffee".to_string(), "Decaf coffee".to_string()]));

        let use_case = SimilarProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let names = use_case
            .execute(SimilarProductsParams {
                term: "coff".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(names, vec!["Coffee", "Decaf coffee"]);
    }

    #[tokio::test]
    async fn should_return_empty_for_blank_term() {
        let mut repo = MockPriceRepo::new();
        repo.expect_find_product_names().never();

        let use_case = SimilarProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let names = use_case
            .execute(SimilarProductsParams {
                term: " ".to_string(),
            })
            .await
            .unwrap();

        assert!(names.is_empty());
    }
}
