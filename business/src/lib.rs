pub mod application {
    pub mod item {
        pub mod delete;
        pub mod get_by_list;
        pub mod save;
        pub mod set_purchased;
        pub mod suggest_defaults;
    }
    pub mod price_history {
        pub mod average_price;
        pub mod get_history;
        pub mod record;
        pub mod similar_products;
    }
    pub mod report {
        pub mod purchased_items;
        pub mod spend_by_category;
    }
    pub mod shopping_list {
        pub mod add_catalog_products;
        pub mod delete;
        pub mod ensure_default;
        pub mod finalize;
        pub mod get_all;
        pub mod get_by_id;
        pub mod save;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod model;
        mod seed;
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_list;
            pub mod save;
            pub mod set_purchased;
            pub mod suggest_defaults;
        }
    }
    pub mod price_history {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod average_price;
            pub mod get_history;
            pub mod record;
            pub mod similar_products;
        }
    }
    pub mod report {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod purchased_items;
            pub mod spend_by_category;
        }
    }
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_catalog_products;
            pub mod delete;
            pub mod ensure_default;
            pub mod finalize;
            pub mod get_all;
            pub mod get_by_id;
            pub mod save;
        }
    }
    pub mod totals {
        pub mod model;
        pub mod tracker;
    }
}
