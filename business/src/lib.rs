pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod list_enriched;
        pub mod patch;
        pub mod update;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod list_enriched;
            pub mod patch;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod pagination;
    }
}
