pub mod modules {
    pub mod entertainers {
        pub mod core {
            pub mod engagement;
            pub mod entertainer;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_entertainers {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_entertainer {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_entertainer {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_entertainer {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_entertainer {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
            }
            pub mod outbound {
                pub mod entertainer_store;
                pub mod in_memory;
                pub mod postgres;
                pub mod summary_queries;
            }
        }
    }
}

pub mod shell;
