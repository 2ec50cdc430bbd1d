pub mod shared {
    pub mod http {
        pub mod error;
        pub mod response;
        pub mod user_id;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod user;
            pub mod user_store;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;
