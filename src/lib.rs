pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod hotels {
        pub mod core {
            pub mod entities;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod check_hotel_entitlement {
                pub mod decide;
                pub mod handler;
            }
            pub mod list_hotels {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_hotel_rooms {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod hotel_store;
                pub mod store_in_memory;
                pub mod ticket_lookup;
            }
        }
    }
}

pub mod shell;
