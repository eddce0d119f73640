pub mod shared {
    pub mod infrastructure {
        pub mod blob_storage;
    }
}

pub mod modules {
    pub mod address_book {
        pub mod core {
            pub mod csv_line;
            pub mod record;
            pub mod record_store;
        }
        pub mod use_cases {
            pub mod create_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_records {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_record {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_records {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod export_records {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_records {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
        }
    }
}

pub mod shell;
