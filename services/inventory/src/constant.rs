pub mod app_meta {
    pub const LABEL: &str = "inventory";
}

pub mod hard_limit {
    pub const MAX_MOCK_TRANSACTIONS: u32 = 10000u32;
    pub const MAX_LIST_LIMIT: u32 = 1000u32;
}

// sentinel accepted by the type / status filters
pub const FILTER_MATCH_ALL: &str = "ALL";

pub mod mock_data {
    pub const PRODUCTS: [&str; 10] = [
        "Laptop Dell XPS",
        "iPhone 14 Pro",
        "Samsung Galaxy S23",
        "iPad Air",
        "MacBook Pro",
        "Sony Headphones",
        "Logitech Mouse",
        "Mechanical Keyboard",
        "Monitor 27\"",
        "USB-C Cable",
    ];
    pub const LOCATIONS: [&str; 5] = [
        "Warehouse A",
        "Warehouse B",
        "Warehouse C",
        "Storage 1",
        "Storage 2",
    ];
    pub const MAX_QUANTITY: u32 = 100;
    pub const MAX_SKU_SERIAL: u32 = 10000;
    pub const MAX_REF_SERIAL: u32 = 100000;
    pub const NUM_DAYS_HISTORY: i64 = 30;
}

pub mod api_path {
    pub const INBOUND_TXN: &str = "/api/inbound/transactions";
    pub const OUTBOUND_TXN: &str = "/api/outbound/transactions";
    pub const MASTER_PRODUCTS: &str = "/api/master/products";
    pub const MASTER_LOCATIONS: &str = "/api/master/locations";
    pub const MASTER_SKUS: &str = "/api/master/skus";
    pub const STOCK: &str = "/api/inventory/stock";
    pub const TASKS: &str = "/api/tasks";
    pub const USER_ME: &str = "/api/users/me";
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    pub const TENANT_INFO: &str = "/api/tenant/info";
    pub const TENANT_SETTINGS: &str = "/api/tenant/settings";
}
