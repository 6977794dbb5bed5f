pub mod application {
    pub mod authenticity {
        pub mod classify;
    }
    pub mod barcode {
        pub mod decode;
    }
    pub mod product {
        pub mod lookup;
    }
    pub mod session {
        pub mod resolve_code;
    }
    pub mod verification {
        pub mod verify;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod authenticity {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod classify;
        }
    }
    pub mod barcode {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod decode;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod registry;
        pub mod use_cases {
            pub mod lookup;
        }
    }
    pub mod session {
        pub mod model;
        pub mod use_cases {
            pub mod resolve_code;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod verification {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod verify;
        }
    }
}
