pub mod application {
    pub mod history {
        pub mod record;
    }
    pub mod selection {
        pub mod select;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod dish {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod history {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod record;
        }
    }
    pub mod selection {
        pub mod errors;
        pub mod intelligent;
        pub mod random;
        pub mod value_objects;
        pub mod use_cases {
            pub mod select;
        }
    }
}
